pub mod models;
pub mod reveal;
pub mod segments;

// Re-export key types for easier usage
pub use models::{catalog::*, message::*};
pub use reveal::Reveal;
pub use segments::{Segment, extract_segments};
