mod kinds;
mod parser;
mod types;

pub use kinds::VerseTag;
pub use parser::extract_segments;
pub use types::Segment;
