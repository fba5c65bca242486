pub mod catalog;
pub mod message;

pub use catalog::{Scripture, builtin_scriptures, find_scripture};
pub use message::{Message, Role};
