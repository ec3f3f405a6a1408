//! Parser for template bodies

mod body;
pub mod lexer;

pub use body::{is_identifier, parse, Segment};
