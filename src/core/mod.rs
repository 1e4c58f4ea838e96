//! Core domain types
//!
//! The fundamental types of the game: words and feedback patterns. Pure,
//! dependency-light, and covered by colocated tests.

mod pattern;
mod word;

pub use pattern::Pattern;
pub use word::Word;
