//! Tokenization, macro expansion and parsing of TeX math input.

pub mod error;
pub mod lexer;
pub mod macros;
pub mod parse;
pub mod token;
