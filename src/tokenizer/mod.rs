//! Tokenizer module: turns a flat expression string into operand and operator tokens

mod core;
mod token;

pub use self::core::{Tokenizer, tokenize};
pub use token::{Operator, Token};
