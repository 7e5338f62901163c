//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Lexical errors surfaced as error-kind tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
