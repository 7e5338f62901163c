//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout parsing. It
//! includes:
//!
//! - Error structures with source line information
//! - Specific error variants for lexing, parsing, and typing
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
