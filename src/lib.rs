#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod types;

extern crate regex;

/// Index of a token in a parse session's token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenRef(pub u32);

/// Index of a node in a parse session's syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(pub u32);

/// Index of an entry in a parse session's type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef(pub u32);

impl TokenRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl NodeRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TypeRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Returns the 1-based `line` of `source` without its terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}


pub fn display_error(error: Error, source: &str, file: &str) {
    /*
        Error: VariableNotDeclared (Variable `x` not declared)
        -> final.fl:3
          |
        3 | let y = x;
          | --------^
    */

    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}:{}", file, line);
    println!("{:>padding$}", "|");

    if let Some(text) = get_line(source, line) {
        let trimmed = text.trim();
        println!("{} | {}", line_string, trimmed);

        let offset = error
            .get_offending()
            .and_then(|needle| trimmed.find(needle))
            .unwrap_or(0);
        let arrows = offset + 1;

        println!("{:>padding$} {:->arrows$}", "|", "^");
    }
}
