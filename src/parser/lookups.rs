use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind, NodeRef};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    LogicalOr,
    LogicalAnd,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<NodeRef, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<NodeRef, Error>;
pub type LEDHandler = fn(&mut Parser, NodeRef, BindingPower) -> Result<NodeRef, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment, lowest and right associative
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::StarEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::SlashEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PercentEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::AmpersandEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PipeEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::CaretEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::ShiftLeftEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::ShiftRightEquals, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_binary_expr);

    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_binary_expr);

    // Additive class: + - | ^
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Pipe, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::Additive, parse_binary_expr);

    // Multiplicative class: * / % << >> &
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::ShiftLeft, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::ShiftRight, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Ampersand, BindingPower::Multiplicative, parse_binary_expr);

    // Call
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Float, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Prefix operators, including the pointer/slice/array type constructors
    parser.nud(TokenKind::Plus, parse_unary_expr);
    parser.nud(TokenKind::Dash, parse_unary_expr);
    parser.nud(TokenKind::Star, parse_unary_expr);
    parser.nud(TokenKind::Tilde, parse_unary_expr);
    parser.nud(TokenKind::Not, parse_unary_expr);
    parser.nud(TokenKind::Ampersand, parse_unary_expr);
    parser.nud(TokenKind::Question, parse_unary_expr);
    parser.nud(TokenKind::OpenBracket, parse_unary_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::Const, parse_var_decl_stmt);
    parser.stmt(TokenKind::Static, parse_var_decl_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
