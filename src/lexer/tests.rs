//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals
//! - Operators and punctuation
//! - Comments
//! - Error-kind tokens

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let source = "struct union enum static let mut const type func return if else switch case for break continue";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Struct);
    assert_eq!(tokens[1].kind, TokenKind::Union);
    assert_eq!(tokens[2].kind, TokenKind::Enum);
    assert_eq!(tokens[3].kind, TokenKind::Static);
    assert_eq!(tokens[4].kind, TokenKind::Let);
    assert_eq!(tokens[5].kind, TokenKind::Mut);
    assert_eq!(tokens[6].kind, TokenKind::Const);
    assert_eq!(tokens[7].kind, TokenKind::Type);
    assert_eq!(tokens[8].kind, TokenKind::Func);
    assert_eq!(tokens[9].kind, TokenKind::Return);
    assert_eq!(tokens[10].kind, TokenKind::If);
    assert_eq!(tokens[11].kind, TokenKind::Else);
    assert_eq!(tokens[12].kind, TokenKind::Switch);
    assert_eq!(tokens[13].kind, TokenKind::Case);
    assert_eq!(tokens[14].kind, TokenKind::For);
    assert_eq!(tokens[15].kind, TokenKind::Break);
    assert_eq!(tokens[16].kind, TokenKind::Continue);
    assert_eq!(tokens[17].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore letter";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    // A keyword prefix does not make an identifier reserved
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 3.14 100. 2e8 6.02e23";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Float);
    assert_eq!(tokens[2].value, "3.14");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.");
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[4].value, "2e8");
    assert_eq!(tokens[5].kind, TokenKind::Float);
    assert_eq!(tokens[5].value, "6.02e23");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_float_missing_exponent() {
    let source = "3e";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::ErrorFloatExponent);
    assert_eq!(tokens[0].value, "3e");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#;
    let tokens = tokenize(source);

    // String values keep their quotes and escapes verbatim
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#""hello""#);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, r#""multiple words""#);
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, r#""""#);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let source = r#""quote\"test""#;
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#""quote\"test""#);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "let s = \"oops;\nlet t = 1;";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    // The error token swallows everything to the end of the source
    assert_eq!(tokens[3].kind, TokenKind::ErrorString);
    assert_eq!(tokens[3].value, "\"oops;\nlet t = 1;");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = && || ! & | ^ ~ << >>";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Percent);
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens[6].kind, TokenKind::NotEquals);
    assert_eq!(tokens[7].kind, TokenKind::Less);
    assert_eq!(tokens[8].kind, TokenKind::Greater);
    assert_eq!(tokens[9].kind, TokenKind::LessEquals);
    assert_eq!(tokens[10].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[11].kind, TokenKind::Assignment);
    assert_eq!(tokens[12].kind, TokenKind::And);
    assert_eq!(tokens[13].kind, TokenKind::Or);
    assert_eq!(tokens[14].kind, TokenKind::Not);
    assert_eq!(tokens[15].kind, TokenKind::Ampersand);
    assert_eq!(tokens[16].kind, TokenKind::Pipe);
    assert_eq!(tokens[17].kind, TokenKind::Caret);
    assert_eq!(tokens[18].kind, TokenKind::Tilde);
    assert_eq!(tokens[19].kind, TokenKind::ShiftLeft);
    assert_eq!(tokens[20].kind, TokenKind::ShiftRight);
    assert_eq!(tokens[21].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_compound_assignment() {
    let source = "+= -= *= /= %= &= |= ^= <<= >>=";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::PlusEquals);
    assert_eq!(tokens[1].kind, TokenKind::MinusEquals);
    assert_eq!(tokens[2].kind, TokenKind::StarEquals);
    assert_eq!(tokens[3].kind, TokenKind::SlashEquals);
    assert_eq!(tokens[4].kind, TokenKind::PercentEquals);
    assert_eq!(tokens[5].kind, TokenKind::AmpersandEquals);
    assert_eq!(tokens[6].kind, TokenKind::PipeEquals);
    assert_eq!(tokens[7].kind, TokenKind::CaretEquals);
    assert_eq!(tokens[8].kind, TokenKind::ShiftLeftEquals);
    assert_eq!(tokens[9].kind, TokenKind::ShiftRightEquals);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] . , ; : :: ?";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[5].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[6].kind, TokenKind::Dot);
    assert_eq!(tokens[7].kind, TokenKind::Comma);
    assert_eq!(tokens[8].kind, TokenKind::Semicolon);
    assert_eq!(tokens[9].kind, TokenKind::Colon);
    assert_eq!(tokens[10].kind, TokenKind::ColonColon);
    assert_eq!(tokens[11].kind, TokenKind::Question);
    assert_eq!(tokens[12].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_shift_against_compare() {
    let source = "a << b <= c < d <<= e";
    let tokens = tokenize(source);

    assert_eq!(tokens[1].kind, TokenKind::ShiftLeft);
    assert_eq!(tokens[3].kind, TokenKind::LessEquals);
    assert_eq!(tokens[5].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::ShiftLeftEquals);
}

#[test]
fn test_tokenize_caret_is_xor() {
    let source = "a ^ b ^= c";
    let tokens = tokenize(source);

    assert_eq!(tokens[1].kind, TokenKind::Caret);
    assert_eq!(tokens[3].kind, TokenKind::CaretEquals);
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5; // this is a comment\nlet y = 10;";
    let tokens = tokenize(source);

    // Comments are produced as tokens; the parser discards them
    assert_eq!(tokens[5].kind, TokenKind::Comment);
    assert_eq!(tokens[5].value, "// this is a comment");
    assert_eq!(tokens[6].kind, TokenKind::Let);
    assert_eq!(tokens[6].line, 2);
}

#[test]
fn test_tokenize_multiline_comment() {
    let source = "1 /* one\ntwo */ 2";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::MultilineComment);
    assert_eq!(tokens[1].value, "/* one\ntwo */");
    assert_eq!(tokens[1].line, 1);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn test_tokenize_unterminated_comment() {
    let source = "1 /* never closed";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::ErrorComment);
    assert_eq!(tokens[1].value, "/* never closed");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "let x = @;";
    let tokens = tokenize(source);

    assert_eq!(tokens[3].kind, TokenKind::ErrorCharacter);
    assert_eq!(tokens[3].value, "@");
    // Lexing continues after the bad character
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_lines() {
    let source = "let a = 1;\n\nlet b = 2;";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[4].line, 1);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[5].line, 3);
}

#[test]
fn test_tokenize_double_colon_path() {
    let source = "vec::len";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "vec");
    assert_eq!(tokens[1].kind, TokenKind::ColonColon);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "len");
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let x = 42;";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_next_token_after_eof() {
    let mut lexer = Lexer::new("1");

    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let \t x \r\n =   42  ";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].line, 2);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}
