use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("struct", TokenKind::Struct);
        map.insert("union", TokenKind::Union);
        map.insert("enum", TokenKind::Enum);
        map.insert("static", TokenKind::Static);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("const", TokenKind::Const);
        map.insert("type", TokenKind::Type);
        map.insert("func", TokenKind::Func);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("for", TokenKind::For);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // A lexical error, preserved as a token so the parser
    // reports it at the point it is consumed
    ErrorCharacter,
    ErrorFloatExponent,
    ErrorString,
    ErrorComment,

    Number,
    Float,
    String,
    Identifier,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Comma,
    Semicolon,
    Dot,
    ColonColon, // ::
    Colon,
    Question,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Ampersand,
    Pipe,
    Caret,
    Tilde,
    ShiftLeft,
    ShiftRight,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    AmpersandEquals,
    PipeEquals,
    CaretEquals,
    ShiftLeftEquals,
    ShiftRightEquals,

    Comment,
    MultilineComment,

    // Reserved
    Struct,
    Union,
    Enum,
    Static,
    Let,
    Mut,
    Const,
    Type,
    Func,
    Return,
    If,
    Else,
    Switch,
    Case,
    For,
    Break,
    Continue,
}

impl TokenKind {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenKind::ErrorCharacter
                | TokenKind::ErrorFloatExponent
                | TokenKind::ErrorString
                | TokenKind::ErrorComment
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::MultilineComment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,
    pub line: u32,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token<'_> {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Float,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
