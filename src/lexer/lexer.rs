use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&str) -> TokenKind;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// A pull-based lexer over one source string. Tokens borrow their text
/// from the source, so the lexer never allocates per token.
pub struct Lexer<'src> {
    patterns: Vec<RegexPattern>,
    source: &'src str,
    pos: usize,
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            pos: 0,
            line: 1,
            // Ordered so that longer operators match before their
            // prefixes, and comment openers before bare `/`
            patterns: vec![
                RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?(e[0-9]*)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("^\"(?s:[^\"\\\\]|\\\\.)*\"").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
                RegexPattern { regex: Regex::new("^\"").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ErrorString) },
                RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment) },
                RegexPattern { regex: Regex::new("^/\\*(?s:.)*?\\*/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MultilineComment) },
                RegexPattern { regex: Regex::new("^/\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ErrorComment) },
                RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
                RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
                RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
                RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
                RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
                RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
                RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
                RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
                RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
                RegexPattern { regex: Regex::new("^::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonColon) },
                RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
                RegexPattern { regex: Regex::new("^\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question) },
                RegexPattern { regex: Regex::new("^<<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeftEquals) },
                RegexPattern { regex: Regex::new("^>>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRightEquals) },
                RegexPattern { regex: Regex::new("^<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft) },
                RegexPattern { regex: Regex::new("^>>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRight) },
                RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
                RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
                RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
                RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
                RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
                RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
                RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And) },
                RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or) },
                RegexPattern { regex: Regex::new("^\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals) },
                RegexPattern { regex: Regex::new("^-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals) },
                RegexPattern { regex: Regex::new("^\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals) },
                RegexPattern { regex: Regex::new("^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals) },
                RegexPattern { regex: Regex::new("^%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals) },
                RegexPattern { regex: Regex::new("^&=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AmpersandEquals) },
                RegexPattern { regex: Regex::new("^\\|=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PipeEquals) },
                RegexPattern { regex: Regex::new("^\\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CaretEquals) },
                RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
                RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
                RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand) },
                RegexPattern { regex: Regex::new("^\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe) },
                RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret) },
                RegexPattern { regex: Regex::new("^~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde) },
                RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
                RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
                RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
                RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
                RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
            ],
            source,
        }
    }

    /// Produces the next token, skipping whitespace. At the end of the
    /// source this returns EOF tokens forever.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "EOF", self.line);
        }

        let line = self.line;
        let remaining = &self.source[self.pos..];

        for pattern in self.patterns.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                let mut value = found.as_str();
                let kind = (pattern.handler)(value);

                // An unterminated string or comment swallows the rest
                // of the source
                if let TokenKind::ErrorString | TokenKind::ErrorComment = kind {
                    value = remaining;
                }

                self.pos += value.len();
                self.line += count_newlines(value);
                return MK_TOKEN!(kind, value, line);
            }
        }

        let width = remaining.chars().next().map_or(1, |c| c.len_utf8());
        let value = &remaining[..width];
        self.pos += width;
        MK_TOKEN!(TokenKind::ErrorCharacter, value, line)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.source.as_bytes();

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                b' ' | b'\t' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }
}

fn symbol_handler(value: &str) -> TokenKind {
    match RESERVED_LOOKUP.get(value) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    }
}

fn number_handler(value: &str) -> TokenKind {
    if value.ends_with('e') {
        TokenKind::ErrorFloatExponent
    } else if value.contains('.') || value.contains('e') {
        TokenKind::Float
    } else {
        TokenKind::Number
    }
}

fn count_newlines(value: &str) -> u32 {
    value.bytes().filter(|byte| *byte == b'\n').count() as u32
}

/// Runs the lexer over a whole source string, including the final EOF
/// token. Lexical errors appear in the stream as error-kind tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let kind = token.kind;
        tokens.push(token);

        if kind == TokenKind::EOF {
            return tokens;
        }
    }
}
