//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing entry
//! points. The parser uses a Pratt parser approach with NUD/LED
//! handlers for expression parsing and specialized functions for
//! statement parsing.
//!
//! One parser owns one session: it pulls tokens from the lexer into
//! the token arena, grows the node arena and type table, and keeps the
//! scope stack. The last arena token is the one-token lookahead. The
//! first error is recorded in a session slot and every later entry
//! call returns it again without consuming input.

use std::collections::HashMap;

use crate::{
    ast::ast::{Ast, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    types::table::TypeTable,
    NodeRef, TokenRef, TypeRef,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    symbols::{SymbolEntry, SymbolTable},
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer, the token and node arenas, the type
/// table, and the scope stack for one source unit, and maintains the
/// lookup tables driving Pratt dispatch.
pub struct Parser<'src> {
    /// The lexer tokens are pulled from
    lexer: Lexer<'src>,
    /// Token arena; the last entry is the lookahead token
    tokens: Vec<Token<'src>>,
    /// Node arena for the tree built so far
    ast: Ast,
    /// Type table, seeded with the bootstrap types
    types: TypeTable,
    /// Scope stack; index 0 is the root scope with the builtins
    scopes: Vec<SymbolTable>,
    /// First error of the session, if any
    error: Option<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser over a source string.
    ///
    /// Registers the token lookups, seeds the root scope with the
    /// builtin names, and pulls the first token.
    ///
    /// # Arguments
    ///
    /// * `source` - The source text to parse
    pub fn new(source: &'src str) -> Parser<'src> {
        let mut root = SymbolTable::new();
        root.add_builtins();

        let mut parser = Parser {
            lexer: Lexer::new(source),
            tokens: vec![],
            ast: Ast::new(),
            types: TypeTable::new(),
            scopes: vec![root],
            error: None,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);
        parser.pull();
        parser
    }

    /// Pulls the next non-comment token into the arena.
    fn pull(&mut self) {
        loop {
            let token = self.lexer.next_token();
            if token.kind.is_comment() {
                continue;
            }

            self.tokens.push(token);
            break;
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Token<'src> {
        self.tokens[self.tokens.len() - 1]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the arena reference of the current token.
    pub fn current_token_ref(&self) -> TokenRef {
        TokenRef(self.tokens.len() as u32 - 1)
    }

    /// Returns the source line of the current token.
    pub fn current_line(&self) -> u32 {
        self.current_token().line
    }

    /// Advances to the next token and returns the reference of the
    /// previous one. At end of input the EOF token stays current.
    pub fn advance(&mut self) -> TokenRef {
        let previous = self.current_token_ref();
        if self.current_token_kind() != TokenKind::EOF {
            self.pull();
        }

        previous
    }

    /// Converts a lexical error token into its `Error` the moment a
    /// parse function observes one.
    pub fn check_error_token(&self) -> Result<(), Error> {
        let token = self.current_token();
        let error = match token.kind {
            TokenKind::ErrorCharacter => ErrorImpl::UnrecognisedCharacter {
                found: String::from(token.value),
            },
            TokenKind::ErrorFloatExponent => ErrorImpl::FloatMissingExponent {
                token: String::from(token.value),
            },
            TokenKind::ErrorString => ErrorImpl::UnterminatedString,
            TokenKind::ErrorComment => ErrorImpl::UnterminatedComment,
            _ => return Ok(()),
        };

        Err(Error::new(error, token.line))
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// The reference of the consumed token if it matches, otherwise an
    /// Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<TokenRef, Error> {
        self.check_error_token()?;

        let token = self.current_token();
        if token.kind != expected_kind {
            return match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind.to_string(),
                        found: String::from(token.value),
                    },
                    token.line,
                )),
            };
        }

        Ok(self.advance())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<TokenRef, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the token behind an arena reference.
    pub fn token(&self, token_ref: TokenRef) -> Token<'src> {
        self.tokens[token_ref.index()]
    }

    /// Returns the node behind an arena reference.
    pub fn node(&self, node_ref: NodeRef) -> &Node {
        self.ast.get(node_ref)
    }

    /// Appends a node to the arena.
    pub fn add_node(&mut self, node: Node) -> NodeRef {
        self.ast.add(node)
    }

    /// Returns a reference to the node arena.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Returns a reference to the type table.
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Returns a mutable reference to the type table, for interning
    /// new types.
    pub fn types_mut(&mut self) -> &mut TypeTable {
        &mut self.types
    }

    /// Resolved type of an expression node. Statement nodes never reach
    /// expression position.
    pub fn expr_type(&self, node_ref: NodeRef) -> TypeRef {
        match self.node(node_ref).type_of(self) {
            Some(type_) => type_,
            None => unreachable!("statement node in expression position"),
        }
    }

    /// Returns the scope at the given stack index, if it is still
    /// alive.
    pub fn scope_at(&self, scope: usize) -> Option<&SymbolTable> {
        self.scopes.get(scope)
    }

    /// Returns the number of live scopes.
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(SymbolTable::new());
    }

    /// Discards the innermost scope and every binding it holds. The
    /// root scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Returns the innermost scope for inserting bindings.
    pub fn current_scope_mut(&mut self) -> &mut SymbolTable {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Resolves a name by walking the scope stack innermost-first.
    /// Returns the index of the scope it was found in along with the
    /// entry.
    pub fn resolve(&self, name: &str) -> Option<(usize, &SymbolEntry)> {
        for scope in (0..self.scopes.len()).rev() {
            if let Some(entry) = self.scopes[scope].get(name) {
                return Some((scope, entry));
            }
        }

        None
    }

    /// Pre-registers an external name in the current scope, for hosts
    /// that provide functions or values to the parsed unit.
    ///
    /// # Returns
    ///
    /// False if the name is already bound in the current scope.
    pub fn declare(&mut self, name: &str, type_: TypeRef) -> bool {
        self.current_scope_mut().add(
            name,
            SymbolEntry {
                node: None,
                type_,
                payload: None,
            },
        )
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Tokens that also act as infix operators keep the binding power
    /// their `led` registration set.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns the first error of the session, if one was recorded.
    pub fn get_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Parses one statement. The first error is recorded in the session
    /// slot; once set, every later call returns it again without
    /// consuming input.
    pub fn parse_statement(&mut self) -> Result<NodeRef, Error> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        match parse_stmt(self) {
            Ok(node_ref) => Ok(node_ref),
            Err(error) => {
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Parses statements until end of input.
    ///
    /// # Returns
    ///
    /// The top-level statements in source order, or the first error.
    pub fn parse_program(&mut self) -> Result<Vec<NodeRef>, Error> {
        let mut body = vec![];

        while self.has_tokens() {
            body.push(self.parse_statement()?);
        }

        Ok(body)
    }
}

/// Parses a source string into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser
/// session over the source and parses all statements until EOF.
///
/// # Arguments
///
/// * `source` - The source text to parse
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with arenas, type table, and scopes after parsing)
/// - Result containing either the top-level statements or an Error
pub fn parse(source: &str) -> (Parser<'_>, Result<Vec<NodeRef>, Error>) {
    let mut parser = Parser::new(source);
    let result = parser.parse_program();

    (parser, result)
}
