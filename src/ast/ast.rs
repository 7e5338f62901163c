use crate::{
    lexer::tokens::TokenKind,
    parser::parser::Parser,
    types::table::{TYPEREF_GENERIC_FLOAT, TYPEREF_GENERIC_INT, TYPEREF_STR},
    NodeRef, TokenRef, TypeRef,
};

/// One syntax tree node. The tree is held in an arena and nodes refer
/// to each other only through `NodeRef` indices, so it is acyclic by
/// construction and freely shareable once parsing finishes.
///
/// Every variant carries its defining token. Expression variants have a
/// type; statement variants do not. Leaf variants have no children.
#[derive(Debug, Clone)]
pub enum Node {
    /// A number, float, or string literal.
    Literal { token: TokenRef },
    /// A name, possibly `::`-qualified, plus the scope it resolved in.
    Ident {
        token: TokenRef,
        name: String,
        scope: usize,
    },
    /// A prefix operator applied to one operand. The `*` and bracket
    /// prefixes double as type constructors; their `mut` marker and
    /// array length land here for the type evaluator to pick up.
    Unary {
        token: TokenRef,
        operand: NodeRef,
        ty: TypeRef,
        mutable: bool,
        length: Option<TokenRef>,
    },
    /// An infix operator. The type is resolved at parse time.
    Binary {
        token: TokenRef,
        lhs: NodeRef,
        rhs: NodeRef,
        ty: TypeRef,
    },
    /// A call. The token is the opening parenthesis; the callee's
    /// signature determines the type.
    Call {
        token: TokenRef,
        callee: NodeRef,
        args: Vec<NodeRef>,
    },
    /// A `let`, `const`, or `static` binding. Either the annotation or
    /// the value may be missing, never both.
    Let {
        token: TokenRef,
        name: String,
        annotation: Option<NodeRef>,
        value: Option<NodeRef>,
    },
    /// A braced block opening its own scope.
    Block { token: TokenRef, body: Vec<NodeRef> },
    /// An `if` with optional `else` (possibly another `if`).
    If {
        token: TokenRef,
        condition: NodeRef,
        then_block: NodeRef,
        else_block: Option<NodeRef>,
    },
}

impl Node {
    /// The display name of the node kind, for printers.
    pub fn name(&self) -> &'static str {
        match self {
            Node::Literal { .. } => "literal",
            Node::Ident { .. } => "ident",
            Node::Unary { .. } => "unary",
            Node::Binary { .. } => "binary",
            Node::Call { .. } => "call",
            Node::Let { .. } => "let",
            Node::Block { .. } => "block",
            Node::If { .. } => "if",
        }
    }

    /// The token that defines this node.
    pub fn token(&self) -> TokenRef {
        match self {
            Node::Literal { token }
            | Node::Ident { token, .. }
            | Node::Unary { token, .. }
            | Node::Binary { token, .. }
            | Node::Call { token, .. }
            | Node::Let { token, .. }
            | Node::Block { token, .. }
            | Node::If { token, .. } => *token,
        }
    }

    /// The child nodes in source order, or None for leaves.
    pub fn children(&self) -> Option<Vec<NodeRef>> {
        match self {
            Node::Literal { .. } | Node::Ident { .. } => None,
            Node::Unary { operand, .. } => Some(vec![*operand]),
            Node::Binary { lhs, rhs, .. } => Some(vec![*lhs, *rhs]),
            Node::Call { callee, args, .. } => {
                let mut children = vec![*callee];
                children.extend(args.iter().copied());
                Some(children)
            }
            Node::Let {
                annotation, value, ..
            } => Some(annotation.iter().chain(value.iter()).copied().collect()),
            Node::Block { body, .. } => Some(body.clone()),
            Node::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                let mut children = vec![*condition, *then_block];
                children.extend(else_block.iter().copied());
                Some(children)
            }
        }
    }

    /// The static type of this node, or None for pure statements.
    ///
    /// Literals derive their type from the token kind, identifiers look
    /// their name up again in the scope they resolved in, and calls
    /// read the return type out of the callee's signature. Operators
    /// carry the type resolved when they were parsed.
    pub fn type_of(&self, parser: &Parser<'_>) -> Option<TypeRef> {
        match self {
            Node::Literal { token } => match parser.token(*token).kind {
                TokenKind::Number => Some(TYPEREF_GENERIC_INT),
                TokenKind::Float => Some(TYPEREF_GENERIC_FLOAT),
                TokenKind::String => Some(TYPEREF_STR),
                _ => None,
            },
            Node::Ident { name, scope, .. } => {
                let entry = parser.scope_at(*scope)?.get(name)?;
                Some(entry.type_)
            }
            Node::Unary { ty, .. } => Some(*ty),
            Node::Binary { ty, .. } => Some(*ty),
            Node::Call { callee, .. } => {
                let callee_type = parser.node(*callee).type_of(parser)?;
                let sig = parser.types().signature(callee_type)?;
                Some(sig.ret_type)
            }
            Node::Let { .. } | Node::Block { .. } | Node::If { .. } => None,
        }
    }
}

/// Append-only arena holding every node of one parse session.
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Ast {
        Ast { nodes: vec![] }
    }

    pub fn add(&mut self, node: Node) -> NodeRef {
        let node_ref = NodeRef(self.nodes.len() as u32);
        self.nodes.push(node);
        node_ref
    }

    pub fn get(&self, node_ref: NodeRef) -> &Node {
        &self.nodes[node_ref.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Ast {
    fn default() -> Self {
        Ast::new()
    }
}
