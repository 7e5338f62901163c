use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    types::table::{Type, TypeTag, TYPE_MUT, TYPEREF_BOOL},
    NodeRef, TokenRef, TypeRef,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<NodeRef, Error> {
    // First parse NUD
    parser.check_error_token()?;

    let token_kind = parser.current_token_kind();
    let handler = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: String::from(parser.current_token().value),
                },
                parser.current_line(),
            ))
        }
    };

    let mut left = handler(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();

        let handler = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(handler) => handler,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: String::from(parser.current_token().value),
                    },
                    parser.current_line(),
                ))
            }
        };

        left = handler(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<NodeRef, Error> {
    match parser.current_token_kind() {
        TokenKind::Number | TokenKind::Float | TokenKind::String => {
            let token = parser.advance();
            Ok(parser.add_node(Node::Literal { token }))
        }
        TokenKind::Identifier => parse_ident_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from(parser.current_token().value),
            },
            parser.current_line(),
        )),
    }
}

/// Consumes an identifier, following `::` into a single qualified name.
/// Returns the first token and the full name.
pub fn parse_ident_name(parser: &mut Parser) -> Result<(TokenRef, String), Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    let mut name = String::from(parser.token(token).value);

    while parser.current_token_kind() == TokenKind::ColonColon {
        parser.advance();
        let part = parser.expect(TokenKind::Identifier)?;
        name.push_str("::");
        name.push_str(parser.token(part).value);
    }

    Ok((token, name))
}

/// Parses a name and resolves it against the scope stack. Unknown names
/// fail here, so every `Ident` node in the tree refers to a binding
/// that existed when it was parsed.
pub fn parse_ident_expr(parser: &mut Parser) -> Result<NodeRef, Error> {
    let (token, name) = parse_ident_name(parser)?;

    let scope = match parser.resolve(&name) {
        Some((scope, _)) => scope,
        None => {
            return Err(Error::new(
                ErrorImpl::VariableNotDeclared { variable: name },
                parser.token(token).line,
            ))
        }
    };

    Ok(parser.add_node(Node::Ident { token, name, scope }))
}

/// Parses a prefix operator and types the result.
///
/// Which operators apply depends on the operand's type. Numbers take
/// `+ - ~ &`, booleans `! &`, pointers `* &`, and anything else only
/// `&`. Types take the constructor prefixes `* ? [`, whose result stays
/// a type until the evaluator interns it.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<NodeRef, Error> {
    let token = parser.advance();
    let kind = parser.token(token).kind;
    let line = parser.token(token).line;

    let mut mutable = false;
    let mut length = None;

    // A length inside the brackets makes an array, `mut` a mutable
    // slice. `*` takes its `mut` directly after the star.
    if kind == TokenKind::OpenBracket {
        if parser.current_token_kind() == TokenKind::Number {
            length = Some(parser.advance());
        } else if parser.current_token_kind() == TokenKind::Mut {
            parser.advance();
            mutable = true;
        }
        parser.expect(TokenKind::CloseBracket)?;
    } else if kind == TokenKind::Star && parser.current_token_kind() == TokenKind::Mut {
        parser.advance();
        mutable = true;
    }

    let operand = parse_expr(parser, BindingPower::Unary)?;
    let operand_type = parser.expr_type(operand);
    let operand_tag = parser.types().get(operand_type).type_.tag;

    let allowed = match operand_tag {
        TypeTag::Uint | TypeTag::Int | TypeTag::Float => matches!(
            kind,
            TokenKind::Plus | TokenKind::Dash | TokenKind::Tilde | TokenKind::Ampersand
        ),
        TypeTag::Bool => matches!(kind, TokenKind::Not | TokenKind::Ampersand),
        TypeTag::Type => matches!(
            kind,
            TokenKind::Question | TokenKind::OpenBracket | TokenKind::Star
        ),
        TypeTag::Ptr => matches!(kind, TokenKind::Star | TokenKind::Ampersand),
        _ => kind == TokenKind::Ampersand,
    };

    if !allowed {
        return Err(Error::new(
            ErrorImpl::InvalidUnaryOperator {
                operator: String::from(parser.token(token).value),
                type_: parser.types().display(operand_type),
            },
            line,
        ));
    }

    let ty = match kind {
        // Deref lands on the pointee; on a type operand `*` builds
        // another type instead, covered by the fallthrough.
        TokenKind::Star if operand_tag == TypeTag::Ptr => {
            parser.types().get(operand_type).type_.child
        }
        TokenKind::Ampersand => parser.types_mut().add(
            "",
            Type {
                tag: TypeTag::Ptr,
                data: TYPE_MUT,
                child: operand_type,
            },
        ),
        _ => operand_type,
    };

    Ok(parser.add_node(Node::Unary {
        token,
        operand,
        ty,
        mutable,
        length,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: NodeRef,
    bp: BindingPower,
) -> Result<NodeRef, Error> {
    let token = parser.advance();
    let line = parser.token(token).line;

    let right = parse_expr(parser, bp)?;

    let lhs_type = parser.expr_type(left);
    let rhs_type = parser.expr_type(right);

    let ty = match parser.token(token).kind {
        TokenKind::And | TokenKind::Or => {
            let lhs_tag = parser.types().get(lhs_type).type_.tag;
            let rhs_tag = parser.types().get(rhs_type).type_.tag;

            if lhs_tag != TypeTag::Bool || rhs_tag != TypeTag::Bool {
                return Err(Error::new(
                    ErrorImpl::BooleanOperator {
                        operator: String::from(parser.token(token).value),
                    },
                    line,
                ));
            }

            TYPEREF_BOOL
        }
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => {
            check_operands(parser, token, lhs_type, rhs_type)?;
            TYPEREF_BOOL
        }
        _ => {
            check_operands(parser, token, lhs_type, rhs_type)?;
            lhs_type
        }
    };

    Ok(parser.add_node(Node::Binary {
        token,
        lhs: left,
        rhs: right,
        ty,
    }))
}

/// The right operand must coerce into the left one; the left side
/// anchors the operator's type.
fn check_operands(
    parser: &Parser,
    token: TokenRef,
    lhs_type: TypeRef,
    rhs_type: TypeRef,
) -> Result<(), Error> {
    if parser.types().can_coerce(rhs_type, lhs_type) {
        return Ok(());
    }

    Err(Error::new(
        ErrorImpl::OperandTypeMatchError {
            operator: String::from(parser.token(token).value),
            expected: parser.types().display(lhs_type),
            received: parser.types().display(rhs_type),
        },
        parser.token(token).line,
    ))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: NodeRef,
    _bp: BindingPower,
) -> Result<NodeRef, Error> {
    let token = parser.advance();
    let line = parser.token(token).line;

    // Right associative: `a = b = c` assigns into b first.
    let right = parse_expr(parser, BindingPower::Default)?;

    let lhs_type = parser.expr_type(left);
    let rhs_type = parser.expr_type(right);

    if !parser.types().can_coerce(rhs_type, lhs_type) {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: parser.types().display(lhs_type),
                received: parser.types().display(rhs_type),
            },
            line,
        ));
    }

    Ok(parser.add_node(Node::Binary {
        token,
        lhs: left,
        rhs: right,
        ty: lhs_type,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<NodeRef, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses a call and checks it against the callee's signature while the
/// arguments come in. A spare argument fails on arity before its type
/// is ever looked at; variadic tails go unchecked.
pub fn parse_call_expr(
    parser: &mut Parser,
    left: NodeRef,
    _bp: BindingPower,
) -> Result<NodeRef, Error> {
    let token = parser.advance();
    let line = parser.token(token).line;

    let callee_type = parser.expr_type(left);
    let sig = match parser.types().signature(callee_type).cloned() {
        Some(sig) => sig,
        None => return Err(Error::new(ErrorImpl::NotAFunction, line)),
    };

    let mut args = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            continue;
        }

        // Arguments stop before `=`, like annotations.
        let arg = parse_expr(parser, BindingPower::Assignment)?;
        let arg_line = parser.token(parser.node(arg).token()).line;

        if args.len() >= sig.arg_types.len() {
            if !sig.variadic {
                return Err(Error::new(
                    ErrorImpl::TooManyArguments {
                        expected: sig.arg_types.len(),
                    },
                    arg_line,
                ));
            }
        } else {
            let arg_type = parser.expr_type(arg);
            let param_type = sig.arg_types[args.len()];

            if !parser.types().can_coerce(arg_type, param_type) {
                return Err(Error::new(
                    ErrorImpl::ArgumentTypeMatchError {
                        expected: parser.types().display(param_type),
                        received: parser.types().display(arg_type),
                    },
                    arg_line,
                ));
            }
        }

        args.push(arg);
    }

    parser.expect(TokenKind::CloseParen)?;

    if args.len() < sig.arg_types.len() {
        return Err(Error::new(
            ErrorImpl::MissingArguments {
                expected: sig.arg_types.len(),
                received: args.len(),
            },
            line,
        ));
    }

    Ok(parser.add_node(Node::Call {
        token,
        callee: left,
        args,
    }))
}
