use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    types::table::{TYPEREF_BOOL, TYPEREF_TYPE},
    NodeRef,
};

use super::{
    expr::{parse_expr, parse_ident_name},
    lookups::BindingPower,
    parser::Parser,
    symbols::SymbolEntry,
    types::eval_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<NodeRef, Error> {
    parser.check_error_token()?;

    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(expr)
}

/// Parses a `let`, `const`, or `static` declaration.
///
/// The annotation sits bare between the name and `=`, so it is parsed
/// with the restricted binding power that stops in front of an
/// assignment. The binding is registered only after the whole statement
/// has parsed; an initializer can therefore never refer to the name it
/// declares.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<NodeRef, Error> {
    let token = parser.advance();
    let is_constant = parser.token(token).kind == TokenKind::Const;

    let (name_token, name) = parse_ident_name(parser)?;
    let name_line = parser.token(name_token).line;

    let annotation = if parser.current_token_kind() != TokenKind::Assignment
        && parser.current_token_kind() != TokenKind::Semicolon
    {
        let annotation = parse_expr(parser, BindingPower::Assignment)?;

        let annotation_type = parser.expr_type(annotation);
        if !parser.types().is_eq(annotation_type, TYPEREF_TYPE) {
            return Err(Error::new(
                ErrorImpl::NotAType,
                parser.token(parser.node(annotation).token()).line,
            ));
        }

        Some(annotation)
    } else {
        None
    };

    let value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    if annotation.is_none() && value.is_none() {
        return Err(Error::new(
            ErrorImpl::MissingTypeOrValue { variable: name },
            name_line,
        ));
    }

    parser.expect(TokenKind::Semicolon)?;

    if is_constant && value.is_none() {
        return Err(Error::new(
            ErrorImpl::MissingConstValue { variable: name },
            name_line,
        ));
    }

    // The annotation wins as the binding's type; the value has to
    // coerce into it.
    let annotated = match annotation {
        Some(annotation) => Some(eval_type(parser, annotation)?),
        None => None,
    };

    let type_ = match (annotated, value) {
        (Some(annotated), Some(value)) => {
            let value_type = parser.expr_type(value);
            if !parser.types().can_coerce(value_type, annotated) {
                return Err(Error::new(
                    ErrorImpl::TypeMatchError {
                        expected: parser.types().display(annotated),
                        received: parser.types().display(value_type),
                    },
                    parser.token(parser.node(value).token()).line,
                ));
            }
            annotated
        }
        (Some(annotated), None) => annotated,
        (None, Some(value)) => parser.expr_type(value),
        (None, None) => unreachable!(),
    };

    // A `type`-typed binding is a type alias: it carries the denoted
    // type as payload so later annotations can use the name.
    let payload = match value {
        Some(value) if parser.types().is_eq(type_, TYPEREF_TYPE) => {
            Some(eval_type(parser, value)?)
        }
        _ => None,
    };

    let node = parser.add_node(Node::Let {
        token,
        name: name.clone(),
        annotation,
        value,
    });

    let entry = SymbolEntry {
        node: Some(node),
        type_,
        payload,
    };

    if !parser.current_scope_mut().add(&name, entry) {
        return Err(Error::new(
            ErrorImpl::VariableAlreadyDeclared { variable: name },
            name_line,
        ));
    }

    Ok(node)
}

/// Parses a braced block. The block owns a scope; its bindings drop
/// when the closing brace pops it.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<NodeRef, Error> {
    let token = parser.expect(TokenKind::OpenCurly)?;

    parser.push_scope();

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.pop_scope();

    Ok(parser.add_node(Node::Block { token, body }))
}

/// Parses an `if` statement. The condition must be exactly `bool`, and
/// both branches are braced blocks; `else if` chains by recursion.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<NodeRef, Error> {
    let token = parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;

    let condition_type = parser.expr_type(condition);
    if !parser.types().is_eq(condition_type, TYPEREF_BOOL) {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: parser.types().display(TYPEREF_BOOL),
                received: parser.types().display(condition_type),
            },
            parser.token(parser.node(condition).token()).line,
        ));
    }

    let then_block = parse_block_stmt(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            Some(parse_if_stmt(parser)?)
        } else {
            Some(parse_block_stmt(parser)?)
        }
    } else {
        None
    };

    Ok(parser.add_node(Node::If {
        token,
        condition,
        then_block,
        else_block,
    }))
}
