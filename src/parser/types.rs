//! Evaluation of type-valued expressions.
//!
//! Types are parsed by the ordinary expression grammar; a `type`-typed
//! expression only becomes a table entry once something needs it, an
//! annotation or a type alias. This module walks such an expression and
//! interns the types it denotes.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    types::table::{Type, TypeTag, TYPE_MUT, TYPE_OPT, TYPEREF_TYPE},
    NodeRef, TypeRef,
};

use super::parser::Parser;

/// Evaluates a `type`-typed expression into a type table entry.
///
/// Identifiers yield the payload of their binding, `*` interns a
/// pointer, `?` re-interns a pointer or slice with the optional bit
/// set, and `[` interns a slice or array. Any other node cannot denote
/// a type.
pub fn eval_type(parser: &mut Parser, node_ref: NodeRef) -> Result<TypeRef, Error> {
    let line = parser.token(parser.node(node_ref).token()).line;

    let node_type = parser.expr_type(node_ref);
    if !parser.types().is_eq(node_type, TYPEREF_TYPE) {
        return Err(Error::new(ErrorImpl::NotAType, line));
    }

    match parser.node(node_ref).clone() {
        Node::Ident { name, scope, .. } => {
            let entry = match parser.scope_at(scope).and_then(|table| table.get(&name)) {
                Some(entry) => *entry,
                None => unreachable!("identifier no longer in its scope"),
            };

            match entry.payload {
                Some(payload) => Ok(payload),
                // Declared as a type but never defined, e.g. `let T type;`
                None => Err(Error::new(ErrorImpl::NotAType, line)),
            }
        }
        Node::Unary {
            token,
            operand,
            mutable,
            length,
            ..
        } => match parser.token(token).kind {
            TokenKind::Star => {
                let inner = eval_type(parser, operand)?;
                check_runtime(parser, inner, line)?;

                let data = if mutable { TYPE_MUT } else { 0 };
                Ok(parser.types_mut().add(
                    "",
                    Type {
                        tag: TypeTag::Ptr,
                        data,
                        child: inner,
                    },
                ))
            }
            TokenKind::Question => {
                let inner = eval_type(parser, operand)?;
                let inner_type = parser.types().get(inner).type_;

                if inner_type.tag != TypeTag::Ptr && inner_type.tag != TypeTag::Slice {
                    return Err(Error::new(ErrorImpl::OptionalNotPointer, line));
                }

                Ok(parser.types_mut().add(
                    "",
                    Type {
                        tag: inner_type.tag,
                        data: inner_type.data | TYPE_OPT,
                        child: inner_type.child,
                    },
                ))
            }
            TokenKind::OpenBracket => {
                let inner = eval_type(parser, operand)?;
                check_runtime(parser, inner, line)?;

                match length {
                    Some(length) => {
                        let value = parser.token(length).value;
                        let length = value.parse::<u64>().map_err(|_| {
                            Error::new(
                                ErrorImpl::NumberParseError {
                                    token: String::from(value),
                                },
                                line,
                            )
                        })?;

                        Ok(parser.types_mut().add(
                            "",
                            Type {
                                tag: TypeTag::Array,
                                data: length,
                                child: inner,
                            },
                        ))
                    }
                    None => {
                        let data = if mutable { TYPE_MUT } else { 0 };
                        Ok(parser.types_mut().add(
                            "",
                            Type {
                                tag: TypeTag::Slice,
                                data,
                                child: inner,
                            },
                        ))
                    }
                }
            }
            _ => Err(Error::new(ErrorImpl::UnknownTypeNode, line)),
        },
        _ => Err(Error::new(ErrorImpl::UnknownTypeNode, line)),
    }
}

/// Pointer, slice, and array element types must exist at runtime.
fn check_runtime(parser: &Parser, type_ref: TypeRef, line: u32) -> Result<(), Error> {
    if parser.types().is_runtime(type_ref) {
        return Ok(());
    }

    Err(Error::new(
        ErrorImpl::NotRuntimeType {
            type_: parser.types().display(type_ref),
        },
        line,
    ))
}
