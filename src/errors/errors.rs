use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::FloatMissingExponent { .. } => "FloatMissingExponent",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingTypeOrValue { .. } => "MissingTypeOrValue",
            ErrorImpl::MissingConstValue { .. } => "MissingConstValue",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::OperandTypeMatchError { .. } => "OperandTypeMatchError",
            ErrorImpl::BooleanOperator { .. } => "BooleanOperator",
            ErrorImpl::InvalidUnaryOperator { .. } => "InvalidUnaryOperator",
            ErrorImpl::NotAType => "NotAType",
            ErrorImpl::UnknownTypeNode => "UnknownTypeNode",
            ErrorImpl::OptionalNotPointer => "OptionalNotPointer",
            ErrorImpl::NotRuntimeType { .. } => "NotRuntimeType",
            ErrorImpl::NotAFunction => "NotAFunction",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
        }
    }

    /// The piece of source text the error refers to, when it names one.
    pub fn get_offending(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { found } => Some(found),
            ErrorImpl::FloatMissingExponent { token } => Some(token),
            ErrorImpl::UnexpectedToken { token } => Some(token),
            ErrorImpl::ExpectedToken { found, .. } => Some(found),
            ErrorImpl::NumberParseError { token } => Some(token),
            ErrorImpl::MissingTypeOrValue { variable } => Some(variable),
            ErrorImpl::MissingConstValue { variable } => Some(variable),
            ErrorImpl::VariableAlreadyDeclared { variable } => Some(variable),
            ErrorImpl::VariableNotDeclared { variable } => Some(variable),
            _ => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::FloatMissingExponent { token } => ErrorTip::Suggestion(format!(
                "Float `{}` needs digits after its `e`",
                token
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Strings must be closed with `\"` before the end of the file",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comments must be closed with `*/`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected `{}`, found `{}`", expected, found))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingTypeOrValue { variable } => ErrorTip::Suggestion(format!(
                "Give `{}` a type annotation, a value, or both",
                variable
            )),
            ErrorImpl::MissingConstValue { variable } => ErrorTip::Suggestion(format!(
                "Constant `{}` must be assigned where it is declared",
                variable
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::OperandTypeMatchError {
                operator,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` expected `{}`, received `{}`",
                operator, expected, received
            )),
            ErrorImpl::BooleanOperator { operator } => ErrorTip::Suggestion(format!(
                "Operator `{}` only works on `bool` operands",
                operator
            )),
            ErrorImpl::InvalidUnaryOperator { operator, type_ } => ErrorTip::Suggestion(format!(
                "Operator `{}` is not defined for `{}`",
                operator, type_
            )),
            ErrorImpl::NotAType => ErrorTip::Suggestion(String::from(
                "A value expression was found where a type was expected",
            )),
            ErrorImpl::UnknownTypeNode => ErrorTip::None,
            ErrorImpl::OptionalNotPointer => {
                ErrorTip::Suggestion(String::from("Only pointer and slice types can be optional"))
            }
            ErrorImpl::NotRuntimeType { type_ } => {
                ErrorTip::Suggestion(format!("`{}` only exists at compile time", type_))
            }
            ErrorImpl::NotAFunction => ErrorTip::Suggestion(String::from(
                "Only values of function type can be called",
            )),
            ErrorImpl::TooManyArguments { expected } => {
                ErrorTip::Suggestion(format!("The function takes {} arguments", expected))
            }
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {found:?}")]
    UnrecognisedCharacter { found: String },
    #[error("float literal {token:?} has no exponent digits")]
    FloatMissingExponent { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected} but found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("declaration of {variable:?} has no type and no value")]
    MissingTypeOrValue { variable: String },
    #[error("constant {variable:?} declared without a value")]
    MissingConstValue { variable: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMatchError { expected: String, received: String },
    #[error("operand types do not match for {operator:?}: expected {expected:?}, received {received:?}")]
    OperandTypeMatchError {
        operator: String,
        expected: String,
        received: String,
    },
    #[error("operands to {operator:?} must be boolean")]
    BooleanOperator { operator: String },
    #[error("unary operator {operator:?} cannot be applied to {type_}")]
    InvalidUnaryOperator { operator: String, type_: String },
    #[error("expression is not a type")]
    NotAType,
    #[error("unknown node kind when evaluating type")]
    UnknownTypeNode,
    #[error("optional marker on a non pointer type")]
    OptionalNotPointer,
    #[error("type {type_} has no runtime representation")]
    NotRuntimeType { type_: String },
    #[error("lhs of function call is not a function")]
    NotAFunction,
    #[error("too many arguments: expected {expected:?}")]
    TooManyArguments { expected: usize },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("argument types do not match: expected {expected:?}, received {received:?}")]
    ArgumentTypeMatchError { expected: String, received: String },
}
