//! Evaluation errors

use thiserror::Error;

/// Error raised when a value expression cannot be safely evaluated
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("disallowed character '{0}' in value expression")]
    UnexpectedChar(char),
    #[error("invalid number literal '{0}'")]
    BadNumber(String),
    #[error("value expression ended unexpectedly")]
    UnexpectedEnd,
    #[error("unexpected '{0}' in value expression")]
    UnexpectedToken(String),
    #[error("trailing input after value expression")]
    TrailingInput,
    #[error("unknown name '{0}': only pi and e are allowed")]
    UnknownIdentifier(String),
    #[error("unknown function '{0}': only sqrt/sin/cos/tan/abs/round are allowed")]
    UnknownFunction(String),
    #[error("{0}() called with the wrong number of arguments")]
    ArgCount(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("math domain error: {0}")]
    Domain(&'static str),
}
