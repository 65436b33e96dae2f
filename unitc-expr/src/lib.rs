//! Restricted arithmetic evaluator
//!
//! Evaluates the value part of a conversion expression ("3", "2*3",
//! "sqrt(2)+1") without ever touching a general-purpose interpreter.
//! The grammar is a fixed allow-list: numeric literals, `+ - * / ^ % //`,
//! unary sign, parentheses, calls to `sqrt sin cos tan abs round`, and
//! the constants `pi` and `e`. Anything outside that fails closed with
//! [`EvalError`] before evaluation starts.
//!
//! Pipeline: input string -> tokens -> AST -> evaluation; see
//! [`eval_expression`] for the one-shot entry point.

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;
mod token;

pub use ast::{BinOp, Constant, Expr, Function, UnaryOp};
pub use error::EvalError;
pub use eval::eval;
pub use lexer::tokenize;
pub use parser::parse;
pub use token::Token;

/// Tokenize, parse and evaluate an expression in one step.
///
/// `degrees` switches `sin`/`cos`/`tan` to degree arguments.
pub fn eval_expression(input: &str, degrees: bool) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    let expr = parse(&tokens)?;
    eval(&expr, degrees)
}
