//! Tree-walking evaluator for value expressions
//!
//! Integer-like operators follow flooring semantics: `//` rounds the
//! quotient toward negative infinity and `%` takes its sign from the
//! divisor, so `-7 // 2 == -4` and `-7 % 3 == 2`.

use crate::ast::{BinOp, Expr, Function, UnaryOp};
use crate::EvalError;

/// Evaluate an expression tree. With `degrees` set, trig functions
/// treat their argument as degrees instead of radians.
pub fn eval(expr: &Expr, degrees: bool) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Constant(constant) => Ok(constant.value()),
        Expr::Unary(op, inner) => {
            let value = eval(inner, degrees)?;
            Ok(match op {
                UnaryOp::Plus => value,
                UnaryOp::Neg => -value,
            })
        }
        Expr::Binary(left, op, right) => {
            let a = eval(left, degrees)?;
            let b = eval(right, degrees)?;
            binary(a, *op, b)
        }
        Expr::Call(function, args) => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval(arg, degrees)?);
            }
            call(*function, &values, degrees)
        }
    }
}

fn binary(a: f64, op: BinOp, b: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => Ok(a + b),
        BinOp::Sub => Ok(a - b),
        BinOp::Mul => Ok(a * b),
        BinOp::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        BinOp::FloorDiv => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok((a / b).floor())
        }
        BinOp::Rem => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a - b * (a / b).floor())
        }
        BinOp::Pow => {
            if a < 0.0 && b.fract() != 0.0 {
                return Err(EvalError::Domain(
                    "negative base with a fractional exponent",
                ));
            }
            Ok(a.powf(b))
        }
    }
}

fn call(function: Function, args: &[f64], degrees: bool) -> Result<f64, EvalError> {
    let x = args[0];
    match function {
        Function::Sqrt => {
            if x < 0.0 {
                return Err(EvalError::Domain("square root of a negative number"));
            }
            Ok(x.sqrt())
        }
        Function::Sin => Ok(to_angle(x, degrees).sin()),
        Function::Cos => Ok(to_angle(x, degrees).cos()),
        Function::Tan => Ok(to_angle(x, degrees).tan()),
        Function::Abs => Ok(x.abs()),
        Function::Round => {
            if args.len() == 1 {
                return Ok(x.round_ties_even());
            }
            let digits = args[1];
            if digits.fract() != 0.0 {
                return Err(EvalError::Domain("round() digits must be an integer"));
            }
            let scale = 10f64.powi(digits as i32);
            Ok((x * scale).round_ties_even() / scale)
        }
    }
}

fn to_angle(x: f64, degrees: bool) -> f64 {
    if degrees {
        x.to_radians()
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, tokenize};

    fn eval_str(input: &str) -> Result<f64, EvalError> {
        eval(&parse(&tokenize(input)?)?, false)
    }

    fn eval_deg(input: &str) -> Result<f64, EvalError> {
        eval(&parse(&tokenize(input)?)?, true)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_str("2+3*4").unwrap(), 14.0);
        assert_eq!(eval_str("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval_str("2^10").unwrap(), 1024.0);
        assert_eq!(eval_str("-2^2").unwrap(), -4.0);
        assert_eq!(eval_str("2^-2").unwrap(), 0.25);
    }

    #[test]
    fn test_floor_division_and_modulo() {
        assert_eq!(eval_str("7//2").unwrap(), 3.0);
        assert_eq!(eval_str("-7//2").unwrap(), -4.0);
        assert_eq!(eval_str("7%3").unwrap(), 1.0);
        assert_eq!(eval_str("-7%3").unwrap(), 2.0);
        assert_eq!(eval_str("7%-3").unwrap(), -2.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_str("1/0").unwrap_err(), EvalError::DivisionByZero);
        assert_eq!(eval_str("1//0").unwrap_err(), EvalError::DivisionByZero);
        assert_eq!(eval_str("1%0").unwrap_err(), EvalError::DivisionByZero);
    }

    #[test]
    fn test_round_banker() {
        assert_eq!(eval_str("round(2.5)").unwrap(), 2.0);
        assert_eq!(eval_str("round(3.5)").unwrap(), 4.0);
        assert_eq!(eval_str("round(2.345, 2)").unwrap(), 2.35);
        assert!(matches!(
            eval_str("round(2.5, 0.5)").unwrap_err(),
            EvalError::Domain(_)
        ));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(
            eval_str("sqrt(-1)").unwrap_err(),
            EvalError::Domain(_)
        ));
        assert!(matches!(
            eval_str("(-8)^0.5").unwrap_err(),
            EvalError::Domain(_)
        ));
        // Integer exponents on a negative base are fine
        assert_eq!(eval_str("(-2)^3").unwrap(), -8.0);
    }

    #[test]
    fn test_trig_modes() {
        assert!((eval_deg("sin(90)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval_str("sin(pi/2)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval_deg("cos(180)").unwrap() + 1.0).abs() < 1e-12);
    }
}
