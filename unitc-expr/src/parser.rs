//! Recursive-descent parser for value expressions
//!
//! Grammar, loosest to tightest binding:
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/" | "//" | "%") unary)*
//! unary   := ("+" | "-") unary | power
//! power   := primary ("^" unary)?          (right-associative)
//! primary := NUMBER | CONSTANT | FUNC "(" expr ("," expr)* ")" | "(" expr ")"
//! ```
//!
//! `^` binds tighter than unary sign, so `-2^2` is `-(2^2)`.

use crate::ast::{BinOp, Constant, Expr, Function, UnaryOp};
use crate::{EvalError, Token};

/// Parse a full token stream into an expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;
    if parser.pos < tokens.len() {
        return Err(EvalError::TrailingInput);
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), EvalError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.next();
            let right = self.term()?;
            left = Expr::Binary(Box::new(left), op, Box::new(right));
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                Some(Token::DoubleSlash) => BinOp::FloorDiv,
                Some(Token::Percent) => BinOp::Rem,
                _ => break,
            };
            self.next();
            let right = self.unary()?;
            left = Expr::Binary(Box::new(left), op, Box::new(right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.next();
                Ok(Expr::Unary(UnaryOp::Plus, Box::new(self.unary()?)))
            }
            Some(Token::Minus) => {
                self.next();
                Ok(Expr::Unary(UnaryOp::Neg, Box::new(self.unary()?)))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.primary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.next();
            // Right-associative; exponent may carry its own sign
            let exponent = self.unary()?;
            return Ok(Expr::Binary(Box::new(base), BinOp::Pow, Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(Expr::Number(*value)),
            Some(Token::Ident(name)) => {
                if matches!(self.peek(), Some(Token::LParen)) {
                    let function = Function::from_name(name)
                        .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                    self.next();
                    let args = self.call_args()?;
                    if !function.accepts_arity(args.len()) {
                        return Err(EvalError::ArgCount(function.name()));
                    }
                    return Ok(Expr::Call(function, args));
                }
                let constant = Constant::from_name(name)
                    .ok_or_else(|| EvalError::UnknownIdentifier(name.clone()))?;
                Ok(Expr::Constant(constant))
            }
            Some(Token::LParen) => {
                let inner = self.expr()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn call_args(&mut self) -> Result<Vec<Expr>, EvalError> {
        let mut args = vec![self.expr()?];
        loop {
            match self.next() {
                Some(Token::RParen) => return Ok(args),
                Some(Token::Comma) => args.push(self.expr()?),
                Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
                None => return Err(EvalError::UnexpectedEnd),
            }
        }
    }
}
