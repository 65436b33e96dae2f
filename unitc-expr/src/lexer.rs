//! Lexer for value expressions

use crate::{EvalError, Token};

/// Split an input string into tokens. Any character outside the
/// allowed set is an error, never silently skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let end = scan_number(input, pos);
            let text = &input[pos..end];
            let value: f64 = text
                .parse()
                .map_err(|_| EvalError::BadNumber(text.to_string()))?;
            tokens.push(Token::Number(value));
            while matches!(chars.peek(), Some(&(i, _)) if i < end) {
                chars.next();
            }
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let mut end = pos;
            while let Some(&(i, d)) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    end = i + d.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Ident(input[pos..end].to_string()));
            continue;
        }

        chars.next();
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => {
                if matches!(chars.peek(), Some(&(_, '/'))) {
                    chars.next();
                    Token::DoubleSlash
                } else {
                    Token::Slash
                }
            }
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            other => return Err(EvalError::UnexpectedChar(other)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Find the byte offset just past a number literal starting at `start`.
/// Accepts digits, one decimal point, and an optional exponent part.
fn scan_number(input: &str, start: usize) -> usize {
    let bytes = input.as_bytes();
    let mut i = start;
    let mut saw_dot = false;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_digit() {
            i += 1;
        } else if b == b'.' && !saw_dot {
            saw_dot = true;
            i += 1;
        } else {
            break;
        }
    }

    // Optional exponent: e or E, optional sign, at least one digit
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    i
}
