//! Splitting a free-text expression into value, source unit and target unit
//!
//! Input shape: `[convert] VALUE FROM (to|in) TO`, case-insensitive.
//! The value part may be any arithmetic expression; the source unit is
//! the shortest digit-free tail of the head, which keeps digits like
//! the `3` of `3 ft` on the value side while unit names with symbols
//! (`km/h`, `fl oz`, `°C`) stay whole.

/// The three raw pieces of a conversion expression, untrimmed of
/// interpretation: the value is not yet evaluated and the units are
/// not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitExpression<'a> {
    pub value: &'a str,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

/// Split an expression into value, source unit and target unit.
/// Returns `None` when the input does not have the expected shape.
pub fn split_expression(input: &str) -> Option<SplitExpression<'_>> {
    let trimmed = input.trim();
    if let Some(rest) = strip_convert(trimmed) {
        if let Some(split) = split_body(rest) {
            return Some(split);
        }
    }
    split_body(trimmed)
}

/// Strip a leading `convert` keyword followed by whitespace.
fn strip_convert(input: &str) -> Option<&str> {
    const KEYWORD: &str = "convert";
    if input.len() > KEYWORD.len()
        && input.is_char_boundary(KEYWORD.len())
        && input[..KEYWORD.len()].eq_ignore_ascii_case(KEYWORD)
    {
        let rest = &input[KEYWORD.len()..];
        if rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
    }
    None
}

fn split_body(input: &str) -> Option<SplitExpression<'_>> {
    for sep in separator_positions(input) {
        let head = input[..sep].trim_end();
        let to_unit = input[sep + 2..].trim();
        if to_unit.is_empty() {
            continue;
        }
        if let Some((value, from_unit)) = split_head(head) {
            return Some(SplitExpression {
                value,
                from_unit,
                to_unit,
            });
        }
    }
    None
}

/// Byte offsets of every standalone `to`/`in` word, left to right.
/// Standalone means surrounded by whitespace on both sides.
fn separator_positions(input: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    for pos in 0..input.len().saturating_sub(2) {
        // Both slice ends must sit on char boundaries; a multibyte
        // character right after a "t"/"i" is not a separator candidate
        if !input.is_char_boundary(pos) || !input.is_char_boundary(pos + 2) {
            continue;
        }
        let word = &input[pos..pos + 2];
        if !word.eq_ignore_ascii_case("to") && !word.eq_ignore_ascii_case("in") {
            continue;
        }
        let before_ws = input[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        let after_ws = input[pos + 2..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace);
        if before_ws && after_ws {
            positions.push(pos);
        }
    }
    positions
}

/// Split `VALUE FROM` at the earliest point where a digit-free unit
/// can start, leaving at least one character of value. Fails when no
/// such point exists or the value part contains a character outside
/// the arithmetic alphabet.
fn split_head(head: &str) -> Option<(&str, &str)> {
    let chars: Vec<(usize, char)> = head.char_indices().collect();
    let last_digit = chars
        .iter()
        .rev()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|&(i, _)| i);

    for &(i, c) in chars.iter().skip(1) {
        if c.is_whitespace() || c.is_ascii_digit() {
            continue;
        }
        if last_digit.is_some_and(|d| i < d) {
            continue;
        }
        let value = head[..i].trim();
        if value.is_empty() || !value.chars().all(is_value_char) {
            return None;
        }
        return Some((value, head[i..].trim_end()));
    }
    None
}

fn is_value_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '+' | '-' | '*' | '/' | '^' | '(' | ')' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> Option<(&str, &str, &str)> {
        split_expression(input).map(|s| (s.value, s.from_unit, s.to_unit))
    }

    #[test]
    fn test_basic_forms() {
        assert_eq!(split("3 ft to cm"), Some(("3", "ft", "cm")));
        assert_eq!(split("5 kg in lb"), Some(("5", "kg", "lb")));
        assert_eq!(split("  3 ft to cm  "), Some(("3", "ft", "cm")));
    }

    #[test]
    fn test_convert_keyword() {
        assert_eq!(split("convert 100 kph to mph"), Some(("100", "kph", "mph")));
        assert_eq!(split("CONVERT 3 ft to cm"), Some(("3", "ft", "cm")));
    }

    #[test]
    fn test_value_expressions() {
        assert_eq!(split("2*3 m to ft"), Some(("2*3", "m", "ft")));
        assert_eq!(split("sqrt(2)+1 km to mi"), Some(("sqrt(2)+1", "km", "mi")));
        assert_eq!(split("-40 C to F"), Some(("-40", "C", "F")));
    }

    #[test]
    fn test_units_with_symbols_and_spaces() {
        assert_eq!(split("100 km/h to mph"), Some(("100", "km/h", "mph")));
        assert_eq!(split("2 fl oz to ml"), Some(("2", "fl oz", "ml")));
        assert_eq!(split("20 °C to °F"), Some(("20", "°C", "°F")));
    }

    #[test]
    fn test_value_glued_to_unit() {
        assert_eq!(split("3ft to cm"), Some(("3", "ft", "cm")));
    }

    #[test]
    fn test_unit_named_like_separator() {
        // The first "in" cannot be a separator (no unit before it), so
        // it is taken as the source unit instead
        assert_eq!(split("5 in in cm"), Some(("5", "in", "cm")));
        assert_eq!(split("5 in to cm"), Some(("5", "in", "cm")));
    }

    #[test]
    fn test_trailing_function_call_bleeds_into_unit() {
        // The unit must be digit-free, so the closing paren after the
        // last digit starts it; the truncated value fails later at eval
        assert_eq!(split("sin(30) deg to rad"), Some(("sin(30", ") deg", "rad")));
    }

    #[test]
    fn test_multibyte_right_after_separator_letter() {
        // "n²" and "m²" put a multibyte char two bytes after an
        // i/t, which must not be probed as a separator slice
        assert_eq!(split("5 in² to cm²"), Some(("5", "in²", "cm²")));
        assert_eq!(split("1 µm to nm"), Some(("1", "µm", "nm")));
        assert_eq!(split("20 °C to °F"), Some(("20", "°C", "°F")));
    }

    #[test]
    fn test_multibyte_inside_convert_prefix() {
        // A multibyte char straddling the keyword length must not
        // split mid-character while checking for "convert"
        assert_eq!(
            split("converé 3 m to ft"),
            Some(("converé 3", "m", "ft"))
        );
        // A symbol (not a word char) in the value part still fails the split
        assert_eq!(split("conv€rt 3 m to ft"), None);
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(split("3 ft"), None);
        assert_eq!(split("3 ft into cm"), None);
        assert_eq!(split(""), None);
    }

    #[test]
    fn test_missing_pieces() {
        assert_eq!(split("to m"), None);
        assert_eq!(split("3 ft to"), None);
        assert_eq!(split("3 to m"), None);
    }

    #[test]
    fn test_invalid_value_characters() {
        assert_eq!(split("{3} ft to m"), None);
        assert_eq!(split("$3 usd to eur"), None);
    }

    #[test]
    fn test_injection_attempt_splits_lazily() {
        // The value side takes as little as possible, so the payload
        // lands in the unit names and never reaches evaluation whole
        assert_eq!(
            split("__import__('os') x to m"),
            Some(("_", "_import__('os') x", "m"))
        );
    }
}
