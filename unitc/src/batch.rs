//! Line-oriented batch conversion

use tracing::debug;
use unitc_units::Registry;

use crate::convert::parse_and_convert;

/// Convert every line of `text`, one output line per input line.
///
/// Blank lines and `#` comment lines are skipped. A failing line turns
/// into an `[error]` record instead of aborting the batch, so output
/// order always matches input order.
pub fn convert_lines(registry: &Registry, text: &str, degrees: bool) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_and_convert(registry, line, degrees) {
            Ok(conversion) => out.push(conversion.to_string()),
            Err(e) => {
                debug!(line, error = %e, "batch line failed");
                out.push(format!("[error] {line}  →  {e}"));
            }
        }
    }
    out
}
