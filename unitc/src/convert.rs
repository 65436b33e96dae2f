//! Turning a split expression into a conversion result

use serde::{Deserialize, Serialize};
use tracing::debug;
use unitc_expr::eval_expression;
use unitc_units::{Registry, UnitError};

use crate::error::ConvertError;
use crate::split::split_expression;

/// A fully resolved conversion: evaluated input value, canonical unit
/// names, the detected category and the converted result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: String,
    pub result: f64,
}

/// Parse a free-text expression and perform the conversion.
///
/// The value part is evaluated first, before the units are looked up,
/// so a bad value expression reports an evaluation error even when the
/// units are also unknown. A value the evaluator rejects gets one last
/// chance as a plain float literal before the error is surfaced.
pub fn parse_and_convert(
    registry: &Registry,
    input: &str,
    degrees: bool,
) -> Result<Conversion, ConvertError> {
    let split = split_expression(input).ok_or_else(|| ConvertError::Parse(input.to_string()))?;
    debug!(
        value = split.value,
        from = split.from_unit,
        to = split.to_unit,
        "split expression"
    );

    let value = match eval_expression(split.value, degrees) {
        Ok(value) => value,
        Err(e) => split.value.parse::<f64>().map_err(|_| e)?,
    };

    let category = registry
        .detect_category(split.from_unit, split.to_unit)
        .ok_or_else(|| UnitError::NoCommonCategory {
            from: split.from_unit.to_string(),
            to: split.to_unit.to_string(),
        })?;
    let from = registry
        .get(category, split.from_unit)
        .ok_or_else(|| UnitError::UnknownUnit {
            category: category.to_string(),
            key: split.from_unit.to_string(),
        })?;
    let to = registry
        .get(category, split.to_unit)
        .ok_or_else(|| UnitError::UnknownUnit {
            category: category.to_string(),
            key: split.to_unit.to_string(),
        })?;

    let result = to.from_base(from.to_base(value));
    debug!(category, value, result, "converted");

    Ok(Conversion {
        value,
        from_unit: from.name.clone(),
        to_unit: to.name.clone(),
        category: category.to_string(),
        result,
    })
}
