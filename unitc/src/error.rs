//! Conversion errors

use thiserror::Error;
use unitc_expr::EvalError;
use unitc_units::UnitError;

/// Error raised while turning a free-text expression into a conversion
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConvertError {
    #[error("could not parse expression '{0}' (try like: 3 ft to cm | 5 kg in lb)")]
    Parse(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Unit(#[from] UnitError),
}
