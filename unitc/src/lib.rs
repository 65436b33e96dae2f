//! Free-text unit conversion
//!
//! Takes expressions like `3 ft to cm`, `5 kg in lb` or
//! `convert sqrt(2) m to ft`, evaluates the arithmetic on the value
//! side with the restricted evaluator from `unitc-expr`, resolves the
//! units against the registry from `unitc-units` and renders the
//! result. Also provides line-oriented batch conversion.

mod batch;
mod convert;
mod error;
mod render;
mod split;

pub use batch::convert_lines;
pub use convert::{parse_and_convert, Conversion};
pub use error::ConvertError;
pub use render::format_general;
pub use split::{split_expression, SplitExpression};

pub use unitc_units::{default_registry, Registry};
