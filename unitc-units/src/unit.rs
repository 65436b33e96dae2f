//! Unit representation with conversion transforms

use std::collections::BTreeSet;
use std::fmt;

/// How a unit maps to and from its category's base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Proportional-with-offset relation: `base = (value - offset) * factor`
    Linear { factor: f64, offset: f64 },
    /// Explicit transform pair for non-linear relations (temperature)
    Custom {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

/// A unit of measurement within a single category
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Canonical display name (e.g. "km", "fl oz")
    pub name: String,
    /// Transform to and from the category base unit
    pub transform: Transform,
    /// Every key this unit answers to, canonical name included
    pub aliases: BTreeSet<String>,
}

impl Unit {
    /// Create a linear unit with no offset
    pub fn linear(name: &str, factor: f64, aliases: &[&str]) -> Self {
        Self::linear_offset(name, factor, 0.0, aliases)
    }

    /// Create a linear unit with an offset
    pub fn linear_offset(name: &str, factor: f64, offset: f64, aliases: &[&str]) -> Self {
        Unit {
            name: name.to_string(),
            transform: Transform::Linear { factor, offset },
            aliases: collect_aliases(name, aliases),
        }
    }

    /// Create a unit with explicit transforms
    pub fn custom(
        name: &str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
        aliases: &[&str],
    ) -> Self {
        Unit {
            name: name.to_string(),
            transform: Transform::Custom { to_base, from_base },
            aliases: collect_aliases(name, aliases),
        }
    }

    /// Check if this is the degenerate base unit of its category
    pub fn is_base(&self) -> bool {
        matches!(self.transform, Transform::Linear { factor, offset } if factor == 1.0 && offset == 0.0)
    }

    /// Convert a value in this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.transform {
            Transform::Linear { factor, offset } => (value - offset) * factor,
            Transform::Custom { to_base, .. } => to_base(value),
        }
    }

    /// Convert a value in the category base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self.transform {
            Transform::Linear { factor, offset } => value / factor + offset,
            Transform::Custom { from_base, .. } => from_base(value),
        }
    }
}

fn collect_aliases(name: &str, aliases: &[&str]) -> BTreeSet<String> {
    let mut set: BTreeSet<String> = aliases.iter().map(|a| a.to_string()).collect();
    set.insert(name.to_string());
    set
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
