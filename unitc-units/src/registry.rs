//! Category-scoped registry of units with case-insensitive alias lookup

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::Unit;

/// Errors raised when unit lookup fails
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UnitError {
    #[error("cannot detect a common category for '{from}' and '{to}'")]
    NoCommonCategory { from: String, to: String },
    #[error("unknown unit '{key}' in category '{category}'")]
    UnknownUnit { category: String, key: String },
}

/// Units of one physical category, all sharing an implicit base unit
#[derive(Debug, Clone, Default)]
pub struct Category {
    /// Canonical name -> unit
    units: HashMap<String, Unit>,
    /// Lowercased alias -> canonical name; later registrations overwrite
    aliases: HashMap<String, String>,
}

impl Category {
    fn insert(&mut self, unit: Unit) {
        for alias in &unit.aliases {
            self.aliases
                .insert(alias.to_lowercase(), unit.name.clone());
        }
        self.units.insert(unit.name.clone(), unit);
    }

    /// Case-insensitive alias lookup
    pub fn get(&self, key: &str) -> Option<&Unit> {
        let canonical = self.aliases.get(&key.to_lowercase())?;
        self.units.get(canonical)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.aliases.contains_key(&key.to_lowercase())
    }

    /// Sorted canonical unit names, deduplicated by name
    pub fn unit_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(|n| n.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Mapping from category name to [`Category`].
///
/// Categories iterate in alphabetical order (BTreeMap), so category
/// detection is deterministic regardless of registration order.
/// Populated once at startup and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    categories: BTreeMap<String, Category>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, category: &str, unit: Unit) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(unit);
    }

    /// Register a linear unit: `base = value * factor`
    pub fn add_linear(&mut self, category: &str, name: &str, factor: f64, aliases: &[&str]) {
        self.add(category, Unit::linear(name, factor, aliases));
    }

    /// Register a linear unit with an offset: `base = (value - offset) * factor`
    pub fn add_linear_offset(
        &mut self,
        category: &str,
        name: &str,
        factor: f64,
        offset: f64,
        aliases: &[&str],
    ) {
        self.add(category, Unit::linear_offset(name, factor, offset, aliases));
    }

    /// Register a unit with explicit to/from base transforms
    pub fn add_custom(
        &mut self,
        category: &str,
        name: &str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
        aliases: &[&str],
    ) {
        self.add(category, Unit::custom(name, to_base, from_base, aliases));
    }

    /// Case-insensitive alias lookup scoped to one category
    pub fn get(&self, category: &str, key: &str) -> Option<&Unit> {
        self.categories.get(category)?.get(key)
    }

    /// First category (alphabetically) in which both aliases resolve
    pub fn detect_category(&self, a: &str, b: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, cat)| cat.contains(a) && cat.contains(b))
            .map(|(name, _)| name.as_str())
    }

    /// Sorted category names
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.keys().map(|n| n.as_str()).collect()
    }

    /// Sorted canonical unit names for one category; empty if unknown
    pub fn list_units(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|cat| cat.unit_names())
            .unwrap_or_default()
    }
}
