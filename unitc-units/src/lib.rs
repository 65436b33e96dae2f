//! Unit registry and conversion tables
//!
//! Every unit belongs to exactly one category (length, mass, time, ...)
//! and converts through that category's base unit (meter, kilogram,
//! second, ...). The registry is built once by [`default_registry`] and
//! read-only afterwards; callers hold it and pass it around explicitly.
//!
//! Categories:
//! - length (m, km, ft, mi, ...)
//! - mass (kg, g, lb, oz, ...)
//! - time (s, min, h, day, ...)
//! - speed (m/s, km/h, mph, kn, ...)
//! - pressure (Pa, bar, atm, psi, ...)
//! - energy (J, Wh, cal, eV, ...)
//! - power (W, kW, hp, ...)
//! - frequency (Hz, kHz, rpm, ...)
//! - area (m^2, acre, hectare, ...)
//! - volume (m^3, L, gal, fl oz, ...)
//! - data (B, KB, bit, ...)
//! - angle (rad, deg, turn, ...)
//! - temperature (K, C, F, R)

mod registry;
mod tables;
mod unit;

pub use registry::{Category, Registry, UnitError};
pub use tables::default_registry;
pub use unit::{Transform, Unit};
