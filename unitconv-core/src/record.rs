//! A single successful conversion

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Unit;

/// Decimal places used when a record is shown without explicit precision
pub const DEFAULT_PRECISION: usize = 2;

/// Outcome of one successful conversion. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: f64,
    pub from: Unit,
    pub result: f64,
    pub to: Unit,
}

impl ConversionRecord {
    pub fn new(input: f64, from: Unit, result: f64, to: Unit) -> Self {
        Self { input, from, result, to }
    }

    /// Format as "5 Kilometer = 5000.00 Meter" with `precision` decimals on the result
    pub fn display(&self, precision: usize) -> String {
        format!("{} {} = {:.*} {}", self.input, self.from, precision, self.result, self.to)
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(DEFAULT_PRECISION))
    }
}
