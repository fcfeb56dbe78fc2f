//! The conversion table
//!
//! A fixed set of formulas keyed by ordered unit pairs. The table is sparse
//! on purpose: only pairs with a formula below are convertible, and a pair
//! being present says nothing about its reverse or about chained pairs
//! (Miles -> Kilometer -> Meter does not make Miles -> Meter convertible).

use std::collections::HashMap;
use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use unitconv_core::{ConversionError, Unit};

/// Pure transform applied to the input value
pub type Formula = fn(f64) -> f64;

/// One row of a table: from, to, formula
pub type ConversionEntry = (Unit, Unit, Formula);

/// Built-in formulas. Operators evaluate left to right, so `v * 9.0 / 5.0`
/// is `(v * 9) / 5`.
static STANDARD_ENTRIES: [ConversionEntry; 18] = [
    // Length
    (Unit::Meter, Unit::Kilometer, |v| v / 1000.0),
    (Unit::Kilometer, Unit::Meter, |v| v * 1000.0),
    (Unit::Miles, Unit::Kilometer, |v| v * 1.609),
    (Unit::Kilometer, Unit::Miles, |v| v / 1.609),
    (Unit::Meter, Unit::Centimeter, |v| v * 100.0),
    (Unit::Centimeter, Unit::Meter, |v| v / 100.0),
    (Unit::Inches, Unit::Centimeter, |v| v * 2.54),
    (Unit::Centimeter, Unit::Inches, |v| v / 2.54),
    // Temperature
    (Unit::Celsius, Unit::Fahrenheit, |v| (v * 9.0 / 5.0) + 32.0),
    (Unit::Fahrenheit, Unit::Celsius, |v| (v - 32.0) * 5.0 / 9.0),
    (Unit::Celsius, Unit::Kelvin, |v| v + 273.15),
    (Unit::Kelvin, Unit::Celsius, |v| v - 273.15),
    // Weight
    (Unit::Kg, Unit::Lb, |v| v * 2.20462),
    (Unit::Lb, Unit::Kg, |v| v / 2.20462),
    (Unit::Kg, Unit::Gram, |v| v * 1000.0),
    (Unit::Gram, Unit::Kg, |v| v / 1000.0),
    (Unit::Lb, Unit::Ounce, |v| v * 16.0),
    (Unit::Ounce, Unit::Lb, |v| v / 16.0),
];

/// Global table built from the built-in formulas
static STANDARD: LazyLock<ConversionTable> = LazyLock::new(|| {
    ConversionTable::from_entries(STANDARD_ENTRIES)
        .expect("built-in conversion table is well formed")
});

/// Ordered unit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversionKey {
    pub from: Unit,
    pub to: Unit,
}

impl ConversionKey {
    pub fn new(from: Unit, to: Unit) -> Self {
        Self { from, to }
    }
}

/// Errors detected while assembling a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate entry for {from} -> {to}")]
    DuplicateEntry { from: Unit, to: Unit },

    #[error("{from} and {to} belong to different categories")]
    CrossCategory { from: Unit, to: Unit },

    #[error("entry converts {0} to itself")]
    SameUnit(Unit),
}

/// Immutable mapping from unit pairs to formulas
#[derive(Debug, Clone)]
pub struct ConversionTable {
    formulas: HashMap<ConversionKey, Formula>,
    /// Keys in the order they were added
    order: Vec<ConversionKey>,
}

impl ConversionTable {
    /// The built-in table
    pub fn standard() -> &'static ConversionTable {
        &STANDARD
    }

    /// Build a table, rejecting duplicate, cross-category and same-unit entries
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = ConversionEntry>,
    {
        let mut formulas = HashMap::new();
        let mut order = Vec::new();

        for (from, to, formula) in entries {
            if from == to {
                return Err(TableError::SameUnit(from));
            }
            if !from.is_compatible(&to) {
                return Err(TableError::CrossCategory { from, to });
            }

            let key = ConversionKey::new(from, to);
            if formulas.insert(key, formula).is_some() {
                return Err(TableError::DuplicateEntry { from, to });
            }
            order.push(key);
        }

        Ok(Self { formulas, order })
    }

    /// Convert `value` from one unit to another.
    ///
    /// Only the exact ordered pair is looked up. A missing pair is an
    /// ordinary outcome reported as `ConversionError::Unsupported`.
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
        self.formulas
            .get(&ConversionKey::new(from, to))
            .map(|formula| formula(value))
            .ok_or(ConversionError::Unsupported { from, to })
    }

    /// Check whether the exact ordered pair has a formula
    pub fn supports(&self, from: Unit, to: Unit) -> bool {
        self.formulas.contains_key(&ConversionKey::new(from, to))
    }

    /// Supported pairs, in table order
    pub fn pairs(&self) -> impl Iterator<Item = ConversionKey> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} within {}, got {}", expected, tolerance, actual
        );
    }

    fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
        ConversionTable::standard().convert(value, from, to)
    }

    #[test]
    fn test_standard_table_size() {
        let table = ConversionTable::standard();
        assert_eq!(table.len(), 18);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_celsius_fahrenheit_scenarios() {
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit), Ok(32.0));
        assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit), Ok(212.0));
        assert_eq!(convert(212.0, Unit::Fahrenheit, Unit::Celsius), Ok(100.0));
        assert_eq!(convert(32.0, Unit::Fahrenheit, Unit::Celsius), Ok(0.0));
    }

    #[test]
    fn test_length_formulas() {
        assert_eq!(convert(1.0, Unit::Kilometer, Unit::Meter), Ok(1000.0));
        assert_eq!(convert(2500.0, Unit::Meter, Unit::Kilometer), Ok(2.5));
        assert_eq!(convert(3.0, Unit::Miles, Unit::Kilometer), Ok(3.0 * 1.609));
        assert_eq!(convert(10.0, Unit::Kilometer, Unit::Miles), Ok(10.0 / 1.609));
        assert_eq!(convert(2.0, Unit::Meter, Unit::Centimeter), Ok(200.0));
        assert_eq!(convert(50.0, Unit::Centimeter, Unit::Meter), Ok(0.5));
        assert_eq!(convert(10.0, Unit::Inches, Unit::Centimeter), Ok(10.0 * 2.54));
        assert_eq!(convert(100.0, Unit::Centimeter, Unit::Inches), Ok(100.0 / 2.54));
    }

    #[test]
    fn test_temperature_formulas() {
        assert_eq!(convert(37.0, Unit::Celsius, Unit::Fahrenheit), Ok((37.0 * 9.0 / 5.0) + 32.0));
        assert_eq!(convert(98.6, Unit::Fahrenheit, Unit::Celsius), Ok((98.6 - 32.0) * 5.0 / 9.0));
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Kelvin), Ok(273.15));
        assert_eq!(convert(273.15, Unit::Kelvin, Unit::Celsius), Ok(0.0));
        assert_eq!(convert(0.0, Unit::Kelvin, Unit::Celsius), Ok(-273.15));
    }

    #[test]
    fn test_weight_formulas() {
        assert_eq!(convert(10.0, Unit::Lb, Unit::Ounce), Ok(160.0));
        assert_eq!(convert(8.0, Unit::Ounce, Unit::Lb), Ok(0.5));
        assert_eq!(convert(1.0, Unit::Kg, Unit::Lb), Ok(2.20462));
        assert_eq!(convert(5.0, Unit::Lb, Unit::Kg), Ok(5.0 / 2.20462));
        assert_eq!(convert(1.5, Unit::Kg, Unit::Gram), Ok(1500.0));
        assert_eq!(convert(250.0, Unit::Gram, Unit::Kg), Ok(0.25));
    }

    #[test]
    fn test_missing_direct_entry_is_unsupported() {
        assert_eq!(
            convert(5.0, Unit::Meter, Unit::Miles),
            Err(ConversionError::Unsupported { from: Unit::Meter, to: Unit::Miles })
        );
        assert!(convert(1.0, Unit::Inches, Unit::Kilometer).is_err());
        assert!(convert(1.0, Unit::Gram, Unit::Ounce).is_err());
        assert!(convert(1.0, Unit::Fahrenheit, Unit::Kelvin).is_err());
    }

    #[test]
    fn test_same_unit_is_unsupported() {
        for unit in Unit::ALL {
            assert_eq!(
                convert(1.0, unit, unit),
                Err(ConversionError::Unsupported { from: unit, to: unit })
            );
        }
    }

    #[test]
    fn test_cross_category_is_unsupported() {
        let table = ConversionTable::standard();
        for from in Unit::ALL {
            for to in Unit::ALL {
                if !from.is_compatible(&to) {
                    assert!(!table.supports(from, to), "{} -> {} should be unsupported", from, to);
                }
            }
        }
    }

    #[test]
    fn test_exactly_the_listed_pairs_are_supported() {
        let table = ConversionTable::standard();
        let listed: Vec<ConversionKey> = STANDARD_ENTRIES
            .iter()
            .map(|(from, to, _)| ConversionKey::new(*from, *to))
            .collect();

        let mut supported = 0;
        for from in Unit::ALL {
            for to in Unit::ALL {
                let expected = listed.contains(&ConversionKey::new(from, to));
                assert_eq!(table.supports(from, to), expected, "{} -> {}", from, to);
                if expected {
                    supported += 1;
                }
            }
        }
        assert_eq!(supported, 18);
    }

    #[test]
    fn test_round_trip_near_inverse() {
        let table = ConversionTable::standard();
        for key in table.pairs() {
            if !table.supports(key.to, key.from) {
                continue;
            }
            for value in [0.0, 1.0, 37.5, 1234.5678] {
                let there = table.convert(value, key.from, key.to).unwrap();
                let back = table.convert(there, key.to, key.from).unwrap();
                assert_close(back, value, 1e-9 * value.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_pairs_in_table_order() {
        let pairs: Vec<ConversionKey> = ConversionTable::standard().pairs().take(2).collect();
        assert_eq!(pairs, vec![
            ConversionKey::new(Unit::Meter, Unit::Kilometer),
            ConversionKey::new(Unit::Kilometer, Unit::Meter),
        ]);
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let entries: [ConversionEntry; 2] = [
            (Unit::Meter, Unit::Kilometer, |v| v / 1000.0),
            (Unit::Meter, Unit::Kilometer, |v| v * 0.001),
        ];
        assert_eq!(
            ConversionTable::from_entries(entries).unwrap_err(),
            TableError::DuplicateEntry { from: Unit::Meter, to: Unit::Kilometer }
        );
    }

    #[test]
    fn test_from_entries_rejects_cross_category() {
        let entries: [ConversionEntry; 1] = [(Unit::Kg, Unit::Meter, |v| v)];
        assert_eq!(
            ConversionTable::from_entries(entries).unwrap_err(),
            TableError::CrossCategory { from: Unit::Kg, to: Unit::Meter }
        );
    }

    #[test]
    fn test_from_entries_rejects_same_unit() {
        let entries: [ConversionEntry; 1] = [(Unit::Lb, Unit::Lb, |v| v)];
        assert_eq!(
            ConversionTable::from_entries(entries).unwrap_err(),
            TableError::SameUnit(Unit::Lb)
        );
    }

    #[test]
    fn test_custom_table() {
        let entries: [ConversionEntry; 1] = [(Unit::Gram, Unit::Ounce, |v| v / 28.35)];
        let table = ConversionTable::from_entries(entries).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.supports(Unit::Gram, Unit::Ounce));
        assert!(!table.supports(Unit::Ounce, Unit::Gram));
    }
}
