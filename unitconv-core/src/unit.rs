//! Units and the categories they belong to
//!
//! Every unit belongs to exactly one category. Conversions are only ever
//! defined between units of the same category.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Measurement category (the category selector)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Temperature,
    Weight,
}

impl Category {
    /// All categories, in selector order
    pub const ALL: [Category; 3] = [Category::Length, Category::Temperature, Category::Weight];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
        }
    }

    /// Units of this category in display order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => &LENGTH_UNITS,
            Category::Temperature => &TEMPERATURE_UNITS,
            Category::Weight => &WEIGHT_UNITS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnitError::UnknownCategory(s.to_string()))
    }
}

/// A measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Length
    Meter,
    Kilometer,
    Miles,
    Centimeter,
    Inches,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Weight
    Kg,
    Lb,
    Gram,
    Ounce,
}

const LENGTH_UNITS: [Unit; 5] = [Unit::Meter, Unit::Kilometer, Unit::Miles, Unit::Centimeter, Unit::Inches];
const TEMPERATURE_UNITS: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];
const WEIGHT_UNITS: [Unit; 4] = [Unit::Kg, Unit::Lb, Unit::Gram, Unit::Ounce];

/// Short symbols and spelled-out forms accepted besides the display name
const ALIASES: [(&str, Unit); 24] = [
    ("m", Unit::Meter),
    ("meters", Unit::Meter),
    ("metre", Unit::Meter),
    ("km", Unit::Kilometer),
    ("kilometers", Unit::Kilometer),
    ("kilometre", Unit::Kilometer),
    ("mi", Unit::Miles),
    ("mile", Unit::Miles),
    ("cm", Unit::Centimeter),
    ("centimeters", Unit::Centimeter),
    ("in", Unit::Inches),
    ("inch", Unit::Inches),
    ("c", Unit::Celsius),
    ("f", Unit::Fahrenheit),
    ("k", Unit::Kelvin),
    ("kilogram", Unit::Kg),
    ("kilograms", Unit::Kg),
    ("lbs", Unit::Lb),
    ("pound", Unit::Lb),
    ("pounds", Unit::Lb),
    ("g", Unit::Gram),
    ("grams", Unit::Gram),
    ("oz", Unit::Ounce),
    ("ounces", Unit::Ounce),
];

impl Unit {
    /// Every unit, grouped by category
    pub const ALL: [Unit; 12] = [
        Unit::Meter, Unit::Kilometer, Unit::Miles, Unit::Centimeter, Unit::Inches,
        Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin,
        Unit::Kg, Unit::Lb, Unit::Gram, Unit::Ounce,
    ];

    /// Display name, e.g. "Kilometer" or "Lb"
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Meter => "Meter",
            Unit::Kilometer => "Kilometer",
            Unit::Miles => "Miles",
            Unit::Centimeter => "Centimeter",
            Unit::Inches => "Inches",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Kg => "Kg",
            Unit::Lb => "Lb",
            Unit::Gram => "Gram",
            Unit::Ounce => "Ounce",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Unit::Meter | Unit::Kilometer | Unit::Miles | Unit::Centimeter | Unit::Inches => Category::Length,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Kg | Unit::Lb | Unit::Gram | Unit::Ounce => Category::Weight,
        }
    }

    /// Check if two units share a category
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category() == other.category()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Parse a display name (any case) or one of the aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Try display names first
        if let Some(unit) = Unit::ALL.into_iter().find(|u| u.name().eq_ignore_ascii_case(s)) {
            return Ok(unit);
        }

        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|(_, unit)| *unit)
            .ok_or_else(|| UnitError::Unknown(s.to_string()))
    }
}

/// Errors from naming units and categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown unit: {0}")]
    Unknown(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_disjoint() {
        for unit in Unit::ALL {
            let owners: Vec<Category> = Category::ALL
                .into_iter()
                .filter(|c| c.units().contains(&unit))
                .collect();
            assert_eq!(owners, vec![unit.category()], "{} must belong to one category", unit);
        }
    }

    #[test]
    fn test_units_in_display_order() {
        let names: Vec<&str> = Category::Length.units().iter().map(|u| u.name()).collect();
        assert_eq!(names, ["Meter", "Kilometer", "Miles", "Centimeter", "Inches"]);

        let names: Vec<&str> = Category::Weight.units().iter().map(|u| u.name()).collect();
        assert_eq!(names, ["Kg", "Lb", "Gram", "Ounce"]);
    }

    #[test]
    fn test_parse_display_name() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>(), Ok(unit));
        }
        assert_eq!("kilometer".parse::<Unit>(), Ok(Unit::Kilometer));
        assert_eq!("  Lb ".parse::<Unit>(), Ok(Unit::Lb));
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!("km".parse::<Unit>(), Ok(Unit::Kilometer));
        assert_eq!("F".parse::<Unit>(), Ok(Unit::Fahrenheit));
        assert_eq!("oz".parse::<Unit>(), Ok(Unit::Ounce));
        assert_eq!("pounds".parse::<Unit>(), Ok(Unit::Lb));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("furlong".parse::<Unit>(), Err(UnitError::Unknown("furlong".to_string())));
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("temperature".parse::<Category>(), Ok(Category::Temperature));
        assert_eq!("Weight".parse::<Category>(), Ok(Category::Weight));
        assert!(matches!("Volume".parse::<Category>(), Err(UnitError::UnknownCategory(_))));
    }

    #[test]
    fn test_compatible() {
        assert!(Unit::Meter.is_compatible(&Unit::Inches));
        assert!(!Unit::Meter.is_compatible(&Unit::Kg));
        assert!(!Unit::Celsius.is_compatible(&Unit::Gram));
    }
}
