//! unitconv - Length, Temperature and Weight Conversion
//!
//! Converts values through a fixed, sparse table of formulas and keeps the
//! history of successful conversions for the current session.
//!
//! ```
//! use unitconv::Session;
//! use unitconv_core::Unit;
//!
//! let mut session = Session::new();
//! let record = session.convert(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
//! assert_eq!(record.to_string(), "100 Celsius = 212.00 Fahrenheit");
//! assert!(session.convert(5.0, Unit::Meter, Unit::Miles).is_err());
//! assert_eq!(session.history().len(), 1);
//! ```

mod table;
mod history;
mod session;
mod render;

pub use table::{ConversionTable, ConversionKey, ConversionEntry, Formula, TableError};
pub use history::HistoryLog;
pub use session::Session;
pub use render::Renderer;

/// Convert with the built-in table
pub fn convert(value: f64, from: unitconv_core::Unit, to: unitconv_core::Unit) -> Result<f64, unitconv_core::ConversionError> {
    ConversionTable::standard().convert(value, from, to)
}
