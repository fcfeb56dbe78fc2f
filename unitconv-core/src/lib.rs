//! unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout unitconv:
//! - `Unit` and `Category`: the closed set of supported units
//! - `ConversionRecord`: one successful conversion
//! - `ConversionError` / `ErrorReport`: typed and structured errors

mod unit;
mod record;
mod error;

pub use unit::{Unit, Category, UnitError};
pub use record::{ConversionRecord, DEFAULT_PRECISION};
pub use error::{ConversionError, ErrorReport, INVALID_CONVERSION_MESSAGE, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Unit, Category, ConversionRecord, ConversionError, ErrorReport};
    pub use crate::error::codes;
}
