//! Per-session state around the conversion table
//!
//! A session owns its history and the current category selection. It is
//! created empty, grows while the user converts values, and is dropped when
//! the user goes away. Nothing is shared between sessions except the
//! immutable table.

use tracing::{debug, info};
use unitconv_core::{Category, ConversionError, ConversionRecord, Unit};

use crate::history::HistoryLog;
use crate::table::ConversionTable;

/// One user's conversion session
#[derive(Debug)]
pub struct Session<'t> {
    table: &'t ConversionTable,
    history: HistoryLog,
    category: Category,
}

impl Session<'static> {
    /// Session over the built-in table
    pub fn new() -> Self {
        Session::with_table(ConversionTable::standard())
    }
}

impl Default for Session<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Session<'t> {
    pub fn with_table(table: &'t ConversionTable) -> Self {
        Self {
            table,
            history: HistoryLog::new(),
            category: Category::Length,
        }
    }

    /// Convert a value and record it on success.
    ///
    /// An unsupported pair leaves the history untouched.
    pub fn convert(&mut self, value: f64, from: Unit, to: Unit) -> Result<ConversionRecord, ConversionError> {
        match self.table.convert(value, from, to) {
            Ok(result) => {
                let record = ConversionRecord::new(value, from, result, to);
                self.history.append(record);
                debug!(%from, %to, value, result, entries = self.history.len(), "conversion recorded");
                Ok(record)
            }
            Err(e) => {
                info!(%from, %to, value, "unsupported conversion");
                Err(e)
            }
        }
    }

    pub fn table(&self) -> &'t ConversionTable {
        self.table
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn select_category(&mut self, category: Category) {
        debug!(%category, "category selected");
        self.category = category;
    }

    /// Options for the from-unit selector
    pub fn from_units(&self) -> &'static [Unit] {
        self.category.units()
    }

    /// Options for the to-unit selector: the from-unit's category minus itself
    pub fn target_units(&self, from: Unit) -> Vec<Unit> {
        from.category()
            .units()
            .iter()
            .copied()
            .filter(|u| *u != from)
            .collect()
    }
}
