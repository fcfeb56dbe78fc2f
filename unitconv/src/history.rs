//! Session history of successful conversions

use serde::Serialize;
use unitconv_core::ConversionRecord;

/// Append-only log of conversions, oldest first
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<ConversionRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end. No deduplication, no size limit.
    pub fn append(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    /// Every record in insertion order
    pub fn all(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionRecord> {
        self.records.iter()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&ConversionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a ConversionRecord;
    type IntoIter = std::slice::Iter<'a, ConversionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
