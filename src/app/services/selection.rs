//! Session selection and filtering
//!
//! Pure functions over a record snapshot. Dates are compared as exact,
//! case-sensitive strings; no calendar parsing takes place.

use std::collections::HashSet;

use crate::app::models::DiveEntry;

/// Distinct session dates in first-occurrence order
pub fn unique_dates(records: &[DiveEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.date.as_str()))
        .map(|record| record.date.clone())
        .collect()
}

/// Records whose date equals `date` exactly, in collection order
pub fn filter_by_date<'a>(records: &'a [DiveEntry], date: &str) -> Vec<&'a DiveEntry> {
    records.iter().filter(|record| record.date == date).collect()
}

/// Date shown before the user picks one: the newest record's session
pub fn default_selected_date(records: &[DiveEntry]) -> Option<&str> {
    records.first().map(|record| record.date.as_str())
}

/// Sessions on offer plus the dives of the chosen one
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSelection<'a> {
    /// Every session date, newest first
    pub dates: Vec<String>,

    /// Chosen date, `None` only when there are no records
    pub selected_date: Option<String>,

    /// Dives of the chosen session
    pub dives: Vec<&'a DiveEntry>,
}

impl<'a> SessionSelection<'a> {
    /// Select `requested`, or the newest session when nothing was requested
    ///
    /// A requested date that no record carries is kept as the selection and
    /// yields an empty dive list.
    pub fn select(records: &'a [DiveEntry], requested: Option<&str>) -> Self {
        let selected_date = requested
            .or_else(|| default_selected_date(records))
            .map(str::to_string);
        let dives = selected_date
            .as_deref()
            .map(|date| filter_by_date(records, date))
            .unwrap_or_default();

        Self {
            dates: unique_dates(records),
            selected_date,
            dives,
        }
    }

    /// True when the chosen session has nothing to show
    pub fn is_empty(&self) -> bool {
        self.dives.is_empty()
    }
}
