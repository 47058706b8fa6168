//! Positional column layout of the response sheet
//!
//! The form writes one column per question, preceded by the submission
//! timestamp. This module is the only place that knows which position holds
//! which field.

use crate::app::models::DiveEntry;
use crate::constants::UNKNOWN_SITE;

/// Record fields in sheet column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiveColumn {
    Date,
    DiveSite,
    TotalTime,
    MaxDepth,
    AvgDepth,
    WaterTemp,
    Visibility,
    Current,
    Waves,
    Guide,
    TypeOfAir,
}

impl DiveColumn {
    /// Every mapped column with its token index
    ///
    /// Index 0 holds the form timestamp and is intentionally absent.
    pub const LAYOUT: [(DiveColumn, usize); 11] = [
        (DiveColumn::Date, 1),
        (DiveColumn::DiveSite, 2),
        (DiveColumn::TotalTime, 3),
        (DiveColumn::MaxDepth, 4),
        (DiveColumn::AvgDepth, 5),
        (DiveColumn::WaterTemp, 6),
        (DiveColumn::Visibility, 7),
        (DiveColumn::Current, 8),
        (DiveColumn::Waves, 9),
        (DiveColumn::Guide, 10),
        (DiveColumn::TypeOfAir, 11),
    ];

    /// Number of tokens a complete row carries, timestamp included
    pub const ROW_WIDTH: usize = 12;

    /// Value used when the row has no token for this column
    fn fallback(self) -> &'static str {
        match self {
            DiveColumn::DiveSite => UNKNOWN_SITE,
            _ => "",
        }
    }

    /// Mutable slot for this column in a record under construction
    fn slot(self, entry: &mut DiveEntry) -> &mut String {
        match self {
            DiveColumn::Date => &mut entry.date,
            DiveColumn::DiveSite => &mut entry.dive_site,
            DiveColumn::TotalTime => &mut entry.total_time,
            DiveColumn::MaxDepth => &mut entry.max_depth,
            DiveColumn::AvgDepth => &mut entry.avg_depth,
            DiveColumn::WaterTemp => &mut entry.water_temp,
            DiveColumn::Visibility => &mut entry.visibility,
            DiveColumn::Current => &mut entry.current,
            DiveColumn::Waves => &mut entry.waves,
            DiveColumn::Guide => &mut entry.guide,
            DiveColumn::TypeOfAir => &mut entry.type_of_air,
        }
    }
}

/// Build a record from cleaned tokens
///
/// Tokens past the layout are ignored; missing or empty tokens take the
/// column fallback.
pub fn assign_columns(tokens: &[String]) -> DiveEntry {
    let mut entry = DiveEntry::default();

    for (column, index) in DiveColumn::LAYOUT {
        let value = tokens
            .get(index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| column.fallback());
        *column.slot(&mut entry) = value.to_string();
    }

    entry
}
