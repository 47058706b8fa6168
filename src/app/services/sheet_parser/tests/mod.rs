//! Test utilities for the dive log export parser
//!
//! Provides sample exports shaped like the live response sheet.

mod parser_tests;

/// Header row as written by the response form
pub const FORM_HEADER: &str = "\"Timestamp\",\"Date\",\"Dive Site\",\"Total Time\",\"Maximum Depth\",\"Average Depth\",\"Water Temperature\",\"Visibility\",\"Current\",\"Waves\",\"Guide\",\"Type of Air\"";

/// A fully quoted row in the layout the sheet export uses
pub fn quoted_row(timestamp: &str, date: &str, site: &str) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"45 min\",\"18m\",\"12m\",\"27C\",\"15m\",\"Mild\",\"Calm\",\"Ana\",\"Air\"",
        timestamp, date, site
    )
}

/// Export with three sessions over five dives, in submission order
pub fn create_test_export() -> String {
    [
        FORM_HEADER.to_string(),
        quoted_row("5/1/2024 8:00:00", "2024-05-01", "Catalinas"),
        quoted_row("5/1/2024 11:00:00", "2024-05-01", "Bat Islands"),
        quoted_row("5/2/2024 8:30:00", "2024-05-02", "Big Scare"),
        quoted_row("5/3/2024 9:00:00", "2024-05-03", "Tortuga"),
        quoted_row("5/3/2024 12:00:00", "2024-05-03", "Punta Gorda"),
    ]
    .join("\n")
}
