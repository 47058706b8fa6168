//! Application constants for the dive log book
//!
//! This module contains the default data source coordinates, display
//! sentinels, and insight service defaults used throughout the crate.

// =============================================================================
// Tabular Data Source
// =============================================================================

/// Identifier of the published Google Sheet holding the dive log responses
pub const DEFAULT_SHEET_ID: &str = "1Xn4HTnQ_i8YgqCD_jdNcO8odXTznGstFVNZzvnoVAX0";

/// Sheet tab the Google Form writes its responses into
pub const DEFAULT_TAB_NAME: &str = "Form Responses 1";

/// Base URL for Google Sheets document access
pub const SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Default timeout for the export request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("dive_logbook/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Record Defaults and Display
// =============================================================================

/// Sentinel used when a row carries no dive site
pub const UNKNOWN_SITE: &str = "Unknown Site";

/// Placeholder shown in place of an empty field at render time
pub const EMPTY_FIELD_PLACEHOLDER: &str = "---";

/// Region label printed on every dive card
pub const REGION_LABEL: &str = "Pacific Coast Costa Rica";

/// Shared folder where guides upload session photos
pub const PHOTOS_URL: &str = "https://drive.google.com/drive/u/2/folders/1n55bjqy4aFcz3E6YFatHNHfQkhn10Of4";

/// Review page for the dive shop
pub const REVIEW_URL: &str = "https://maps.app.goo.gl/3rdLVh5X9kat7wEA7";

/// Social links printed in the footer
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/crdivebuddies"),
    ("Instagram", "https://www.instagram.com/crdivebuddies"),
];

/// Owner line printed in the footer after the copyright year
pub const FOOTER_OWNER: &str = "CR DIVE BUDDIES COSTA RICA";

/// Log book version label printed in the footer
pub const LOGBOOK_VERSION_LABEL: &str = "Log Book v2.0";

// =============================================================================
// Insight Service
// =============================================================================

/// Base URL of the Generative Language API
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for dive insights unless overridden
pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variables checked, in order, for the insight API key
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];
