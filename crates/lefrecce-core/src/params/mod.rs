//! Request parameter assembly
//!
//! The API is picky about how parameters are spelled on the wire:
//! - `solutions`: journey-search query defaults and normalization
//! - `travelers`: the positional traveler-parameter template merge
//!
//! plus the shared serialization helpers (boolean literals, two-decimal
//! amounts, percent-encoded query strings, date defaults).

pub mod solutions;
pub mod travelers;

// Re-export the main builders
pub use solutions::SolutionsQuery;
pub use travelers::{merge_traveler_parameters, Traveler, DEFAULT_TRAVELER_FIELDS};

/// Serialize a boolean the way the API expects: the literal strings
/// "true" / "false", never 1/0.
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Format a payment amount to exactly two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Build a percent-encoded query string from key/value pairs.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Today's date in the `dd/mm/yyyy` format the API uses.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// The current hour, zero-padded, as the default departure time.
pub(crate) fn current_hour() -> String {
    chrono::Local::now().format("%H").to_string()
}
