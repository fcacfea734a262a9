//! Comma-delimited text codec for the composite roster columns.
//!
//! Aliases and lane weights are flattened into single TEXT columns and split
//! back on the same delimiter when read. An alias containing a comma would
//! make the split ambiguous, so `operations` rejects those before they reach
//! the database. Lane weights cannot collide: `f64` formatting never emits
//! a comma.

use std::num::ParseFloatError;

/// Column delimiter for both composite fields.
pub const DELIMITER: char = ',';

/// Join aliases into the stored `name` column form.
pub fn encode_names(names: &[String]) -> String {
    names.join(",")
}

/// Split a stored `name` column back into the alias list.
pub fn decode_names(text: &str) -> Vec<String> {
    text.split(DELIMITER).map(str::to_string).collect()
}

/// Join lane weights into the stored `lane_pref` column form.
pub fn encode_lanes(lanes: &[f64]) -> String {
    lanes
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a stored `lane_pref` column back into weights.
pub fn decode_lanes(text: &str) -> Result<Vec<f64>, ParseFloatError> {
    // An empty lane list encodes to the empty string.
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(DELIMITER).map(str::parse).collect()
}
