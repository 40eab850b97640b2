//! Text parsers for the manual CGPA list and the headless `credit:grade`
//! entry syntax. The list is read as JSON numbers, so nothing is evaluated
//! and `nan`/`inf` never get through.

use crate::error::{GpaError, GpaResult};
use crate::gpa::SubjectEntry;

/// Parse `[8.5, 9.0, 8.0]` (brackets optional) into its numbers.
///
/// Blank input and `[]` produce an empty list; the caller decides whether
/// that is an error.
pub fn parse_sgpa_list(text: &str) -> GpaResult<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let parsed = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<f64>>(trimmed)
    } else {
        serde_json::from_str::<Vec<f64>>(&format!("[{}]", trimmed))
    };
    parsed.map_err(|err| GpaError::InvalidValue(err.to_string()))
}

/// Parse `4:S, 3:A` into subject entries for one semester.
pub fn parse_entries(text: &str) -> GpaResult<Vec<SubjectEntry>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|pair| {
            let (credit, grade) = pair.split_once(':').ok_or_else(|| {
                GpaError::InvalidValue(format!("'{}' is not in credit:grade form", pair.trim()))
            })?;
            SubjectEntry::parse(credit, grade)
        })
        .collect()
}
