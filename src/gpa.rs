use tracing::debug;

use crate::error::{GpaError, GpaResult};
use crate::grade;
use crate::history::SessionHistory;
use crate::parse::parse_sgpa_list;

/// One subject's credit and grade symbol for a single SGPA request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectEntry {
    pub credit: f64,
    pub grade: String,
}

impl SubjectEntry {
    pub fn new(credit: f64, grade: impl Into<String>) -> Self {
        Self {
            credit,
            grade: grade.into(),
        }
    }

    /// Build an entry from raw form text. The grade symbol is kept as typed
    /// and resolved by [`compute_sgpa`].
    pub fn parse(credit: &str, grade: &str) -> GpaResult<Self> {
        let trimmed = credit.trim();
        let credit = trimmed
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or_else(|| GpaError::InvalidCredit(trimmed.to_string()))?;
        Ok(Self::new(credit, grade.trim()))
    }
}

/// Where the values of a CGPA came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum CgpaSource {
    #[strum(to_string = "this session")]
    Session,
    #[strum(to_string = "manual input")]
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cgpa {
    pub value: f64,
    pub source: CgpaSource,
    pub semesters: usize,
}

/// Round to two decimals, ties to even on the exact binary value.
///
/// Fixed precision formatting is exact, so `8.785` (stored as
/// 8.78500000000000014...) becomes 8.79 while `2.675` (stored as
/// 2.67499999999999982...) becomes 2.67.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Two decimal places, the one way a GPA is shown to the user.
pub fn format_gpa(value: f64) -> String {
    format!("{:.2}", value)
}

/// Credit-weighted mean grade point across `entries`, rounded to 2 decimals.
///
/// A single bad entry fails the whole request. The resolved
/// `(credit, points)` pairs are summed in sorted order so any ordering of
/// the same subjects yields the same bits before rounding.
pub fn compute_sgpa(entries: &[SubjectEntry]) -> GpaResult<f64> {
    if entries.is_empty() {
        return Err(GpaError::EmptyInput);
    }

    let mut resolved = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.credit.is_finite() || entry.credit < 0.0 {
            return Err(GpaError::InvalidCredit(entry.credit.to_string()));
        }
        resolved.push((entry.credit, grade::lookup(&entry.grade)?));
    }
    resolved.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let (total_weighted, total_credits) = resolved
        .iter()
        .fold((0.0_f64, 0.0_f64), |(weighted, credits), (credit, points)| {
            (weighted + credit * f64::from(*points), credits + credit)
        });

    if total_credits == 0.0 {
        return Err(GpaError::ZeroCreditTotal);
    }

    let mean = total_weighted / total_credits;
    if !mean.is_finite() {
        return Err(GpaError::InvalidCredit(total_credits.to_string()));
    }

    let sgpa = round2(mean);
    debug!(subjects = entries.len(), total_credits, sgpa, "computed sgpa");
    Ok(sgpa)
}

/// Arithmetic mean of SGPA values, rounded to 2 decimals.
pub fn compute_cgpa(values: &[f64]) -> GpaResult<f64> {
    if values.is_empty() {
        return Err(GpaError::EmptyInput);
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(GpaError::InvalidValue(format!("'{}' is not a number", bad)));
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if !mean.is_finite() {
        return Err(GpaError::InvalidValue(
            "the values are too large to average".to_string(),
        ));
    }

    let cgpa = round2(mean);
    debug!(semesters = values.len(), cgpa, "computed cgpa");
    Ok(cgpa)
}

/// CGPA with the session policy applied: a non-empty history always wins
/// and `manual` is only consulted when the history is empty.
pub fn cgpa_for_session(history: &SessionHistory, manual: Option<&str>) -> GpaResult<Cgpa> {
    if !history.is_empty() {
        if manual.is_some() {
            debug!("session history present, ignoring manual sgpa list");
        }
        let values = history.values();
        return Ok(Cgpa {
            value: compute_cgpa(&values)?,
            source: CgpaSource::Session,
            semesters: values.len(),
        });
    }

    let values = parse_sgpa_list(manual.ok_or(GpaError::EmptyInput)?)?;
    Ok(Cgpa {
        value: compute_cgpa(&values)?,
        source: CgpaSource::Manual,
        semesters: values.len(),
    })
}
