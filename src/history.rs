use chrono::{DateTime, Local};
use tracing::info;

/// One SGPA calculated during this run.
#[derive(Debug, Clone, PartialEq)]
pub struct SgpaRecord {
    pub sgpa: f64,
    pub course: Option<String>,
    pub recorded_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    HasHistory,
}

/// SGPA values calculated in the current process, in calculation order.
///
/// Owned by whoever drives the calculator; nothing is written to disk and
/// the history is gone when the process exits.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    records: Vec<SgpaRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a history, e.g. for tests that need `HasHistory` up front.
    pub fn with_values(values: &[f64]) -> Self {
        let mut history = Self::new();
        for value in values {
            history.record(*value);
        }
        history
    }

    pub fn record(&mut self, sgpa: f64) {
        self.record_for(sgpa, None);
    }

    pub fn record_for(&mut self, sgpa: f64, course: Option<String>) {
        info!(sgpa, course = course.as_deref(), semester = self.records.len() + 1, "recorded sgpa");
        self.records.push(SgpaRecord {
            sgpa,
            course,
            recorded_at: Local::now(),
        });
    }

    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sgpa).collect()
    }

    pub fn records(&self) -> &[SgpaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> HistoryState {
        if self.records.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::HasHistory
        }
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.state(), HistoryState::Empty);
        assert!(history.values().is_empty());
    }

    #[test]
    fn test_record_keeps_order() {
        let mut history = SessionHistory::new();
        history.record(9.57);
        history.record_for(8.0, Some("Computer Science".into()));

        assert_eq!(history.values(), vec![9.57, 8.0]);
        assert_eq!(history.state(), HistoryState::HasHistory);
        assert_eq!(history.records()[0].course, None);
        assert_eq!(
            history.records()[1].course.as_deref(),
            Some("Computer Science")
        );
        assert!(history.records()[0].recorded_at <= history.records()[1].recorded_at);
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut history = SessionHistory::with_values(&[7.0, 8.0]);
        assert_eq!(history.len(), 2);
        history.reset();
        assert_eq!(history.state(), HistoryState::Empty);
    }
}
