// Grade table, SGPA/CGPA maths, session history and the key-driven app state.
// The cgpa-genie binary adds the CLI and the ratatui screens on top.
pub mod app;
pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gpa;
pub mod grade;
pub mod history;
pub mod logging;
pub mod parse;
pub mod runtime;

pub use error::{GpaError, GpaResult};
pub use gpa::{cgpa_for_session, compute_cgpa, compute_sgpa, Cgpa, CgpaSource, SubjectEntry};
pub use grade::{lookup, Grade};
pub use history::{HistoryState, SessionHistory};
