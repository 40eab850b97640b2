use thiserror::Error;

/// Failures of the grade point computations.
///
/// None of these are fatal: the caller shows the message and the user may
/// correct the input and try again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GpaError {
    #[error("invalid grade '{0}' (expected one of S, A, B, C, D, E, F, N)")]
    InvalidGrade(String),

    #[error("invalid credit '{0}' (expected a non-negative number)")]
    InvalidCredit(String),

    #[error("total credits cannot be zero")]
    ZeroCreditTotal,

    #[error("nothing to calculate: no entries were given")]
    EmptyInput,

    #[error("invalid input format: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course file {0} is not valid UTF-8")]
    Encoding(String),

    #[error("course file {file} could not be parsed: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type GpaResult<T> = Result<T, GpaError>;
