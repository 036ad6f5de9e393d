use thiserror::Error;

/// Unified error type for rc-align operations
#[derive(Error, Debug)]
pub enum RcAlignError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("History query failed: {0}")]
    History(String),

    #[error("Cannot parse baseline tag '{tag}': {reason}")]
    Baseline { tag: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in rc-align
pub type Result<T> = std::result::Result<T, RcAlignError>;

/// The named failure kinds a run can end in.
///
/// Every kind is fail-open: the run produces no version and the process
/// still exits successfully so the pipeline falls back to native versioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HistoryQueryFailure,
    UnparseableBaseline,
    Configuration,
    OutputFailure,
}

impl RcAlignError {
    /// Create a history query error with context
    pub fn history(msg: impl Into<String>) -> Self {
        RcAlignError::History(msg.into())
    }

    /// Create an unparseable baseline error for `tag`
    pub fn baseline(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        RcAlignError::Baseline {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RcAlignError::Config(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        RcAlignError::Output(msg.into())
    }

    /// Classify this error into the fail-open taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            RcAlignError::Git(_) | RcAlignError::History(_) => FailureKind::HistoryQueryFailure,
            RcAlignError::Baseline { .. } => FailureKind::UnparseableBaseline,
            RcAlignError::Config(_) => FailureKind::Configuration,
            RcAlignError::Output(_) | RcAlignError::Io(_) => FailureKind::OutputFailure,
        }
    }
}
