//! Domain error types.

/// Top-level error type for tradejournal.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// Backing file cannot be opened or created, or a pooled connection
    /// cannot be acquired. Fatal at startup.
    #[error("storage unavailable: {reason}")]
    Storage { reason: String },

    /// Malformed table definition. Indicates a programming error, not retried.
    #[error("schema error: {reason}")]
    Schema { reason: String },

    /// Malformed statement or constraint violation on read/write.
    #[error("query error: {reason}")]
    Query { reason: String },

    /// Seed dataset present but unparsable. Non-fatal: callers warn and
    /// continue with an empty ledger.
    #[error("seed dataset error: {reason}")]
    Seed { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&JournalError> for std::process::ExitCode {
    fn from(err: &JournalError) -> Self {
        let code: u8 = match err {
            JournalError::Io(_) => 1,
            JournalError::ConfigParse { .. }
            | JournalError::ConfigMissing { .. }
            | JournalError::ConfigInvalid { .. } => 2,
            JournalError::Storage { .. } | JournalError::Schema { .. } => 3,
            JournalError::Query { .. } => 4,
            JournalError::Seed { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
