//! CLI error type and exit codes.

use marquee_core::MarqueeError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or inconsistent command-line arguments.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Catalogue could not be decoded, or output could not be encoded.
    #[error("{0}")]
    Data(String),

    /// Catalogue file could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// Grouping configuration rejected.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// sysexits-style exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Arguments(_) => 2,
            CliError::Data(_) => 65, // EX_DATAERR
            CliError::Io(_) => 74,   // EX_IOERR
            CliError::Config(_) => 78,
        }
    }

    /// The single line written to stderr on failure.
    pub fn report(&self) -> String {
        format!("Error: {self}")
    }
}

impl From<MarqueeError> for CliError {
    fn from(err: MarqueeError) -> Self {
        let msg = err.to_string();
        if err.is_data_error() {
            CliError::Data(msg)
        } else if matches!(err, MarqueeError::InvalidConfig(_)) {
            CliError::Config(msg)
        } else {
            CliError::Io(msg)
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        MarqueeError::Encode(err).into()
    }
}
