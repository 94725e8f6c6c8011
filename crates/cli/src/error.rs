use std::path::PathBuf;

/// Testmap error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mapping file missing at the resolved path
    #[error("mapping file not found: {}", .path.display())]
    MappingNotFound { path: PathBuf },

    /// Mapping file exists but does not deserialize into tag rules
    #[error("malformed mapping file: {}: {message}", .path.display())]
    MappingMalformed { path: PathBuf, message: String },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using testmap Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the CLI surface.
///
/// The `run` command exits with the test runner's own status instead,
/// whatever that is; these codes cover testmap's own outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// The test runner reported failure (or could not be started)
    RunnerFailed = 1,
    /// Mapping or configuration error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::MappingNotFound { .. } | Error::MappingMalformed { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
