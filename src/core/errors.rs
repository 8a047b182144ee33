/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Driver-level errors. Any of these ends the run.
#[derive(Error, Debug, Diagnostic)]
pub enum SimulationError {
    #[error("Failed to read event script {path}")]
    #[diagnostic(
        code(simulation::io),
        help("Check that the script path exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed event script at line {line}: {message}")]
    #[diagnostic(
        code(simulation::parse),
        help("Expected a partition size on the first line, then `pid size` pairs (negative pid frees, -99999 coalesces).")
    )]
    Parse { line: usize, message: String },

    #[error("{0}")]
    #[diagnostic(code(simulation::usage))]
    Usage(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Failed to serialize step report")]
    #[diagnostic(code(simulation::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output")]
    #[diagnostic(code(simulation::output))]
    Output(#[from] std::io::Error),
}

impl SimulationError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        SimulationError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Driver result type
pub type SimulationResult<T> = Result<T, SimulationError>;
