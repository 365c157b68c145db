//! Error kinds for task definition resolution.

use thiserror::Error;

/// Terminal failures of one resolver invocation.
///
/// None of these are retried or recovered; each aborts the invocation before
/// any output file is produced.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The named service has no matching entry in the cluster.
    #[error("Service not found")]
    ServiceNotFound,

    /// The control plane rejected or could not complete a describe call.
    /// Carries the provider's own message.
    #[error("{0}")]
    Provider(String),

    /// The replacements input is not valid JSON.
    #[error("invalid replacements JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The output file or output channel could not be written.
    #[error("failed to write task definition output: {0}")]
    Io(#[from] std::io::Error),
}
