//! Builder error taxonomy.

use crate::sink::SinkError;

/// Every builder operation validates its inputs before computing, populates
/// its descriptor entirely in local state, and performs a single append; a
/// returned error therefore implies no partial command was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HcpError {
    /// A required parameter struct, sub-field, or collaborator is absent.
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// A value is present but semantically unsupported.
    #[error("invalid parameter: {0}")]
    InvalidParam(&'static str),

    /// The codec standard or format is not handled by this operation.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    /// The append/registration collaborator rejected the operation; the only
    /// error class originating outside this crate.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

pub type Result<T> = core::result::Result<T, HcpError>;
