//! Uniform classification of upstream call failures.
//!
//! Every upstream source maps its transport, status, decoding, and missing
//! credential conditions into this one enum so the orchestrators can treat
//! any failed sub-call identically: record the cause and take the fallback
//! edge. None of these variants ever crosses the service boundary as a
//! non-200 response.

/// Failure of one upstream fetch, carrying a human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamFailure {
    /// The request exceeded the client timeout.
    #[error("upstream request timed out: {message}")]
    Timeout { message: String },
    /// The request could not be performed at the transport level.
    #[error("upstream transport failed: {message}")]
    Transport { message: String },
    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },
    /// The payload could not be decoded into the expected shape.
    #[error("upstream payload could not be decoded: {message}")]
    Decode { message: String },
    /// No usable credential is configured for this provider.
    #[error("upstream credentials missing: {message}")]
    MissingCredential { message: String },
}

impl UpstreamFailure {
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential {
            message: message.into(),
        }
    }
}
