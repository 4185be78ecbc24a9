//! Typed errors raised when a payload is extracted from the wrong variant.

use {std::fmt, thiserror::Error};

/// The panic payload produced by `unwrap` or `expect` on a failure, and by
/// `unwrap_err` or `expect_err` on a success.
///
/// The offending payload is carried in its `Debug` rendering, since the
/// payload types are generic and need not outlive the call. Callers and
/// tests can downcast the panic payload to this type and assert on its
/// exact content.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnwrapFailure {
    /// Extraction without a caller message, `unwrap`-style.
    #[error("{payload}")]
    Bare {
        /// The offending payload, rendered with its `Debug` representation.
        payload: String,
    },
    /// Extraction with a caller message, `expect`-style.
    #[error("{message}: {payload}")]
    WithMessage {
        /// The caller-supplied message.
        message: String,
        /// The offending payload, rendered with its `Debug` representation.
        payload: String,
    },
}

impl UnwrapFailure {
    pub(crate) fn bare(payload: &dyn fmt::Debug) -> Self {
        Self::Bare {
            payload: format!("{payload:?}"),
        }
    }

    pub(crate) fn with_message(message: &str, payload: &dyn fmt::Debug) -> Self {
        Self::WithMessage {
            message: message.to_string(),
            payload: format!("{payload:?}"),
        }
    }

    /// The rendered payload of the offending variant.
    pub fn payload(&self) -> &str {
        match self {
            Self::Bare { payload } | Self::WithMessage { payload, .. } => payload,
        }
    }

    /// The caller-supplied message, if one was given.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Bare { .. } => None,
            Self::WithMessage { message, .. } => Some(message),
        }
    }
}
