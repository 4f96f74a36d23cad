//! Error types for foreign plotting calls.

/// Errors surfaced by a [`Session`](crate::Session).
///
/// Exceptions raised inside the foreign runtime are forwarded as they are; the
/// adapter does not translate, recover or retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The embedded interpreter could not be started.
    #[error("failed to initialize the embedded interpreter: {0}")]
    Initialization(String),

    /// An exception raised by the foreign runtime.
    #[error("{kind}: {message}")]
    Foreign { kind: String, message: String },

    /// An exception raised by the embedded Python interpreter.
    #[cfg(feature = "python")]
    #[error(transparent)]
    Python(#[from] pyo3::PyErr),

    /// A foreign call returned a value of an unexpected shape.
    #[error("expected {expected} from foreign call, found {found}")]
    UnexpectedValue {
        expected: &'static str,
        found: String,
    },

    /// A packed pixel buffer does not split into whole rows of pixels.
    #[error("pixel buffer of {len} bytes does not divide into rows of {row} bytes")]
    ImageShape { len: usize, row: usize },
}

impl Error {
    /// Build a [`Error::Foreign`] from an exception type name and message.
    pub fn foreign(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Foreign {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
