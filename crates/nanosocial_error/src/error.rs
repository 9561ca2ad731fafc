//! Top-level error wrapper types.

use crate::{ConfigError, ControllerError, GeminiError, JsonError, StorageError};

/// Every error a NanoSocial operation can produce.
///
/// # Examples
///
/// ```
/// use nanosocial_error::{NanoSocialError, JsonError};
///
/// let json_err = JsonError::new("expected value at line 1 column 1");
/// let err: NanoSocialError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NanoSocialErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Hosted model call error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Persistent store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Application state precondition error
    #[from(ControllerError)]
    Controller(ControllerError),
}

/// NanoSocial error with kind discrimination.
///
/// # Examples
///
/// ```
/// use nanosocial_error::{ConfigError, NanoSocialResult};
///
/// fn might_fail() -> NanoSocialResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("NanoSocial Error: {}", _0)]
pub struct NanoSocialError(Box<NanoSocialErrorKind>);

impl NanoSocialError {
    /// Create a new error from a kind.
    pub fn new(kind: NanoSocialErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NanoSocialErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to NanoSocialErrorKind
impl<T> From<T> for NanoSocialError
where
    T: Into<NanoSocialErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for NanoSocial operations.
pub type NanoSocialResult<T> = std::result::Result<T, NanoSocialError>;
