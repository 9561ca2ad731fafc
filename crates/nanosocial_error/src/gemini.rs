//! Gemini-specific error types.

/// Failure conditions for calls to the hosted Gemini models.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// No API credential is configured
    #[display("{}", _0)]
    Configuration(String),
    /// Request rejected locally before reaching the network
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Transport or model-side failure
    #[display("{}", _0)]
    Upstream(String),
    /// Non-success HTTP status returned by the API
    #[display("HTTP {} error: {}", status_code, message)]
    UpstreamStatus {
        /// HTTP status code
        status_code: u16,
        /// Message extracted from the error body
        message: String,
    },
    /// Text model output does not match the expected schema
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// Image string is not a `data:<mime>;base64,<payload>` URI
    #[display("Invalid base64 image format: {}", _0)]
    InvalidImageFormat(String),
    /// Response contained no inline image part
    #[display("No image generated.")]
    NoImageProduced,
}

impl GeminiErrorKind {
    /// Returns true for failures that originated at or beyond the network boundary.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::Upstream(_) | GeminiErrorKind::UpstreamStatus { .. }
        )
    }
}

/// Gemini error with source location tracking.
///
/// The `Display` output is the bare kind message so it can be shown to the
/// user verbatim; the location is available through the public fields.
///
/// # Examples
///
/// ```
/// use nanosocial_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::Configuration("API Key is missing.".into()));
/// assert_eq!(format!("{}", err), "API Key is missing.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{}", kind)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GeminiErrorKind {
        &self.kind
    }
}

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;
