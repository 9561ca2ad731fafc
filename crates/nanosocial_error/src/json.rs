//! Errors from encoding campaigns and posts as JSON for output.

/// JSON encoding or decoding failed outside the model and store paths.
///
/// Model output that fails to decode is a `GeminiErrorKind::MalformedResponse`
/// and a stored list that fails to encode is a storage error; this type covers
/// the rest, such as `--format json` output.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} (raised at {}:{})", message, file, line)]
pub struct JsonError {
    /// Message from `serde_json`
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Wrap a `serde_json` failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanosocial_error::JsonError;
    ///
    /// let err = JsonError::new("invalid type: map, expected a sequence at line 1 column 0");
    /// assert!(err.to_string().starts_with("JSON Error: invalid type"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
