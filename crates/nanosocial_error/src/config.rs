//! Errors from loading `nanosocial.toml` layers and building client settings.

/// A configuration layer failed to load, parse, or produce valid settings.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid configuration: {} (raised at {}:{})", message, file, line)]
pub struct ConfigError {
    /// What went wrong, including the offending key or file when known
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanosocial_error::{ConfigError, NanoSocialError, NanoSocialErrorKind};
    ///
    /// let err: NanoSocialError = ConfigError::new("unknown field `text_modle` in [gemini]").into();
    /// match err.kind() {
    ///     NanoSocialErrorKind::Config(e) => assert!(e.message.contains("[gemini]")),
    ///     other => panic!("unexpected {other}"),
    /// }
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
