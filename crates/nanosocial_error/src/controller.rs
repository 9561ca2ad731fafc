//! Errors raised when a user intent cannot be applied to application state.

/// Precondition failures for controller actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ControllerErrorKind {
    /// Generation requested with a blank topic
    #[display("Topic must not be empty")]
    EmptyTopic,
    /// Save requested with no generated content or no topic
    #[display("There is no generated campaign to save")]
    NothingToSave,
    /// No saved campaign has the given id
    #[display("Saved campaign not found: {}", _0)]
    CampaignNotFound(String),
}

/// Controller error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{} at line {} in {}", kind, line, file)]
pub struct ControllerError {
    /// The kind of error that occurred
    pub kind: ControllerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ControllerError {
    /// Create a new controller error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ControllerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
