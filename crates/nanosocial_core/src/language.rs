//! Target languages offered for generated posts.

/// Language used when none is selected.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Languages offered for selection. Clients accept any free-form label.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["English", "Hinglish", "Hindi"];
