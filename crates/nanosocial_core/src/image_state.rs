//! Image editor state.

use crate::ImageDataUri;

/// State of the image editor for the post currently being visualized.
///
/// `history` is an append-only log of every image produced since the editor
/// was last opened, oldest first. A failed call keeps the last good image.
///
/// # Examples
///
/// ```
/// use nanosocial_core::{ImageDataUri, ImageState};
///
/// let mut state = ImageState::default();
/// state.begin_loading();
/// assert!(state.is_loading);
///
/// let image = ImageDataUri::parse("data:image/png;base64,AAAA").unwrap();
/// state.succeed(image.clone());
/// assert_eq!(state.data, Some(image));
/// assert_eq!(state.history.len(), 1);
///
/// state.begin_loading();
/// state.fail("quota exceeded");
/// assert!(state.data.is_some());
/// assert_eq!(state.error.as_deref(), Some("quota exceeded"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
    /// A generate or edit call is in flight
    pub is_loading: bool,
    /// Current image
    pub data: Option<ImageDataUri>,
    /// Message from the last failed call
    pub error: Option<String>,
    /// Every image produced in this editor session, in order
    pub history: Vec<ImageDataUri>,
}

impl ImageState {
    /// Return to the empty state used when the editor opens for a new post.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mark a call as in flight. The current image stays visible.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Record a newly produced image.
    pub fn succeed(&mut self, image: ImageDataUri) {
        self.is_loading = false;
        self.error = None;
        self.history.push(image.clone());
        self.data = Some(image);
    }

    /// Record a failed call.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    /// Whether an image is currently shown.
    pub fn has_image(&self) -> bool {
        self.data.is_some()
    }
}
