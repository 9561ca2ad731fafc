//! Capability traits for hosted generative models.

use async_trait::async_trait;
use nanosocial_core::{GeneratedContentResponse, ImageDataUri};
use nanosocial_error::GeminiResult;

/// Produces platform-specific posts for a topic.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate one post per platform plus a shared creative brief.
    ///
    /// `topic` must be non-blank. `language` is a free-form label such as
    /// "English" or "Hinglish"; post content is written in it.
    async fn generate_content(
        &self,
        topic: &str,
        language: &str,
    ) -> GeminiResult<GeneratedContentResponse>;

    /// Model identifier used for text generation.
    fn model_name(&self) -> &str;
}

/// Produces and edits images.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a fresh image from a text prompt.
    async fn generate_image(&self, prompt: &str) -> GeminiResult<ImageDataUri>;

    /// Apply an edit instruction to an existing image.
    ///
    /// `current` is the raw data URI string. Implementations must reject a
    /// string that is not `data:<mime>;base64,<payload>` with
    /// `InvalidImageFormat` before doing any I/O.
    async fn edit_image(&self, current: &str, prompt: &str) -> GeminiResult<ImageDataUri>;

    /// Model identifier used for image calls.
    fn image_model_name(&self) -> &str;
}
