//! Hosted model integrations for NanoSocial.
//!
//! [`GeminiClient`] implements both generator traits against the Gemini REST
//! API: structured JSON generation for posts, and inline-image generation and
//! editing for visuals.
//!
//! # Example
//!
//! ```no_run
//! use nanosocial_models::GeminiClient;
//! use nanosocial_interface::{ContentGenerator, ImageGenerator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env();
//! let content = client.generate_content("New vegan bakery", "English").await?;
//! let image = client
//!     .generate_image(&content.posts[0].image_prompt_suggestion)
//!     .await?;
//! let edited = client.edit_image(image.as_str(), "add a retro filter").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, Content, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
    GenerateContentRequest, GenerateContentResponse, GeminiClient, GeminiSettings,
    GeminiSettingsBuilder, GenerationConfig, InlineData, Part, PromptFeedback, UsageMetadata,
    api_key_from_env, content_prompt, content_response_schema,
};
