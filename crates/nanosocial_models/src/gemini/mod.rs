//! Google Gemini REST API client.
//!
//! One transport serves both the text model (schema-constrained JSON output)
//! and the image model (inline image parts in, inline image parts out).

mod client;
mod dto;
mod prompt;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiClient, GeminiSettings,
    GeminiSettingsBuilder, api_key_from_env,
};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, PromptFeedback, UsageMetadata,
};
pub use prompt::{content_prompt, content_response_schema};
