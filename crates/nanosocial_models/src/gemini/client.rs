//! Gemini REST client for post and image generation.
//!
//! # Example
//!
//! ```no_run
//! use nanosocial_models::{GeminiClient, GeminiSettingsBuilder};
//! use nanosocial_interface::ImageGenerator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = GeminiSettingsBuilder::default()
//!     .api_key("my-key")
//!     .image_model("gemini-2.5-flash-image")
//!     .build()?;
//! let client = GeminiClient::new(settings);
//! let image = client.generate_image("a vegan bakery storefront, morning light").await?;
//! assert!(image.as_str().starts_with("data:image/"));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use derive_builder::Builder;
use derive_getters::Getters;
use nanosocial_core::{GeneratedContentResponse, ImageDataUri};
use nanosocial_error::{GeminiError, GeminiErrorKind, GeminiResult};
use nanosocial_interface::{ContentGenerator, ImageGenerator};
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

use super::dto::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use super::prompt::{content_prompt, content_response_schema};

/// Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for structured post generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Model used for image generation and editing.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Connection settings for [`GeminiClient`].
///
/// The API key is optional here; its absence is reported as a
/// `Configuration` error on each call instead of at construction.
#[derive(Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiSettings {
    /// API credential
    #[builder(default, setter(into, strip_option))]
    api_key: Option<String>,
    /// API root, without a trailing `/models`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Text model identifier
    #[builder(default = "DEFAULT_TEXT_MODEL.to_string()")]
    text_model: String,
    /// Image model identifier
    #[builder(default = "DEFAULT_IMAGE_MODEL.to_string()")]
    image_model: String,
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl GeminiSettings {
    /// Default settings with the key taken from `GEMINI_API_KEY`, or
    /// `API_KEY` when that is unset. Blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: api_key_from_env(),
            ..Self::default()
        }
    }

    /// Replace the API key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }
}

/// Read the API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Every call is a single attempt; failures are returned to the caller
/// without retry.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Create a client with the given settings.
    pub fn new(settings: GeminiSettings) -> Self {
        debug!(?settings, "Created Gemini client");
        Self {
            http: Client::new(),
            settings,
        }
    }

    /// Create a client with default models and the key from the environment.
    pub fn from_env() -> Self {
        Self::new(GeminiSettings::from_env())
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    fn api_key(&self) -> GeminiResult<&str> {
        self.settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::Configuration(
                    "API Key is missing. Set GEMINI_API_KEY.".to_string(),
                ))
            })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model.trim_start_matches("models/")
        )
    }

    /// POST a request to `model` and decode the response envelope.
    #[instrument(skip(self, request))]
    async fn send(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let api_key = self.api_key()?;
        let url = self.endpoint(model);

        debug!(url = %url, "Sending request to Gemini");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Upstream(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(body);
            error!(status = %status, error = %message, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::UpstreamStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let decoded: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode Gemini response");
            GeminiError::new(GeminiErrorKind::Upstream(format!(
                "Failed to decode response: {}",
                e
            )))
        })?;

        if let Some(usage) = &decoded.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                "Received response"
            );
        }

        Ok(decoded)
    }

    /// Send parts to the image model and pull out the first inline image.
    async fn request_image(&self, parts: Vec<Part>) -> GeminiResult<ImageDataUri> {
        let request = GenerateContentRequest::user(parts);
        let response = self.send(&self.settings.image_model, &request).await?;

        match response.first_inline_data() {
            Some(inline) => ImageDataUri::from_parts(&inline.mime_type, &inline.data),
            None => {
                warn!(reason = ?response.empty_reason(), "Response contained no image");
                Err(GeminiError::new(GeminiErrorKind::NoImageProduced))
            }
        }
    }
}

/// Message from a Google error envelope, or the raw body when it has none.
fn upstream_message(body: String) -> String {
    serde_json::from_str::<ApiErrorBody>(&body)
        .map(|parsed| parsed.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or(body)
}

fn require_non_blank(value: &str, what: &str) -> GeminiResult<()> {
    if value.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::InvalidRequest(format!(
            "{} must not be empty",
            what
        ))));
    }
    Ok(())
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    #[instrument(skip(self), fields(model = %self.settings.text_model))]
    async fn generate_content(
        &self,
        topic: &str,
        language: &str,
    ) -> GeminiResult<GeneratedContentResponse> {
        require_non_blank(topic, "topic")?;
        self.api_key()?;

        let request = GenerateContentRequest::user(vec![Part::text(content_prompt(
            topic, language,
        ))])
        .with_config(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(content_response_schema()),
        });

        let response = self.send(&self.settings.text_model, &request).await?;

        let text = response.text().ok_or_else(|| {
            let reason = response
                .empty_reason()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default();
            GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
                "No response from Gemini{}",
                reason
            )))
        })?;

        let content = GeneratedContentResponse::from_json(&text).inspect_err(|e| {
            warn!(error = %e, response_len = text.len(), "Generated content failed validation");
        })?;

        debug!(posts = content.posts.len(), "Generated content");
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.settings.text_model
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    #[instrument(skip(self), fields(model = %self.settings.image_model))]
    async fn generate_image(&self, prompt: &str) -> GeminiResult<ImageDataUri> {
        require_non_blank(prompt, "prompt")?;
        self.api_key()?;

        self.request_image(vec![Part::text(prompt)]).await
    }

    #[instrument(
        skip(self, current),
        fields(model = %self.settings.image_model, current_len = current.len())
    )]
    async fn edit_image(&self, current: &str, prompt: &str) -> GeminiResult<ImageDataUri> {
        let current = ImageDataUri::parse(current)?;
        require_non_blank(prompt, "prompt")?;
        self.api_key()?;

        self.request_image(vec![
            Part::inline(current.mime_type(), current.payload()),
            Part::text(prompt),
        ])
        .await
    }

    fn image_model_name(&self) -> &str {
        &self.settings.image_model
    }
}
