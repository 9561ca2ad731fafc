//! Generated post content.

use crate::Platform;
use nanosocial_error::{GeminiError, GeminiErrorKind, GeminiResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{EnumCount, IntoEnumIterator};

/// One generated post for a single platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    /// Destination platform
    pub platform: Platform,
    /// Post text, in the requested language
    pub content: String,
    /// Why this tone and format suit the platform
    pub rationale: String,
    /// English prompt for generating an accompanying image
    pub image_prompt_suggestion: String,
}

/// A batch of platform posts sharing one creative brief.
///
/// Produced by the content generation client and replaced wholesale by the
/// next generation. Post order is the order the model emitted them in.
///
/// # Examples
///
/// ```
/// use nanosocial_core::GeneratedContentResponse;
///
/// let missing_brief = r#"{ "posts": [] }"#;
/// assert!(GeneratedContentResponse::from_json(missing_brief).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContentResponse {
    /// One post per platform
    pub posts: Vec<SocialPost>,
    /// Shared visual direction for the campaign
    pub base_creative_brief: String,
}

impl GeneratedContentResponse {
    /// Parse and validate model output.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` when the text is not JSON of the expected
    /// shape, or when [`validate`](Self::validate) rejects it.
    pub fn from_json(text: &str) -> GeminiResult<Self> {
        let parsed: Self = serde_json::from_str(text).map_err(|e| {
            GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
                "Failed to parse generated content: {}",
                e
            )))
        })?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check that every platform appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` naming the duplicated or missing platform.
    pub fn validate(&self) -> GeminiResult<()> {
        let mut seen = HashSet::with_capacity(Platform::COUNT);
        for post in &self.posts {
            if !seen.insert(post.platform) {
                return Err(GeminiError::new(GeminiErrorKind::MalformedResponse(
                    format!("Duplicate post for platform {}", post.platform),
                )));
            }
        }

        if let Some(missing) = Platform::iter().find(|p| !seen.contains(p)) {
            return Err(GeminiError::new(GeminiErrorKind::MalformedResponse(
                format!("No post generated for platform {}", missing),
            )));
        }

        Ok(())
    }

    /// Find the post for a platform.
    pub fn post_for(&self, platform: Platform) -> Option<&SocialPost> {
        self.posts.iter().find(|post| post.platform == platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> serde_json::Value {
        let posts: Vec<_> = Platform::iter()
            .map(|p| {
                json!({
                    "platform": p.to_string(),
                    "content": format!("{} post", p),
                    "rationale": "fits the audience",
                    "imagePromptSuggestion": "a bright storefront"
                })
            })
            .collect();
        json!({ "posts": posts, "baseCreativeBrief": "warm pastel tones" })
    }

    #[test]
    fn parses_complete_response() -> anyhow::Result<()> {
        let parsed = GeneratedContentResponse::from_json(&full_payload().to_string())?;
        assert_eq!(parsed.posts.len(), Platform::COUNT);
        assert_eq!(parsed.base_creative_brief, "warm pastel tones");
        assert_eq!(
            parsed
                .post_for(Platform::LinkedIn)
                .map(|post| post.content.as_str()),
            Some("LinkedIn post")
        );
        Ok(())
    }

    #[test]
    fn missing_posts_is_malformed() {
        let err = GeneratedContentResponse::from_json(r#"{"baseCreativeBrief":"x"}"#).unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::MalformedResponse(_)));
    }

    #[test]
    fn missing_brief_is_malformed() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("baseCreativeBrief");
        let err = GeneratedContentResponse::from_json(&payload.to_string()).unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::MalformedResponse(_)));
    }

    #[test]
    fn duplicate_platform_is_malformed() {
        let mut payload = full_payload();
        payload["posts"][1]["platform"] = json!("Facebook");
        let err = GeneratedContentResponse::from_json(&payload.to_string()).unwrap_err();
        assert!(err.to_string().contains("Duplicate post for platform Facebook"));
    }

    #[test]
    fn missing_platform_is_malformed() {
        let mut payload = full_payload();
        payload["posts"].as_array_mut().unwrap().pop();
        let err = GeneratedContentResponse::from_json(&payload.to_string()).unwrap_err();
        assert!(err.to_string().contains("Google Business Profile"));
    }

    #[test]
    fn unknown_platform_is_malformed() {
        let mut payload = full_payload();
        payload["posts"][0]["platform"] = json!("Myspace");
        let err = GeneratedContentResponse::from_json(&payload.to_string()).unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::MalformedResponse(_)));
    }

    #[test]
    fn not_json_is_malformed() {
        let err = GeneratedContentResponse::from_json("Sure! Here are your posts:").unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::MalformedResponse(_)));
    }
}
