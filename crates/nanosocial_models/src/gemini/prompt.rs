//! Prompt and response schema for post generation.

use nanosocial_core::Platform;
use serde_json::{Value, json};
use strum::{EnumCount, IntoEnumIterator};

/// Build the instruction sent to the text model.
pub fn content_prompt(topic: &str, language: &str) -> String {
    let platforms: String = Platform::iter()
        .enumerate()
        .map(|(i, platform)| {
            format!(
                "    {}. {}: {}.\n",
                i + 1,
                platform.prompt_label(),
                platform.style_guide()
            )
        })
        .collect();

    format!(
        r#"You are a world-class social media marketing expert.
Topic: "{topic}".
Target Language: "{language}".

Generate {count} platform-specific posts in {language}:
{platforms}
Also provide a specific visual art prompt suggestion for each that matches the post's specific tone,
and one overarching creative brief for the campaign visuals.

Important:
- The "content" of the posts MUST be in {language}.
- The "rationale" can be in English or {language} (whichever is more professional).
- The "imagePromptSuggestion" should remain in English for better image generation compatibility.
"#,
        count = Platform::COUNT,
    )
}

/// Schema constraining the text model's JSON output.
pub fn content_response_schema() -> Value {
    let platforms: Vec<String> = Platform::iter().map(|p| p.to_string()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "baseCreativeBrief": {
                "type": "STRING",
                "description": "A general creative brief for the campaign visuals."
            },
            "posts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "platform": { "type": "STRING", "enum": platforms },
                        "content": {
                            "type": "STRING",
                            "description": "The actual post text."
                        },
                        "rationale": {
                            "type": "STRING",
                            "description": "Why this tone/format fits the platform."
                        },
                        "imagePromptSuggestion": {
                            "type": "STRING",
                            "description": "A specific prompt to generate an image for this post."
                        }
                    },
                    "required": ["platform", "content", "rationale", "imagePromptSuggestion"]
                }
            }
        },
        "required": ["posts", "baseCreativeBrief"]
    })
}
