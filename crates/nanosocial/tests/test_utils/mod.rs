//! Shared test fixtures for controller tests.

#![allow(dead_code)]

mod mock_generators;

pub use mock_generators::{ImageCall, MockContentGenerator, MockImageGenerator, MockResponse};

use nanosocial::{GeneratedContentResponse, ImageDataUri, Platform, SocialPost};
use strum::IntoEnumIterator;

/// One post per platform for `topic`.
pub fn sample_content(topic: &str) -> GeneratedContentResponse {
    GeneratedContentResponse {
        posts: Platform::iter()
            .map(|platform| SocialPost {
                platform,
                content: format!("{} for {}", topic, platform),
                rationale: format!("{} readers like this", platform),
                image_prompt_suggestion: format!("{} photo, {}", topic, platform),
            })
            .collect(),
        base_creative_brief: format!("Bright, friendly visuals about {}", topic),
    }
}

/// A small distinct PNG data URI per tag.
pub fn sample_image(tag: &str) -> ImageDataUri {
    ImageDataUri::from_bytes("image/png", tag.as_bytes()).expect("valid test image")
}
