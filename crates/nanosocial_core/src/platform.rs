//! Target social media platforms.

use serde::{Deserialize, Serialize};

/// A social media destination for a generated post.
///
/// The set is closed. The serialized form is the platform's display name,
/// which is also the value the text model is constrained to emit.
///
/// # Examples
///
/// ```
/// use nanosocial_core::Platform;
/// use strum::{EnumCount, IntoEnumIterator};
///
/// assert_eq!(Platform::COUNT, 6);
/// assert_eq!(Platform::GoogleBusinessProfile.to_string(), "Google Business Profile");
/// assert_eq!(Platform::iter().next(), Some(Platform::Facebook));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Platform {
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
    /// LinkedIn
    LinkedIn,
    /// Twitter / X
    Twitter,
    /// WhatsApp
    WhatsApp,
    /// Google Business Profile
    #[serde(rename = "Google Business Profile")]
    #[strum(serialize = "Google Business Profile")]
    GoogleBusinessProfile,
}

impl Platform {
    /// Tone and format guidance for posts on this platform.
    pub fn style_guide(&self) -> &'static str {
        match self {
            Platform::Facebook => "friendly, slightly longer, storytelling or informative",
            Platform::Instagram => "caption with hooks, hashtags, emoji, visual-first",
            Platform::LinkedIn => "professional tone, value-driven, leadership voice",
            Platform::Twitter => {
                "concise, bold, trending, optionally with hashtags or emoji"
            }
            Platform::WhatsApp => "professional tone, emoji, value-driven, concise",
            Platform::GoogleBusinessProfile => {
                "professional, informative, update or event focus, clear Call to Action (CTA)"
            }
        }
    }

    /// Label used when naming the platform in a prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter/X",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::WhatsApp => "WhatsApp",
            Platform::GoogleBusinessProfile => "Google Business Profile",
        }
    }
}
