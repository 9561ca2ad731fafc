//! NanoSocial - platform-specific social media posts and visuals from one topic.
//!
//! A topic goes in; six posts come out, one each for Facebook, Instagram,
//! LinkedIn, Twitter/X, WhatsApp and Google Business Profile, together with a
//! creative brief and an image prompt per post. Images can be generated from
//! those prompts and refined with follow-up edit instructions. Campaigns can
//! be saved, listed, reopened and deleted.
//!
//! # Architecture
//!
//! - `nanosocial_error` - Error types
//! - `nanosocial_core` - Data model (posts, campaigns, image state)
//! - `nanosocial_interface` - Generator traits
//! - `nanosocial_models` - Gemini client
//! - `nanosocial_storage` - Key-value stores and the campaign store
//!
//! This crate adds the [`AppController`], configuration loading and logging
//! setup, and re-exports the pieces a caller needs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod controller;
mod observability;

pub use config::{GeminiConfig, NanoSocialConfig, StorageConfig};
pub use controller::{AppController, GenerationRequest, ImageRequest};
pub use observability::{ObservabilityConfig, init_observability};

pub use nanosocial_core::{
    DEFAULT_LANGUAGE, GeneratedContentResponse, ImageDataUri, ImageState, Platform,
    SUPPORTED_LANGUAGES, SavedCampaign, SocialPost,
};
pub use nanosocial_error::{
    ConfigError, ControllerError, ControllerErrorKind, GeminiError, GeminiErrorKind,
    GeminiResult, JsonError, NanoSocialError, NanoSocialErrorKind, NanoSocialResult,
    StorageError, StorageErrorKind,
};
pub use nanosocial_interface::{ContentGenerator, ImageGenerator};
pub use nanosocial_models::{GeminiClient, GeminiSettings};
pub use nanosocial_storage::{
    CampaignStore, FileSystemKeyValueStore, KeyValueStore, MemoryKeyValueStore,
};
