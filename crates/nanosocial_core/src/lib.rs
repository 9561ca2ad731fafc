//! Core data types for NanoSocial.
//!
//! This crate provides the data model shared by the generation clients, the
//! campaign store and the application controller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod campaign;
mod content;
mod data_uri;
mod image_state;
mod language;
mod platform;

pub use campaign::SavedCampaign;
pub use content::{GeneratedContentResponse, SocialPost};
pub use data_uri::ImageDataUri;
pub use image_state::ImageState;
pub use language::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use platform::Platform;
