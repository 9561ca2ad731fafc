//! Trait definitions for NanoSocial generators.
//!
//! The application controller depends only on these traits, so the hosted
//! model client can be swapped for a mock in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentGenerator, ImageGenerator};
