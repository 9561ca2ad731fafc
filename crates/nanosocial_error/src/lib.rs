//! Error types for NanoSocial.
//!
//! This crate provides the error types shared by every NanoSocial crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use nanosocial_error::{GeminiError, GeminiErrorKind, NanoSocialResult};
//!
//! fn call_model() -> NanoSocialResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::NoImageProduced))?
//! }
//!
//! match call_model() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod controller;
mod error;
mod gemini;
mod json;
mod storage;

pub use config::ConfigError;
pub use controller::{ControllerError, ControllerErrorKind};
pub use error::{NanoSocialError, NanoSocialErrorKind, NanoSocialResult};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
