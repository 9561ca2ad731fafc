//! Command-line interface module.

mod commands;
mod generate;
mod image;
mod render;
mod saved;

pub use commands::{Cli, Commands};
pub use generate::{GenerateOptions, run_generate};
pub use image::run_image;
pub use saved::handle_saved_command;
