//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum, builder::PossibleValuesParser};
use nanosocial::{DEFAULT_LANGUAGE, Platform, SUPPORTED_LANGUAGES};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Download name used for generated images
pub const DEFAULT_IMAGE_PATH: &str = "nano-social-image.png";

/// NanoSocial - platform-specific social media posts and visuals with Gemini
#[derive(Parser, Debug)]
#[command(name = "nanosocial")]
#[command(
    about = "Generate platform-specific social media posts and visuals with Gemini",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, applied over all other sources
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a post for every platform from one topic
    Generate {
        /// What the campaign is about
        topic: String,

        /// Language to write the posts in
        #[arg(
            long,
            default_value = DEFAULT_LANGUAGE,
            value_parser = PossibleValuesParser::new(SUPPORTED_LANGUAGES)
        )]
        language: String,

        /// Save the generated campaign
        #[arg(long)]
        save: bool,

        /// Generate the image suggested for this platform's post
        #[arg(long, value_parser = parse_platform)]
        visualize: Option<Platform>,

        /// Where to write the image produced by --visualize
        #[arg(long, default_value = DEFAULT_IMAGE_PATH)]
        out: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate an image, then apply edit instructions in order
    Image {
        /// Prompt for the first image
        prompt: String,

        /// Edit instruction applied to the current image (repeatable)
        #[arg(long)]
        edit: Vec<String>,

        /// Where to write the final image
        #[arg(long, default_value = DEFAULT_IMAGE_PATH)]
        out: PathBuf,
    },

    /// Saved campaign commands
    #[command(subcommand)]
    Saved(SavedCommands),
}

/// Saved campaign subcommands
#[derive(Subcommand, Debug)]
pub enum SavedCommands {
    /// List saved campaigns, most recent first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show the posts of a saved campaign
    Show {
        /// Campaign id
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Delete a saved campaign
    Delete {
        /// Campaign id
        id: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Accepts platform names in any case, with or without separators, plus "x".
fn parse_platform(value: &str) -> Result<Platform, String> {
    let wanted = normalize(value);
    if wanted == "x" {
        return Ok(Platform::Twitter);
    }
    Platform::iter()
        .find(|platform| normalize(platform.as_ref()) == wanted)
        .ok_or_else(|| {
            let names: Vec<String> = Platform::iter().map(|p| p.to_string()).collect();
            format!("unknown platform '{}', expected one of: {}", value, names.join(", "))
        })
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
