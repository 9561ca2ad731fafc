//! NanoSocial CLI binary.
//!
//! - Generate posts for every platform from one topic
//! - Generate and edit images from post prompts
//! - List, show and delete saved campaigns

use clap::Parser;
use nanosocial::{
    AppController, CampaignStore, FileSystemKeyValueStore, GeminiClient, NanoSocialConfig,
    ObservabilityConfig, init_observability,
};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateOptions, handle_saved_command, run_generate, run_image};

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability(observability)?;

    let config = NanoSocialConfig::load(cli.config.as_deref())?;
    let client = GeminiClient::new(config.gemini_settings()?);
    let store = CampaignStore::new(FileSystemKeyValueStore::new(config.storage_path())?);

    let mut app = AppController::new(client.clone(), client, store);
    app.init().await;

    match cli.command {
        Commands::Generate {
            topic,
            language,
            save,
            visualize,
            out,
            format,
        } => {
            run_generate(
                &mut app,
                GenerateOptions {
                    topic: &topic,
                    language: &language,
                    save,
                    visualize,
                    out: &out,
                    format,
                },
            )
            .await?;
        }

        Commands::Image { prompt, edit, out } => {
            run_image(&mut app, &prompt, &edit, &out).await?;
        }

        Commands::Saved(saved_cmd) => {
            handle_saved_command(&mut app, saved_cmd).await?;
        }
    }

    Ok(())
}
