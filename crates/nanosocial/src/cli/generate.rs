//! Generate command handler.

use super::commands::OutputFormat;
use super::image::write_image;
use super::render::print_campaign;
use nanosocial::{
    AppController, ContentGenerator, ControllerError, ControllerErrorKind, ImageGenerator,
    JsonError, KeyValueStore, NanoSocialResult, Platform,
};
use std::path::Path;

/// Options for a generate run.
#[derive(Debug)]
pub struct GenerateOptions<'a> {
    pub topic: &'a str,
    pub language: &'a str,
    pub save: bool,
    pub visualize: Option<Platform>,
    pub out: &'a Path,
    pub format: OutputFormat,
}

/// Generate posts for a topic, then optionally save and visualize.
pub async fn run_generate<C, I, S>(
    app: &mut AppController<C, I, S>,
    options: GenerateOptions<'_>,
) -> NanoSocialResult<()>
where
    C: ContentGenerator,
    I: ImageGenerator,
    S: KeyValueStore,
{
    if options.topic.trim().is_empty() {
        return Err(ControllerError::new(ControllerErrorKind::EmptyTopic).into());
    }

    app.set_topic(options.topic);
    app.set_language(options.language);
    app.submit_generation().await;

    if let Some(message) = app.error() {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
    let Some(content) = app.content().clone() else {
        eprintln!("Error: no content was generated");
        std::process::exit(1);
    };

    match options.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&content)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_campaign(app.topic(), app.language(), &content),
    }

    if options.save {
        let campaign = app.save_campaign().await?;
        eprintln!("Saved campaign {}", campaign.id());
    }

    if let Some(platform) = options.visualize {
        let Some(post) = content.post_for(platform) else {
            eprintln!("Error: no post for {}", platform);
            std::process::exit(1);
        };

        app.open_image_editor(&post.image_prompt_suggestion).await;
        if let Some(message) = &app.image_state().error {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        let path = write_image(app.image_state(), options.out).await?;
        eprintln!("Wrote {} image to {}", platform, path.display());
        app.close_image_editor();
    }

    Ok(())
}
