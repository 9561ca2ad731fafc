//! Saved campaign command handlers.

use super::commands::{OutputFormat, SavedCommands};
use super::render::{print_campaign, print_saved_list};
use nanosocial::{
    AppController, ContentGenerator, ControllerError, ControllerErrorKind, ImageGenerator,
    JsonError, KeyValueStore, NanoSocialResult,
};

/// Handle saved campaign commands.
pub async fn handle_saved_command<C, I, S>(
    app: &mut AppController<C, I, S>,
    cmd: SavedCommands,
) -> NanoSocialResult<()>
where
    C: ContentGenerator,
    I: ImageGenerator,
    S: KeyValueStore,
{
    match cmd {
        SavedCommands::List { format } => {
            app.open_saved_list();
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(app.saved_campaigns())
                        .map_err(|e| JsonError::new(e.to_string()))?;
                    println!("{}", json);
                }
                OutputFormat::Human => print_saved_list(app.saved_campaigns()),
            }
            app.close_saved_list();
        }

        SavedCommands::Show { id, format } => {
            app.load_campaign(&id)?;
            let Some(content) = app.content() else {
                return Ok(());
            };
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(content)
                        .map_err(|e| JsonError::new(e.to_string()))?;
                    println!("{}", json);
                }
                OutputFormat::Human => print_campaign(app.topic(), app.language(), content),
            }
        }

        SavedCommands::Delete { id } => {
            if !app.delete_campaign(&id).await? {
                return Err(ControllerError::new(ControllerErrorKind::CampaignNotFound(id)).into());
            }
            println!("Deleted campaign {}", id);
        }
    }

    Ok(())
}
