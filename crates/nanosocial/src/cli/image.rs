//! Image command handler.

use nanosocial::{
    AppController, ContentGenerator, GeminiError, GeminiErrorKind, ImageGenerator, ImageState,
    KeyValueStore, NanoSocialResult, StorageError, StorageErrorKind,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Generate an image for `prompt`, apply each edit in order, and write the
/// result to `out`.
///
/// A failed edit stops the chain; the last good image is still written.
pub async fn run_image<C, I, S>(
    app: &mut AppController<C, I, S>,
    prompt: &str,
    edits: &[String],
    out: &Path,
) -> NanoSocialResult<()>
where
    C: ContentGenerator,
    I: ImageGenerator,
    S: KeyValueStore,
{
    app.open_image_editor(prompt).await;

    for instruction in edits {
        if app.image_state().error.is_some() {
            break;
        }
        app.submit_image_edit(instruction).await;
    }

    let failure = match outcome(app.image_state()) {
        ImageOutcome::Fail(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        ImageOutcome::WriteThenFail(message) => Some(message.to_string()),
        ImageOutcome::Write => None,
    };

    let path = write_image(app.image_state(), out).await?;
    println!(
        "Wrote {} ({} image(s) in history)",
        path.display(),
        app.image_state().history.len()
    );
    app.close_image_editor();

    match failure {
        Some(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        None => Ok(()),
    }
}

/// What the command does once the edit chain has stopped.
#[derive(Debug, PartialEq, Eq)]
enum ImageOutcome<'a> {
    /// Every call succeeded
    Write,
    /// An edit failed; the last good image is still written
    WriteThenFail(&'a str),
    /// Nothing to write
    Fail(&'a str),
}

fn outcome(state: &ImageState) -> ImageOutcome<'_> {
    match (&state.error, state.has_image()) {
        (None, true) => ImageOutcome::Write,
        (Some(message), true) => ImageOutcome::WriteThenFail(message),
        (Some(message), false) => ImageOutcome::Fail(message),
        (None, false) => ImageOutcome::Fail("No image generated."),
    }
}

/// Write the current image to `out`, adding the extension for its MIME type
/// when `out` has none. Returns the path written.
pub async fn write_image(state: &ImageState, out: &Path) -> NanoSocialResult<PathBuf> {
    let image = state
        .data
        .as_ref()
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageProduced))?;
    let bytes = image.decode_bytes()?;

    let path = if out.extension().is_some() {
        out.to_path_buf()
    } else {
        out.with_extension(image.file_extension())
    };

    tokio::fs::write(&path, &bytes).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    info!(path = %path.display(), size = bytes.len(), "Wrote image");
    Ok(path)
}
