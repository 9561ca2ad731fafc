//! Application state controller.
//!
//! [`AppController`] owns all live state and wires user intents to the
//! generation clients and the campaign store. Each remote action is split
//! into a `begin_*` step that applies the guards and marks the call in
//! flight, and a `finish_*` step that applies the result; the `submit_*`
//! methods run both around the await.

use chrono::Utc;
use derive_getters::Getters;
use nanosocial_core::{
    DEFAULT_LANGUAGE, GeneratedContentResponse, ImageDataUri, ImageState, SavedCampaign,
};
use nanosocial_error::{ControllerError, ControllerErrorKind, GeminiResult, NanoSocialResult};
use nanosocial_interface::{ContentGenerator, ImageGenerator};
use nanosocial_storage::{CampaignStore, KeyValueStore};
use tracing::{debug, info, instrument, warn};

/// A text generation call that has passed its guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Trimmed topic
    pub topic: String,
    /// Target language
    pub language: String,
}

/// An image call that has passed its guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRequest {
    /// Fresh generation from a prompt
    Generate {
        /// Image prompt
        prompt: String,
    },
    /// Edit of the current image
    Edit {
        /// Image to edit
        current: ImageDataUri,
        /// Edit instruction
        prompt: String,
    },
}

/// Owns application state and orchestrates clients and persistence.
///
/// # Example
///
/// ```no_run
/// use nanosocial::AppController;
/// use nanosocial_models::GeminiClient;
/// use nanosocial_storage::{CampaignStore, MemoryKeyValueStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env();
/// let mut app = AppController::new(
///     client.clone(),
///     client,
///     CampaignStore::new(MemoryKeyValueStore::new()),
/// );
/// app.init().await;
/// app.set_topic("New vegan bakery");
/// app.submit_generation().await;
/// if app.content().is_some() {
///     app.save_campaign().await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Getters)]
pub struct AppController<C, I, S> {
    #[getter(skip)]
    content_client: C,
    #[getter(skip)]
    image_client: I,
    #[getter(skip)]
    store: CampaignStore<S>,

    /// Topic entered by the user
    topic: String,
    /// Selected language label
    language: String,
    #[getter(skip)]
    is_generating: bool,
    /// Posts from the last successful generation or loaded campaign
    content: Option<GeneratedContentResponse>,
    /// Message from the last failed generation
    error: Option<String>,

    /// Image editor state
    image_state: ImageState,
    #[getter(skip)]
    is_image_editor_open: bool,

    /// Saved campaigns, most recent first
    saved_campaigns: Vec<SavedCampaign>,
    #[getter(skip)]
    is_saved_list_open: bool,
}

impl<C, I, S> AppController<C, I, S>
where
    C: ContentGenerator,
    I: ImageGenerator,
    S: KeyValueStore,
{
    /// Create a controller with empty state.
    pub fn new(content_client: C, image_client: I, store: CampaignStore<S>) -> Self {
        Self {
            content_client,
            image_client,
            store,
            topic: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            is_generating: false,
            content: None,
            error: None,
            image_state: ImageState::default(),
            is_image_editor_open: false,
            saved_campaigns: Vec::new(),
            is_saved_list_open: false,
        }
    }

    /// Load saved campaigns from the store.
    #[instrument(skip(self))]
    pub async fn init(&mut self) {
        self.saved_campaigns = self.store.load_all().await;
        debug!(count = self.saved_campaigns.len(), "Initialized controller");
    }

    /// A text generation call is in flight.
    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// The image editor is showing.
    pub fn is_image_editor_open(&self) -> bool {
        self.is_image_editor_open
    }

    /// The saved campaign list is showing.
    pub fn is_saved_list_open(&self) -> bool {
        self.is_saved_list_open
    }

    /// The campaign store.
    pub fn store(&self) -> &CampaignStore<S> {
        &self.store
    }

    /// Update the topic input.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Update the language selection.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Clear generated content and the topic.
    pub fn reset(&mut self) {
        self.content = None;
        self.topic.clear();
    }

    //
    // ─── TEXT GENERATION ────────────────────────────────────────────────────────
    //

    /// Start a generation if the topic is non-blank and none is in flight.
    ///
    /// Clears previous content and error. Returns `None` when the submit is
    /// ignored.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        let topic = self.topic.trim();
        if topic.is_empty() || self.is_generating {
            debug!(
                blank_topic = topic.is_empty(),
                in_flight = self.is_generating,
                "Ignoring generation submit"
            );
            return None;
        }

        let request = GenerationRequest {
            topic: topic.to_string(),
            language: self.language.clone(),
        };
        self.is_generating = true;
        self.error = None;
        self.content = None;
        Some(request)
    }

    /// Apply the result of a generation call.
    pub fn finish_generation(&mut self, result: GeminiResult<GeneratedContentResponse>) {
        self.is_generating = false;
        match result {
            Ok(content) => {
                info!(posts = content.posts.len(), "Generated campaign content");
                self.content = Some(content);
            }
            Err(e) => {
                warn!(error = %e, upstream = e.kind.is_upstream(), "Content generation failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Generate posts for the current topic and language.
    ///
    /// Returns whether a call was issued.
    #[instrument(skip(self), fields(topic = %self.topic, language = %self.language))]
    pub async fn submit_generation(&mut self) -> bool {
        let Some(request) = self.begin_generation() else {
            return false;
        };
        let result = self
            .content_client
            .generate_content(&request.topic, &request.language)
            .await;
        self.finish_generation(result);
        true
    }

    //
    // ─── IMAGE EDITOR ───────────────────────────────────────────────────────────
    //

    /// Open the editor for a post: reset image state and start a fresh
    /// generation.
    pub fn begin_open_image_editor(&mut self, prompt: impl Into<String>) -> ImageRequest {
        self.is_image_editor_open = true;
        self.image_state.reset();
        self.image_state.begin_loading();
        ImageRequest::Generate {
            prompt: prompt.into(),
        }
    }

    /// Start an edit of the current image.
    ///
    /// With no current image this is the same as opening the editor with
    /// `prompt`. Returns `None` while another image call is in flight.
    pub fn begin_image_edit(&mut self, prompt: impl Into<String>) -> Option<ImageRequest> {
        if self.image_state.is_loading {
            debug!("Ignoring image edit while a call is in flight");
            return None;
        }

        let prompt = prompt.into();
        match self.image_state.data.clone() {
            Some(current) => {
                self.image_state.begin_loading();
                Some(ImageRequest::Edit { current, prompt })
            }
            None => Some(self.begin_open_image_editor(prompt)),
        }
    }

    /// Apply the result of an image call.
    pub fn finish_image_request(&mut self, result: GeminiResult<ImageDataUri>) {
        match result {
            Ok(image) => {
                self.image_state.succeed(image);
                debug!(history = self.image_state.history.len(), "Image updated");
            }
            Err(e) => {
                warn!(error = %e, "Image request failed");
                self.image_state.fail(e.to_string());
            }
        }
    }

    async fn run_image_request(&mut self, request: ImageRequest) {
        let result = match &request {
            ImageRequest::Generate { prompt } => self.image_client.generate_image(prompt).await,
            ImageRequest::Edit { current, prompt } => {
                self.image_client
                    .edit_image(current.as_str(), prompt)
                    .await
            }
        };
        self.finish_image_request(result);
    }

    /// Open the image editor and generate an image for `prompt`.
    #[instrument(skip(self, prompt))]
    pub async fn open_image_editor(&mut self, prompt: &str) {
        let request = self.begin_open_image_editor(prompt);
        self.run_image_request(request).await;
    }

    /// Edit the current image, or generate one if none exists yet.
    ///
    /// Returns whether a call was issued.
    #[instrument(skip(self, prompt))]
    pub async fn submit_image_edit(&mut self, prompt: &str) -> bool {
        let Some(request) = self.begin_image_edit(prompt) else {
            return false;
        };
        self.run_image_request(request).await;
        true
    }

    /// Hide the image editor. Its state is kept until it is next opened.
    pub fn close_image_editor(&mut self) {
        self.is_image_editor_open = false;
    }

    //
    // ─── SAVED CAMPAIGNS ────────────────────────────────────────────────────────
    //

    /// Save the current content as a new campaign stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `NothingToSave` without content or topic, or a storage error.
    pub async fn save_campaign(&mut self) -> NanoSocialResult<SavedCampaign> {
        self.save_campaign_at(Utc::now().timestamp_millis()).await
    }

    /// Save the current content as a new campaign created at `timestamp`
    /// (epoch milliseconds).
    ///
    /// The stored list is re-read, the campaign prepended, and the whole
    /// list written back.
    #[instrument(skip(self), fields(topic = %self.topic))]
    pub async fn save_campaign_at(&mut self, timestamp: i64) -> NanoSocialResult<SavedCampaign> {
        let content = match &self.content {
            Some(content) if !self.topic.trim().is_empty() => content.clone(),
            _ => return Err(ControllerError::new(ControllerErrorKind::NothingToSave).into()),
        };

        let mut campaigns = self.store.load_all().await;
        let campaign = SavedCampaign::new(
            next_campaign_id(&campaigns, timestamp),
            self.topic.clone(),
            self.language.clone(),
            timestamp,
            content,
        );
        campaigns.insert(0, campaign.clone());

        self.store.save_all(&campaigns).await?;
        self.saved_campaigns = campaigns;

        info!(id = %campaign.id(), "Saved campaign");
        Ok(campaign)
    }

    /// Delete a saved campaign by id, keeping the order of the rest.
    ///
    /// Returns whether a campaign was removed.
    #[instrument(skip(self))]
    pub async fn delete_campaign(&mut self, id: &str) -> NanoSocialResult<bool> {
        let mut campaigns = self.store.load_all().await;
        let before = campaigns.len();
        campaigns.retain(|campaign| campaign.id() != id);
        let removed = campaigns.len() != before;

        self.store.save_all(&campaigns).await?;
        self.saved_campaigns = campaigns;

        if removed {
            info!(id, "Deleted campaign");
        }
        Ok(removed)
    }

    /// Replace topic, language and content with a saved campaign's, and close
    /// the saved list.
    ///
    /// # Errors
    ///
    /// Returns `CampaignNotFound` if no saved campaign has `id`.
    #[instrument(skip(self))]
    pub fn load_campaign(&mut self, id: &str) -> NanoSocialResult<()> {
        let campaign = self
            .saved_campaigns
            .iter()
            .find(|campaign| campaign.id() == id)
            .ok_or_else(|| {
                ControllerError::new(ControllerErrorKind::CampaignNotFound(id.to_string()))
            })?;

        self.topic = campaign.topic().clone();
        self.language = campaign.language().clone();
        self.content = Some(campaign.data().clone());
        self.error = None;
        self.is_saved_list_open = false;
        Ok(())
    }

    /// Show the saved campaign list.
    pub fn open_saved_list(&mut self) {
        self.is_saved_list_open = true;
    }

    /// Hide the saved campaign list.
    pub fn close_saved_list(&mut self) {
        self.is_saved_list_open = false;
    }
}

/// Time-derived id, moved forward past any id already in use.
fn next_campaign_id(existing: &[SavedCampaign], timestamp: i64) -> String {
    let mut candidate = timestamp;
    while existing
        .iter()
        .any(|campaign| *campaign.id() == candidate.to_string())
    {
        candidate += 1;
    }
    candidate.to_string()
}
