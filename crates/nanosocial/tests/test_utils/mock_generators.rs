//! Mock generators for testing.

use async_trait::async_trait;
use nanosocial::{
    ContentGenerator, GeminiError, GeminiErrorKind, GeminiResult, GeneratedContentResponse,
    ImageDataUri, ImageGenerator,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A single scripted response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    Success(T),
    Error(GeminiErrorKind),
}

impl<T: Clone> MockResponse<T> {
    fn to_result(&self) -> GeminiResult<T> {
        match self {
            MockResponse::Success(value) => Ok(value.clone()),
            MockResponse::Error(kind) => Err(GeminiError::new(kind.clone())),
        }
    }
}

/// Plays scripted responses in order, repeating the last one once exhausted.
#[derive(Debug)]
struct Script<T> {
    queue: VecDeque<MockResponse<T>>,
    last: Option<MockResponse<T>>,
}

impl<T: Clone> Script<T> {
    fn new(responses: Vec<MockResponse<T>>) -> Self {
        Self {
            queue: responses.into(),
            last: None,
        }
    }

    fn next(&mut self) -> GeminiResult<T> {
        if let Some(response) = self.queue.pop_front() {
            self.last = Some(response);
        }
        match &self.last {
            Some(response) => response.to_result(),
            None => Err(GeminiError::new(GeminiErrorKind::Upstream(
                "mock has no scripted response".to_string(),
            ))),
        }
    }
}

/// Mock text generator.
///
/// Clones share the script and the call log, so a test can keep one clone
/// after handing the other to the controller.
#[derive(Clone)]
pub struct MockContentGenerator {
    script: Arc<Mutex<Script<GeneratedContentResponse>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockContentGenerator {
    /// Play `responses` in order.
    pub fn new(responses: Vec<MockResponse<GeneratedContentResponse>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::new(responses))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always succeed with `content`.
    pub fn new_success(content: GeneratedContentResponse) -> Self {
        Self::new(vec![MockResponse::Success(content)])
    }

    /// Always fail with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new(vec![MockResponse::Error(error)])
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    /// `(topic, language)` of every call, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate_content(
        &self,
        topic: &str,
        language: &str,
    ) -> GeminiResult<GeneratedContentResponse> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push((topic.to_string(), language.to_string()));
        self.script.lock().expect("script poisoned").next()
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// One recorded image call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCall {
    Generate { prompt: String },
    Edit { current: String, prompt: String },
}

/// Mock image generator.
#[derive(Clone)]
pub struct MockImageGenerator {
    script: Arc<Mutex<Script<ImageDataUri>>>,
    calls: Arc<Mutex<Vec<ImageCall>>>,
}

impl MockImageGenerator {
    /// Play `responses` in order; generate and edit calls share the script.
    pub fn new(responses: Vec<MockResponse<ImageDataUri>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::new(responses))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Succeed with each image in turn.
    pub fn new_images(images: Vec<ImageDataUri>) -> Self {
        Self::new(images.into_iter().map(MockResponse::Success).collect())
    }

    /// Number of image calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    /// Every call, in order.
    pub fn calls(&self) -> Vec<ImageCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(&self, prompt: &str) -> GeminiResult<ImageDataUri> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(ImageCall::Generate {
                prompt: prompt.to_string(),
            });
        self.script.lock().expect("script poisoned").next()
    }

    async fn edit_image(&self, current: &str, prompt: &str) -> GeminiResult<ImageDataUri> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(ImageCall::Edit {
                current: current.to_string(),
                prompt: prompt.to_string(),
            });
        self.script.lock().expect("script poisoned").next()
    }

    fn image_model_name(&self) -> &str {
        "mock-image"
    }
}
