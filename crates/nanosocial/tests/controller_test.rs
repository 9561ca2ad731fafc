//! Tests for the application controller against mock generators.

mod test_utils;

use nanosocial::{
    AppController, CampaignStore, ControllerErrorKind, GeminiErrorKind, KeyValueStore,
    MemoryKeyValueStore, NanoSocialErrorKind, Platform,
};
use nanosocial_storage::CAMPAIGNS_KEY;
use strum::{EnumCount, IntoEnumIterator};
use test_utils::{
    ImageCall, MockContentGenerator, MockImageGenerator, MockResponse, sample_content,
    sample_image,
};

type TestController = AppController<MockContentGenerator, MockImageGenerator, MemoryKeyValueStore>;

fn controller(
    content: MockContentGenerator,
    images: MockImageGenerator,
) -> (TestController, MemoryKeyValueStore) {
    let backend = MemoryKeyValueStore::new();
    let app = AppController::new(content, images, CampaignStore::new(backend.clone()));
    (app, backend)
}

fn default_controller() -> (TestController, MockContentGenerator, MockImageGenerator) {
    let content = MockContentGenerator::new_success(sample_content("bakery"));
    let images = MockImageGenerator::new_images(vec![sample_image("first")]);
    let (app, _) = controller(content.clone(), images.clone());
    (app, content, images)
}

//
// ─── TEXT GENERATION ────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_generation_yields_one_post_per_platform() {
    let (mut app, content, _) = default_controller();
    app.set_topic("New vegan bakery in town");
    app.set_language("Hinglish");

    assert!(app.submit_generation().await);

    let generated = app.content().as_ref().expect("content after success");
    assert_eq!(generated.posts.len(), Platform::COUNT);
    for platform in Platform::iter() {
        assert!(generated.post_for(platform).is_some(), "missing {}", platform);
    }
    assert!(!app.is_generating());
    assert!(app.error().is_none());
    assert_eq!(
        content.calls(),
        vec![(
            "New vegan bakery in town".to_string(),
            "Hinglish".to_string()
        )]
    );
}

#[tokio::test]
async fn test_blank_topic_is_ignored() {
    let (mut app, content, _) = default_controller();
    app.set_topic("   \n");

    assert!(!app.submit_generation().await);
    assert_eq!(content.call_count(), 0);
    assert!(!app.is_generating());
    assert!(app.content().is_none());
}

#[tokio::test]
async fn test_topic_is_trimmed_before_sending() {
    let (mut app, content, _) = default_controller();
    app.set_topic("  summer sale  ");

    app.submit_generation().await;

    assert_eq!(content.calls()[0].0, "summer sale");
}

#[tokio::test]
async fn test_submit_while_generating_is_ignored() {
    let (mut app, content, _) = default_controller();
    app.set_topic("bakery");

    let first = app.begin_generation();
    assert!(first.is_some());
    assert!(app.is_generating());

    assert!(app.begin_generation().is_none());
    assert!(!app.submit_generation().await);
    assert_eq!(content.call_count(), 0);

    app.finish_generation(Ok(sample_content("bakery")));
    assert!(!app.is_generating());
    assert!(app.content().is_some());
}

#[tokio::test]
async fn test_generation_failure_sets_error_and_clears_content() {
    let content = MockContentGenerator::new(vec![
        MockResponse::Success(sample_content("bakery")),
        MockResponse::Error(GeminiErrorKind::Upstream("quota exceeded".to_string())),
    ]);
    let (mut app, _) = controller(content, MockImageGenerator::new_images(vec![]));
    app.set_topic("bakery");

    app.submit_generation().await;
    assert!(app.content().is_some());

    app.submit_generation().await;
    assert!(app.content().is_none());
    assert_eq!(app.error().as_deref(), Some("quota exceeded"));
    assert!(!app.is_generating());
}

#[tokio::test]
async fn test_new_generation_clears_previous_error() {
    let content = MockContentGenerator::new(vec![
        MockResponse::Error(GeminiErrorKind::Configuration(
            "API Key is missing. Set GEMINI_API_KEY.".to_string(),
        )),
        MockResponse::Success(sample_content("bakery")),
    ]);
    let (mut app, _) = controller(content, MockImageGenerator::new_images(vec![]));
    app.set_topic("bakery");

    app.submit_generation().await;
    assert_eq!(
        app.error().as_deref(),
        Some("API Key is missing. Set GEMINI_API_KEY.")
    );

    app.begin_generation();
    assert!(app.error().is_none());
}

#[tokio::test]
async fn test_reset_clears_content_and_topic() {
    let (mut app, _, _) = default_controller();
    app.set_topic("bakery");
    app.submit_generation().await;

    app.reset();

    assert!(app.content().is_none());
    assert!(app.topic().is_empty());
}

//
// ─── IMAGE EDITOR ───────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_open_editor_generates_fresh_image() {
    let (mut app, _, images) = default_controller();

    app.open_image_editor("croissant on marble").await;

    assert!(app.is_image_editor_open());
    let state = app.image_state();
    assert!(!state.is_loading);
    assert_eq!(state.data, Some(sample_image("first")));
    assert_eq!(state.history, vec![sample_image("first")]);
    assert_eq!(
        images.calls(),
        vec![ImageCall::Generate {
            prompt: "croissant on marble".to_string()
        }]
    );
}

#[tokio::test]
async fn test_edit_without_image_behaves_like_generate() {
    let (mut app, _, images) = default_controller();

    assert!(app.submit_image_edit("make it blue").await);

    assert_eq!(
        images.calls(),
        vec![ImageCall::Generate {
            prompt: "make it blue".to_string()
        }]
    );
    assert!(app.is_image_editor_open());
    assert_eq!(app.image_state().history.len(), 1);
}

#[tokio::test]
async fn test_edits_chain_and_append_history() {
    let content = MockContentGenerator::new_success(sample_content("bakery"));
    let images = MockImageGenerator::new_images(vec![
        sample_image("first"),
        sample_image("second"),
        sample_image("third"),
    ]);
    let (mut app, _) = controller(content, images.clone());

    app.open_image_editor("a cat").await;
    app.submit_image_edit("make it blue").await;
    app.submit_image_edit("add a hat").await;

    let state = app.image_state();
    assert_eq!(state.data, Some(sample_image("third")));
    assert_eq!(
        state.history,
        vec![sample_image("first"), sample_image("second"), sample_image("third")]
    );

    let calls = images.calls();
    assert_eq!(
        calls[1],
        ImageCall::Edit {
            current: sample_image("first").to_string(),
            prompt: "make it blue".to_string(),
        }
    );
    assert_eq!(
        calls[2],
        ImageCall::Edit {
            current: sample_image("second").to_string(),
            prompt: "add a hat".to_string(),
        }
    );
}

#[tokio::test]
async fn test_failed_edit_keeps_current_image() {
    let images = MockImageGenerator::new(vec![
        MockResponse::Success(sample_image("first")),
        MockResponse::Error(GeminiErrorKind::NoImageProduced),
    ]);
    let (mut app, _) = controller(
        MockContentGenerator::new_success(sample_content("bakery")),
        images,
    );

    app.open_image_editor("a cat").await;
    app.submit_image_edit("make it blue").await;

    let state = app.image_state();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("No image generated."));
    assert_eq!(state.data, Some(sample_image("first")));
    assert_eq!(state.history.len(), 1);
}

#[tokio::test]
async fn test_edit_while_loading_is_ignored() {
    let (mut app, _, images) = default_controller();

    app.begin_open_image_editor("a cat");
    assert!(app.image_state().is_loading);

    assert!(app.begin_image_edit("make it blue").is_none());
    assert!(!app.submit_image_edit("make it blue").await);
    assert_eq!(images.call_count(), 0);
}

#[tokio::test]
async fn test_reopening_editor_resets_history() {
    let images = MockImageGenerator::new_images(vec![
        sample_image("first"),
        sample_image("second"),
        sample_image("third"),
    ]);
    let (mut app, _) = controller(
        MockContentGenerator::new_success(sample_content("bakery")),
        images,
    );

    app.open_image_editor("a cat").await;
    app.submit_image_edit("make it blue").await;
    app.close_image_editor();
    assert!(!app.is_image_editor_open());
    assert_eq!(app.image_state().history.len(), 2);

    app.open_image_editor("a dog").await;

    assert_eq!(app.image_state().history, vec![sample_image("third")]);
}

//
// ─── SAVED CAMPAIGNS ────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_save_requires_content() {
    let (mut app, _, _) = default_controller();
    app.set_topic("bakery");

    let err = app.save_campaign().await.expect_err("nothing generated yet");
    assert!(matches!(
        err.kind(),
        NanoSocialErrorKind::Controller(e) if e.kind == ControllerErrorKind::NothingToSave
    ));
    assert!(app.saved_campaigns().is_empty());
}

#[tokio::test]
async fn test_save_prepends_and_persists() -> anyhow::Result<()> {
    let (mut app, backend) = controller(
        MockContentGenerator::new_success(sample_content("bakery")),
        MockImageGenerator::new_images(vec![]),
    );
    app.init().await;
    app.set_topic("bakery");
    app.set_language("Hindi");
    app.submit_generation().await;

    let first = app.save_campaign_at(1_700_000_000_000).await?;
    let second = app.save_campaign_at(1_700_000_100_000).await?;

    assert_eq!(first.id(), "1700000000000");
    assert_eq!(first.topic(), "bakery");
    assert_eq!(first.language(), "Hindi");

    let ids: Vec<&str> = app.saved_campaigns().iter().map(|c| c.id().as_str()).collect();
    assert_eq!(ids, vec![second.id().as_str(), first.id().as_str()]);

    let persisted = CampaignStore::new(backend).load_all().await;
    assert_eq!(persisted, *app.saved_campaigns());
    Ok(())
}

#[tokio::test]
async fn test_save_in_same_millisecond_gets_distinct_ids() -> anyhow::Result<()> {
    let (mut app, _, _) = default_controller();
    app.set_topic("bakery");
    app.submit_generation().await;

    let first = app.save_campaign_at(42).await?;
    let second = app.save_campaign_at(42).await?;

    assert_ne!(first.id(), second.id());
    Ok(())
}

#[tokio::test]
async fn test_saved_snapshot_is_independent_of_later_generation() -> anyhow::Result<()> {
    let content = MockContentGenerator::new(vec![
        MockResponse::Success(sample_content("bakery")),
        MockResponse::Success(sample_content("florist")),
    ]);
    let (mut app, _) = controller(content, MockImageGenerator::new_images(vec![]));
    app.set_topic("bakery");
    app.submit_generation().await;
    let saved = app.save_campaign_at(1).await?;

    app.set_topic("florist");
    app.submit_generation().await;

    assert_eq!(*saved.data(), sample_content("bakery"));
    assert_eq!(*app.saved_campaigns()[0].data(), sample_content("bakery"));
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_only_matching_campaign() -> anyhow::Result<()> {
    let (mut app, backend) = controller(
        MockContentGenerator::new_success(sample_content("bakery")),
        MockImageGenerator::new_images(vec![]),
    );
    app.set_topic("bakery");
    app.submit_generation().await;
    let a = app.save_campaign_at(1).await?;
    let b = app.save_campaign_at(2).await?;
    let c = app.save_campaign_at(3).await?;

    assert!(app.delete_campaign(b.id()).await?);

    let ids: Vec<&str> = app.saved_campaigns().iter().map(|c| c.id().as_str()).collect();
    assert_eq!(ids, vec![c.id().as_str(), a.id().as_str()]);

    let persisted = CampaignStore::new(backend).load_all().await;
    assert_eq!(persisted.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_save_two_then_delete_first_leaves_second() -> anyhow::Result<()> {
    let (mut app, _, _) = default_controller();
    app.set_topic("bakery");
    app.submit_generation().await;
    let first = app.save_campaign_at(10).await?;
    let second = app.save_campaign_at(20).await?;

    app.delete_campaign(first.id()).await?;

    assert_eq!(app.saved_campaigns().len(), 1);
    assert_eq!(app.saved_campaigns()[0].id(), second.id());
    Ok(())
}

#[tokio::test]
async fn test_delete_unknown_id_reports_nothing_removed() -> anyhow::Result<()> {
    let (mut app, _, _) = default_controller();
    app.set_topic("bakery");
    app.submit_generation().await;
    app.save_campaign_at(1).await?;

    assert!(!app.delete_campaign("missing").await?);
    assert_eq!(app.saved_campaigns().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_load_campaign_restores_state() -> anyhow::Result<()> {
    let (mut app, _, _) = default_controller();
    app.set_topic("bakery");
    app.set_language("Hinglish");
    app.submit_generation().await;
    let saved = app.save_campaign_at(1).await?;

    app.reset();
    app.set_language("English");
    app.open_saved_list();
    app.load_campaign(saved.id())?;

    assert_eq!(app.topic(), "bakery");
    assert_eq!(app.language(), "Hinglish");
    assert_eq!(app.content().as_ref(), Some(saved.data()));
    assert!(app.error().is_none());
    assert!(!app.is_saved_list_open());
    Ok(())
}

#[tokio::test]
async fn test_load_unknown_campaign_fails() {
    let (mut app, _, _) = default_controller();

    let err = app.load_campaign("nope").expect_err("no such campaign");
    assert!(matches!(
        err.kind(),
        NanoSocialErrorKind::Controller(e)
            if e.kind == ControllerErrorKind::CampaignNotFound("nope".to_string())
    ));
}

#[tokio::test]
async fn test_init_loads_existing_campaigns() -> anyhow::Result<()> {
    let backend = MemoryKeyValueStore::new();
    let mut writer = AppController::new(
        MockContentGenerator::new_success(sample_content("bakery")),
        MockImageGenerator::new_images(vec![]),
        CampaignStore::new(backend.clone()),
    );
    writer.set_topic("bakery");
    writer.submit_generation().await;
    writer.save_campaign_at(5).await?;

    let mut reader = AppController::new(
        MockContentGenerator::new_success(sample_content("bakery")),
        MockImageGenerator::new_images(vec![]),
        CampaignStore::new(backend),
    );
    reader.init().await;

    assert_eq!(reader.saved_campaigns().len(), 1);
    assert_eq!(reader.saved_campaigns()[0].id(), "5");
    Ok(())
}

#[tokio::test]
async fn test_corrupt_store_initializes_empty() -> anyhow::Result<()> {
    let backend = MemoryKeyValueStore::new();
    backend.set(CAMPAIGNS_KEY, "{ this is not json").await?;

    let mut app = AppController::new(
        MockContentGenerator::new_success(sample_content("bakery")),
        MockImageGenerator::new_images(vec![]),
        CampaignStore::new(backend),
    );
    app.init().await;

    assert!(app.saved_campaigns().is_empty());
    Ok(())
}
