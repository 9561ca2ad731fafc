//! Terminal rendering for campaigns.

use crossterm::style::{Color, Stylize};
use nanosocial::{GeneratedContentResponse, Platform, SavedCampaign, SocialPost};

/// Accent colour for each platform's heading.
pub fn platform_color(platform: Platform) -> Color {
    match platform {
        Platform::Facebook => Color::Blue,
        Platform::Instagram => Color::Magenta,
        Platform::LinkedIn => Color::DarkBlue,
        Platform::Twitter => Color::Cyan,
        Platform::WhatsApp => Color::Green,
        Platform::GoogleBusinessProfile => Color::Red,
    }
}

/// Print the creative brief followed by one card per post.
pub fn print_campaign(topic: &str, language: &str, content: &GeneratedContentResponse) {
    println!("{} {}", "Topic:".bold(), topic);
    println!("{} {}", "Language:".bold(), language);
    println!();
    println!("{}", "Creative brief".bold().underlined());
    println!("{}", content.base_creative_brief);

    for post in &content.posts {
        println!();
        print_post(post);
    }
}

/// Print one post card.
pub fn print_post(post: &SocialPost) {
    println!("{:-<80}", "");
    println!(
        "{}",
        post.platform
            .prompt_label()
            .with(platform_color(post.platform))
            .bold()
    );
    println!();
    println!("{}", post.content);
    println!();
    println!("{} {}", "Strategy:".bold(), post.rationale.as_str().italic());
    println!("{} {}", "Image prompt:".dim(), post.image_prompt_suggestion);
}

/// One line per saved campaign: id, date, language, topic.
pub fn print_saved_list(campaigns: &[SavedCampaign]) {
    if campaigns.is_empty() {
        println!("No saved campaigns yet.");
        return;
    }

    for campaign in campaigns {
        let date = campaign
            .created_at()
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown date".to_string());
        println!(
            "{}  {}  {:<8}  {}",
            campaign.id().as_str().dim(),
            date,
            campaign.language(),
            campaign.topic().as_str().bold()
        );
    }
    println!("Total: {} campaigns", campaigns.len());
}
