//! CLI administration tool for linkbio.
//!
//! Edits the saved profile directly, without going through the HTTP API.
//! Run it while the server is stopped: the server keeps its own copy of the
//! profile in memory and overwrites the file on its next save.
//!
//! # Usage
//!
//! ```bash
//! # Show links in display order
//! cargo run --bin admin -- links list
//!
//! # Add a link (the URL is sanitized like in the dashboard)
//! cargo run --bin admin -- links add --title "Blog" --url example.com
//!
//! # Move a link to the top
//! cargo run --bin admin -- links move 3 0
//!
//! # Change the appearance
//! cargo run --bin admin -- theme set --theme dark --accent "#10b981"
//!
//! # Preview synthetic analytics for the last 14 days
//! cargo run --bin admin -- analytics --days 14 --seed 7
//!
//! # Check what the sanitizer does with an input
//! cargo run --bin admin -- sanitize "example.com/about"
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (required for editing commands): JSON profile snapshot
//! - `PROFILE_USERNAME`, `PROFILE_EMAIL`, `PROFILE_DISPLAY_NAME`: owner of a
//!   fresh profile when the file does not exist yet

use linkbio::api::dto::theme::UpdateThemeRequest;
use linkbio::application::services::ProfileService;
use linkbio::application::services::analytics_service::summarize;
use linkbio::config::Config;
use linkbio::domain::entities::{
    Analytics, ButtonStyle, FONT_CHOICES, Link, Theme, ThemeSettings, UserPatch,
};
use linkbio::domain::repositories::{AnalyticsSource, ProfileRepository};
use linkbio::domain::store::ProfileStore;
use linkbio::error::AppError;
use linkbio::infrastructure::analytics::SyntheticAnalyticsSource;
use linkbio::infrastructure::persistence::JsonFileProfileRepository;
use linkbio::infrastructure::storage::DataUrlImageStorage;
use linkbio::server::load_snapshot;
use linkbio::utils::format::format_number;
use linkbio::utils::id_generator::SequentialIdGenerator;
use linkbio::utils::url_sanitizer::{is_web_url, sanitize_url};
use linkbio::utils::validation::MAX_IMAGE_BYTES;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

/// CLI tool for managing a linkbio profile.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage appearance settings
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Manage account settings
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show an analytics summary from the synthetic source
    Analytics {
        /// Trailing window in days
        #[arg(short, long, default_value_t = 30)]
        days: u32,

        /// Seed for reproducible numbers
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show what the URL sanitizer makes of an input
    Sanitize {
        /// Raw URL as a user would type it
        url: String,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links in display order
    List,

    /// Add a link at the end of the list
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        url: Option<String>,

        /// Add the link hidden from the public page
        #[arg(long)]
        disabled: bool,
    },

    /// Remove a link
    Remove {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Move a link to a zero-based position
    Move { id: String, position: usize },

    /// Flip a link between visible and hidden
    Toggle { id: String },
}

/// Appearance subcommands.
#[derive(Subcommand)]
enum ThemeAction {
    /// Show the current appearance
    Show,

    /// Change appearance fields; omitted flags stay unchanged
    Set {
        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long)]
        button_style: Option<ButtonStyle>,

        /// Accent color as #rrggbb
        #[arg(long)]
        accent: Option<String>,

        #[arg(long)]
        font: Option<String>,

        /// Bio text; an empty string clears it
        #[arg(long)]
        bio: Option<String>,

        /// Public display name override; an empty string clears it
        #[arg(long)]
        display_name: Option<String>,
    },
}

/// Account subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Show account settings
    Show,

    /// Change account fields; omitted flags stay unchanged
    Set {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        display_name: Option<String>,
    },
}

type Service = ProfileService<DataUrlImageStorage>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analytics { days, seed } => return show_analytics(days, seed).await,
        Commands::Sanitize { url } => {
            show_sanitized(&url);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::from_env()?;
    let path = config
        .data_file
        .clone()
        .context("DATA_FILE must be set to edit the profile")?;
    let repo = JsonFileProfileRepository::new(path);

    let snapshot = load_snapshot(&repo, &config).await?;
    let ids = SequentialIdGenerator::starting_after(snapshot.links.iter().map(|l| l.id.as_str()));
    let store = ProfileStore::new(snapshot, Analytics::default(), ids);
    let service = ProfileService::new(
        Arc::new(RwLock::new(store)),
        Arc::new(DataUrlImageStorage::new()),
        MAX_IMAGE_BYTES,
    );

    let changed = match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Theme { action } => handle_theme_action(action, &service).await?,
        Commands::User { action } => handle_user_action(action, &service).await?,
        Commands::Analytics { .. } | Commands::Sanitize { .. } => false,
    };

    if changed {
        let snapshot = service.store().read().await.snapshot();
        repo.save(&snapshot)
            .await
            .with_context(|| format!("Failed to write {}", repo.path().display()))?;
        println!(
            "  {} {}",
            "Saved to".bright_black(),
            repo.path().display().to_string().bright_black()
        );
    }

    Ok(())
}

/// Turns a service error into a CLI error with its details attached.
fn cli_error(e: AppError) -> anyhow::Error {
    let info = e.to_error_info();
    if info.details.as_object().is_some_and(|d| !d.is_empty()) {
        anyhow::anyhow!("{} ({})", info.message, info.details)
    } else {
        anyhow::anyhow!("{}", info.message)
    }
}

/// Dispatches link commands. Returns whether the profile changed.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<bool> {
    match action {
        LinkAction::List => {
            list_links(&service.links().await);
            Ok(false)
        }
        LinkAction::Add {
            title,
            url,
            disabled,
        } => {
            add_link(service, title, url, !disabled).await?;
            Ok(true)
        }
        LinkAction::Remove { id, yes } => remove_link(service, &id, yes).await,
        LinkAction::Move { id, position } => {
            move_link(service, &id, position).await?;
            Ok(true)
        }
        LinkAction::Toggle { id } => {
            let current = service
                .links()
                .await
                .into_iter()
                .find(|l| l.id == id)
                .with_context(|| format!("Link {id} not found"))?;
            let link = service
                .update_link(&id, None, None, Some(!current.enabled))
                .await
                .map_err(cli_error)?;
            println!(
                "{} {} is now {}",
                "✓".green(),
                link.title.cyan(),
                visibility(link.enabled)
            );
            Ok(true)
        }
    }
}

fn visibility(enabled: bool) -> ColoredString {
    if enabled {
        "VISIBLE".green()
    } else {
        "HIDDEN".red()
    }
}

/// Lists links with their position, visibility and clicks.
///
/// # Output Format
///
/// ```text
/// Links
///
///   #   ID            Title                     Status    Clicks  URL
///   ─────────────────────────────────────────────────────────────────────────
///   1   1             Blog                      VISIBLE   1.2K    https://example.com/
/// ```
fn list_links(links: &[Link]) {
    println!("{}", "Links".bright_blue().bold());
    println!();

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Add one with: {} admin links add",
            "cargo run --bin".bright_cyan()
        );
        return;
    }

    println!(
        "  {:<3} {:<13} {:<25} {:<9} {:<7} {}",
        "#".bright_white().bold(),
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Status".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (position, link) in links.iter().enumerate() {
        println!(
            "  {:<3} {:<13} {:<25} {:<9} {:<7} {}",
            (position + 1).to_string().bright_black(),
            link.id.bright_black(),
            link.title.cyan(),
            visibility(link.enabled),
            format_number(link.click_count),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();
}

/// Adds a link, prompting for any field not given on the command line.
async fn add_link(
    service: &Service,
    title: Option<String>,
    url: Option<String>,
    enabled: bool,
) -> Result<()> {
    println!("{}", "Add Link".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };
    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    let link = service
        .create_link(&title, &url, enabled)
        .await
        .map_err(cli_error)?;

    println!("{}", "✓ Link added".green().bold());
    println!("  ID:    {}", link.id.bright_black());
    println!("  Title: {}", link.title.cyan());
    println!("  URL:   {}", link.url.bright_white());
    println!();

    Ok(())
}

/// Removes a link after confirmation (default: No).
async fn remove_link(service: &Service, id: &str, skip_confirm: bool) -> Result<bool> {
    let link = service
        .links()
        .await
        .into_iter()
        .find(|l| l.id == id)
        .with_context(|| format!("Link {id} not found"))?;

    println!("  Link: {}", link.title.cyan());
    println!("  URL:  {}", link.url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "✗ Cancelled".red());
            return Ok(false);
        }
    }

    service.delete_link(id).await.map_err(cli_error)?;

    println!("{}", "✓ Link removed".green().bold());
    Ok(true)
}

/// Moves one link to `position`, shifting the others.
async fn move_link(service: &Service, id: &str, position: usize) -> Result<()> {
    let mut ids: Vec<String> = service.links().await.into_iter().map(|l| l.id).collect();
    let from = ids
        .iter()
        .position(|i| i == id)
        .with_context(|| format!("Link {id} not found"))?;

    let moved = ids.remove(from);
    ids.insert(position.min(ids.len()), moved);

    let links = service.reorder_links(&ids).await.map_err(cli_error)?;
    list_links(&links);

    Ok(())
}

/// Dispatches appearance commands. Returns whether the profile changed.
async fn handle_theme_action(action: ThemeAction, service: &Service) -> Result<bool> {
    match action {
        ThemeAction::Show => {
            show_theme(&service.theme_settings().await);
            Ok(false)
        }
        ThemeAction::Set {
            theme,
            button_style,
            accent,
            font,
            bio,
            display_name,
        } => {
            let request = UpdateThemeRequest {
                display_name: display_name.map(Some),
                bio: bio.map(Some),
                profile_image: None,
                theme,
                button_style,
                accent_color: accent,
                font_family: font,
            };
            request.validate().map_err(|e| cli_error(e.into()))?;
            let patch = request.into_patch().map_err(cli_error)?;

            let settings = service.update_theme_settings(patch).await;
            println!("{}", "✓ Appearance updated".green().bold());
            println!();
            show_theme(&settings);
            Ok(true)
        }
    }
}

fn show_theme(settings: &ThemeSettings) {
    let unset = || "(not set)".bright_black();

    println!("{}", "Appearance".bright_blue().bold());
    println!();
    println!("  Theme:         {}", settings.theme.to_string().cyan());
    println!("  Buttons:       {}", settings.button_style.to_string().cyan());
    println!("  Accent color:  {}", settings.accent_color.cyan());
    println!("  Font:          {}", settings.font_family.cyan());
    println!(
        "  Display name:  {}",
        settings
            .display_name
            .as_deref()
            .map(|n| n.normal())
            .unwrap_or_else(unset)
    );
    println!(
        "  Bio:           {}",
        settings
            .bio
            .as_deref()
            .map(|b| b.normal())
            .unwrap_or_else(unset)
    );
    println!(
        "  Profile image: {}",
        settings
            .profile_image
            .as_deref()
            .map(|p| p.normal())
            .unwrap_or_else(unset)
    );
    println!();
    println!(
        "  {} {}",
        "Fonts:".bright_black(),
        FONT_CHOICES.join(", ").bright_black()
    );
    println!();
}

/// Dispatches account commands. Returns whether the profile changed.
async fn handle_user_action(action: UserAction, service: &Service) -> Result<bool> {
    let user = match action {
        UserAction::Show => {
            let user = service.user().await;
            println!("{}", "Account".bright_blue().bold());
            println!();
            println!("  ID:           {}", user.id.bright_black());
            println!("  Username:     {}", user.username.cyan());
            println!("  Email:        {}", user.email.cyan());
            println!("  Display name: {}", user.display_name.cyan());
            println!();
            return Ok(false);
        }
        UserAction::Set {
            email,
            username,
            display_name,
        } => service
            .update_user(UserPatch {
                email,
                username,
                display_name,
                avatar: None,
            })
            .await
            .map_err(cli_error)?,
    };

    println!("{}", "✓ Account updated".green().bold());
    println!("  Username: {}", user.username.cyan());
    println!("  Email:    {}", user.email.cyan());
    println!();
    Ok(true)
}

/// Prints totals, click-through rate and the daily series.
///
/// Top links come from the saved profile when `DATA_FILE` points at one.
async fn show_analytics(days: u32, seed: Option<u64>) -> Result<()> {
    let source = match seed {
        Some(seed) => SyntheticAnalyticsSource::seeded(seed),
        None => SyntheticAnalyticsSource::new(),
    };
    let analytics = source
        .fetch(days)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load analytics: {}", e))?;

    let links = match Config::from_env().ok().and_then(|c| c.data_file) {
        Some(path) => JsonFileProfileRepository::new(path)
            .load()
            .await?
            .map(|s| s.links)
            .unwrap_or_default(),
        None => Vec::new(),
    };

    let summary = summarize(&analytics, &links);

    println!(
        "{}",
        format!("Analytics (last {days} days)").bright_blue().bold()
    );
    println!();
    println!(
        "  Views:  {}",
        summary.total_views_display.bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        summary.total_clicks_display.bright_green().bold()
    );
    println!(
        "  CTR:    {}",
        format!("{}%", summary.click_through_rate)
            .bright_green()
            .bold()
    );
    println!();

    if !summary.top_links.is_empty() {
        println!("{}", "  Top links".bright_white().bold());
        for link in &summary.top_links {
            println!(
                "    {:<25} {}",
                link.title.cyan(),
                format_number(link.click_count)
            );
        }
        println!();
    }

    println!(
        "  {:<12} {:>6} {:>6}",
        "Date".bright_white().bold(),
        "Views".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(26).bright_black());
    for point in &summary.daily {
        println!(
            "  {:<12} {:>6} {:>6}",
            point.date.to_string().bright_black(),
            point.views,
            point.clicks
        );
    }
    println!();

    Ok(())
}

fn show_sanitized(input: &str) {
    let output = sanitize_url(input);

    println!("  Input:  {}", input.bright_white());
    if output.is_empty() {
        println!("  Output: {}", "(rejected)".red());
    } else if is_web_url(&output) {
        println!("  Output: {}", output.green());
    } else {
        println!(
            "  Output: {} {}",
            output.yellow(),
            "(kept as typed, not a valid URL)".bright_black()
        );
    }
}
