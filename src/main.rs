#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod surface;
mod theme;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pixseek_core::config::{DEFAULT_ENDPOINT, DEFAULT_PER_PAGE};
use pixseek_core::SearchConfig;
use tracing_subscriber::EnvFilter;

/// pixseek - Pixabay image search
#[derive(Parser, Debug)]
#[command(name = "pixseek-desktop")]
#[command(about = "Search Pixabay and browse results in a paged gallery")]
struct Args {
    /// Pixabay API key
    #[arg(long, env = "PIXABAY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Image search endpoint
    #[arg(long, env = "PIXABAY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Images per page (3-200)
    #[arg(long, env = "PIXSEEK_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    per_page: u32,
}

impl Args {
    fn search_config(&self) -> anyhow::Result<SearchConfig> {
        let config = SearchConfig::new(self.api_key.clone())
            .with_endpoint(self.endpoint.clone())
            .with_per_page(self.per_page);
        config.validate().context("invalid search configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real env vars and flags still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.search_config()?;

    tracing::info!(
        "Starting pixseek against {} ({} images per page)",
        config.endpoint,
        config.per_page
    );
    context::set_search_config(config);

    let window = WindowBuilder::new()
        .with_title("pixseek")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
