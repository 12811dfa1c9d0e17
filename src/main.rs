use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use hotel_search::adapters::http::client::HttpSearchClient;
use hotel_search::config::load_config;
use hotel_search::domain::search_query::FormField;
use hotel_search::ports::hotel_search_client::HotelSearchClient;
use hotel_search::ui::controller::SearchController;
use hotel_search::ui::renderer::RenderOptions;
use hotel_search::ui::terminal::TerminalApp;

/// Compare hotel rates across suppliers from the terminal.
#[derive(Debug, Parser)]
#[command(name = "hotel-search", version, about)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// City to search; with both dates, runs a single search and exits
    #[arg(long)]
    city: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long = "check-in")]
    check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long = "check-out")]
    check_out: Option<String>,
}

impl Cli {
    /// Form fields given on the command line, in form order.
    fn form_fields(&self) -> Vec<(FormField, String)> {
        [
            (FormField::City, &self.city),
            (FormField::CheckIn, &self.check_in),
            (FormField::CheckOut, &self.check_out),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [PathBuf::from("config.yaml"), binary_dir().join("config.yaml")];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr, stdout carries the rendered form
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(find_config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let http_client =
        HttpSearchClient::new(&config.api).context("building HTTP search client")?;
    tracing::info!(endpoint = %http_client.endpoint(), "Starting hotel-search");
    let client: Arc<dyn HotelSearchClient> = Arc::new(http_client);

    let controller = Arc::new(SearchController::new(client));
    let app = TerminalApp::new(Arc::clone(&controller), RenderOptions::from(&config.ui));

    let prefilled = cli.form_fields();
    let one_shot = prefilled.len() == FormField::ALL.len();
    for (field, value) in prefilled {
        controller.update_field(field, value);
    }

    if one_shot {
        let mut stdout = tokio::io::stdout();
        let state = app.search_once(&mut stdout).await?;
        if let Some(message) = state.error_message() {
            tracing::warn!(%message, "Search returned no hotels");
        }
        return Ok(if state.result().is_some() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    app.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(ExitCode::SUCCESS)
}
