mod config;
mod menu;
mod model;
mod platform;
mod report;
mod resolver;
mod settings;
mod source;
mod synthesizer;
mod utils;

use clap::{Parser, Subcommand};
use config::{AppConfig, load_config};
use futures::future::join_all;
use settings::SettingsStore;
use source::{OfferSource, SimulatedSource, run_search};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use synthesizer::OfferSynthesizer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "food-finder")]
#[command(about = "Compare delivery prices across Uber Eats, Just Eat and Deliveroo")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find the best deals for one or more dishes
    Search {
        #[arg(required = true)]
        dishes: Vec<String>,
        #[arg(long)]
        postcode: String,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Manage the optional Places API key
    ApiKey {
        #[command(subcommand)]
        action: ApiKeyAction,
    },
    /// Show dish suggestions for a category (e.g. curry)
    Menu { category: String },
}

#[derive(Debug, Subcommand)]
enum ApiKeyAction {
    Set { key: String },
    Clear,
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let settings = SettingsStore::new(config.settings_path.clone());

    match cli.command {
        Commands::Search {
            dishes,
            postcode,
            json,
        } => search(&config, &settings, dishes, &postcode, json).await,
        Commands::ApiKey { action } => api_key(&settings, action),
        Commands::Menu { category } => {
            match menu::suggestions(&category) {
                Some(items) => print!("{}", menu::render(&category, items)),
                None => println!("No suggestions for \"{}\" yet. Try \"curry\".", category.trim()),
            }
            ExitCode::SUCCESS
        }
    }
}

async fn search(
    config: &AppConfig,
    settings: &SettingsStore,
    dishes: Vec<String>,
    postcode: &str,
    json: bool,
) -> ExitCode {
    let postcode = postcode.trim();
    let dishes: Vec<String> = dishes
        .iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();
    if dishes.is_empty() || postcode.is_empty() {
        error!("Both a dish and a postcode are required");
        return ExitCode::FAILURE;
    }

    // The key is optional; a broken settings file must not block a search.
    let api_key = match settings.api_key() {
        Ok(key) => key,
        Err(e) => {
            warn!("Could not read settings from {}: {}", settings.path().display(), e);
            None
        }
    };

    let source = SimulatedSource::new(
        OfferSynthesizer::new(config, api_key),
        Duration::from_millis(config.simulated_latency_ms),
    );
    let source: &dyn OfferSource = &source;

    info!("Searching {} dish(es) in {}", dishes.len(), postcode);
    let reports = join_all(dishes.iter().map(|dish| run_search(source, dish, postcode))).await;

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for r in &reports {
            println!("{}", report::render(r));
        }
    }
    ExitCode::SUCCESS
}

fn api_key(settings: &SettingsStore, action: ApiKeyAction) -> ExitCode {
    let result = match action {
        ApiKeyAction::Set { key } => settings.set_api_key(&key),
        ApiKeyAction::Clear => settings.clear_api_key(),
        ApiKeyAction::Show => settings.api_key().map(|key| match key {
            Some(key) => println!("Places API key: {}", utils::mask_secret(&key)),
            None => println!("No Places API key saved. Generated data will be used."),
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Settings error: {}", e);
            ExitCode::FAILURE
        }
    }
}
