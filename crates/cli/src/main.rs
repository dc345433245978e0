//! Storepee CLI - manage stores and billboards from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create a store (navigates to the new store's dashboard)
//! storepee store create --name "Main Street"
//!
//! # Rename a store
//! storepee store rename --store <STORE_ID> --name "Outlet"
//!
//! # Create a billboard
//! storepee billboard create --store <STORE_ID> --label "Summer Sale" \
//!     --image-url https://res.cloudinary.com/demo/summer.png
//!
//! # Delete a billboard without the confirmation prompt
//! storepee billboard delete --store <STORE_ID> --billboard <BILLBOARD_ID> --yes
//!
//! # Print the public API URL of a store
//! storepee api-url --store <STORE_ID>
//! ```
//!
//! # Environment Variables
//!
//! - `STOREPEE_API_URL` - Backend origin (required)
//! - `STOREPEE_SESSION_TOKEN` - Bearer token of the signed-in session
//! - `STOREPEE_USER_ID` - Signed-in user; commands redirect to sign-in without it
//! - `STOREPEE_LOG_JSON` - Emit JSON logs
//! - `SENTRY_DSN` / `SENTRY_ENVIRONMENT` - Error tracking

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use storepee_core::{BillboardId, StoreId};
use storepee_dashboard::config::DashboardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod terminal;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "storepee")]
#[command(author, version, about = "Storepee dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage stores
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Manage the billboards of a store
    Billboard {
        #[command(subcommand)]
        action: BillboardAction,
    },
    /// Print the public API URL of a store
    ApiUrl {
        #[arg(short, long)]
        store: StoreId,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Create a new store
    Create {
        #[arg(short, long)]
        name: String,
    },
    /// Rename a store
    Rename {
        #[arg(short, long)]
        store: StoreId,

        #[arg(short, long)]
        name: String,
    },
    /// Delete a store (its products and categories must be removed first)
    Delete {
        #[arg(short, long)]
        store: StoreId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum BillboardAction {
    /// Create a billboard
    Create {
        #[arg(short, long)]
        store: StoreId,

        #[arg(short, long)]
        label: String,

        /// URL of an already hosted image
        #[arg(short, long)]
        image_url: String,
    },
    /// Update a billboard's label and image
    Update {
        #[arg(short, long)]
        store: StoreId,

        #[arg(short, long)]
        billboard: BillboardId,

        #[arg(short, long)]
        label: String,

        #[arg(short, long)]
        image_url: String,
    },
    /// Delete a billboard (categories using it must be removed first)
    Delete {
        #[arg(short, long)]
        store: StoreId,

        #[arg(short, long)]
        billboard: BillboardId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &DashboardConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storepee_dashboard=info,storepee_cli=info".into());

    let json_layer = log_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!log_json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    let cli = Cli::parse();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry before the subscriber so the tracing layer has a client
    let _sentry_guard = init_sentry(&config);
    init_tracing(config.log_json);

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &DashboardConfig) -> Result<(), CommandError> {
    match cli.command {
        Commands::Store { action } => match action {
            StoreAction::Create { name } => commands::store::create(config, name).await?,
            StoreAction::Rename { store, name } => {
                commands::store::rename(config, store, name).await?;
            }
            StoreAction::Delete { store, yes } => {
                commands::store::delete(config, store, yes).await?;
            }
        },
        Commands::Billboard { action } => match action {
            BillboardAction::Create {
                store,
                label,
                image_url,
            } => commands::billboard::create(config, store, label, image_url).await?,
            BillboardAction::Update {
                store,
                billboard,
                label,
                image_url,
            } => {
                commands::billboard::update(config, store, billboard, label, image_url).await?;
            }
            BillboardAction::Delete {
                store,
                billboard,
                yes,
            } => commands::billboard::delete(config, store, billboard, yes).await?,
        },
        Commands::ApiUrl { store } => commands::api_url(config, store),
    }
    Ok(())
}
