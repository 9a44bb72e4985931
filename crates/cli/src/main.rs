//! Vitrine CLI - drive the storefront client from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of products (3 per page)
//! vitrine products
//!
//! # Page 2, ten per page
//! vitrine products --page 2 --limit 10
//!
//! # Who am I? (restores the session from the backend cookie)
//! vitrine profile
//!
//! # Sign in; the password is read from VITRINE_SECRET
//! VITRINE_SECRET=... vitrine login --identifier ana@example.com
//!
//! # Exchange a Google ID token
//! vitrine google --credential eyJhbGciOi...
//! ```
//!
//! Backend and timeouts come from the `VITRINE_*` environment variables
//! (see `vitrine_storefront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_storefront::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of products
    Products {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Products per page (backend default page size when omitted)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show the signed-in user, if the backend session is still valid
    Profile,
    /// Sign in with an identifier; the secret is read from `VITRINE_SECRET`
    Login {
        /// Account identifier (e-mail)
        #[arg(short, long)]
        identifier: String,
    },
    /// Sign in by exchanging a Google ID token
    Google {
        /// ID token handed over by the Google identity widget
        #[arg(short, long, default_value = "")]
        credential: String,
    },
    /// Create an account (not available yet)
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(short, long)]
        email: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
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

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_storefront=info,vitrine_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { page, limit } => {
            commands::products::list(&config, page, limit).await?;
        }
        Commands::Profile => commands::session::profile(config).await?,
        Commands::Login { identifier } => commands::session::login(config, &identifier).await?,
        Commands::Google { credential } => commands::session::google(config, &credential).await?,
        Commands::Register {
            first_name,
            last_name,
            email,
        } => commands::session::register(config, first_name, last_name, email).await?,
    }
    Ok(())
}
