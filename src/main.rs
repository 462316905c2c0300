use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mealkit - meal ordering backend
#[derive(Parser)]
#[command(name = "mealkit")]
#[command(about = "Menus, bundlings, carts and checkout over a JSON API", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Insert a demo catalog (menus, bundlings, couriers, ...)
    Seed,
    /// Mint a bearer token for a user id
    Token {
        #[arg(long)]
        user_id: i64,

        /// Token lifetime in seconds
        #[arg(long, default_value_t = 86_400)]
        ttl_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealkit::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealkit::observability::init_observability(
        "mealkit",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mealkit::server::serve(config, host, port).await,
        Commands::Migrate => cli::database::migrate(config).await,
        Commands::Reset => cli::database::reset(config).await,
        Commands::Seed => cli::seed::seed(config).await,
        Commands::Token { user_id, ttl_secs } => cli::token::token(config, user_id, ttl_secs),
    }
}
