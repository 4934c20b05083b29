use anyhow::Result;
use clap::{Parser, Subcommand};

/// foodprep - recipes, meal plans and shopping lists
#[derive(Parser)]
#[command(name = "foodprep")]
#[command(about = "Meal planning API with shopping lists and nutrition tracking", long_about = None)]
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
    /// Print a bearer token for a user id
    Token {
        #[arg(long)]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodprep::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodprep::observability::init_observability(
        "foodprep",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => foodprep::server::serve(config, host, port).await,
        Commands::Migrate => foodprep::migrate::migrate(&config).await,
        Commands::Reset => foodprep::migrate::reset(&config).await,
        Commands::Token { user } => {
            let token = foodprep::auth::generate_token(&config.jwt, user)?;
            println!("{token}");

            Ok(())
        }
    }
}
