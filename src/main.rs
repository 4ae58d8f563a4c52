use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use campus_api::config::AppConfig;
use campus_api::state::AppContext;
use campus_api::{auth, database};

#[derive(Parser)]
#[command(name = "campus-api")]
#[command(about = "Campus services API - booking, trivia, bar and classroom")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve {
        #[arg(long, help = "Port to bind; overrides PORT and the config default")]
        port: Option<u16>,
    },

    #[command(about = "Load fixture data into the database")]
    Seed,

    #[command(about = "Mint a development bearer token signed with the configured secret")]
    Token {
        #[arg(long, default_value = "dev-user")]
        sub: String,
        #[arg(long, value_delimiter = ',', help = "Comma-separated permission strings")]
        permissions: Vec<String>,
        #[arg(long, default_value = "24")]
        ttl_hours: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => serve(config, port).await,
        Commands::Seed => seed(config).await,
        Commands::Token { sub, permissions, ttl_hours } => token(config, sub, permissions, ttl_hours),
    }
}

async fn serve(config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    tracing::info!("starting campus-api in {:?} mode", config.environment);

    let ctx = AppContext::init(config).await?;
    let app = campus_api::app(ctx);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("campus-api listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

async fn seed(config: AppConfig) -> anyhow::Result<()> {
    let ctx = AppContext::init(config).await?;
    database::seed::run(&ctx.pool).await?;
    println!("fixture data loaded");
    Ok(())
}

fn token(config: AppConfig, sub: String, permissions: Vec<String>, ttl_hours: i64) -> anyhow::Result<()> {
    let token = auth::issue_token(&sub, permissions, &config.security.jwt_secret, ttl_hours)
        .context("token signing failed (is JWT_SECRET set?)")?;
    println!("{token}");
    Ok(())
}
