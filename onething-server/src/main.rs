use clap::Parser;
use onething_core::chat::{ChatClient, ChatConfig};
use onething_core::OneThingConfig;
use tokio::sync::broadcast;
use tracing_subscriber::{fmt, EnvFilter};

use onething_server::http;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "onething.toml")]
    config: String,

    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience — production uses real env vars)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config
    let config = match OneThingConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", args.config, e);
            std::process::exit(1);
        }
    };

    // Init logging — RUST_LOG overrides the configured level
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level)),
        )
        .init();

    // Connect to DB
    let pool = match onething_core::db::create_pool(&config.database).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if args.health {
        match onething_core::db::health_check(&pool).await {
            Ok(v) => println!("✅ PostgreSQL connected: {}", v),
            Err(e) => {
                println!("❌ PostgreSQL connection failed: {}", e);
                std::process::exit(1);
            }
        }

        println!("✅ OneThing DB health check passed");
        return Ok(());
    }

    onething_core::db::ensure_schema(&pool).await?;

    // Chat client is optional: without a credential the reflection endpoint
    // answers 500 per request while the rest of the API stays up.
    let chat = match ChatClient::new(ChatConfig::new(None, config.ai.model.clone())) {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!("Monthly reflections unavailable: {}", e);
            None
        }
    };

    let (tx, _rx) = broadcast::channel(1);
    let shutdown_tx = tx.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    http::start_http_server(pool.clone(), config, chat, tx.subscribe()).await?;

    pool.close().await;

    Ok(())
}
