//! Bookstore Server Binary
//!
//! Starts the HTTP server for the book catalogue.

use std::sync::Arc;
use clap::Parser;
use bookstore::{BookStore, Config};
use bookstore::server::Server;
use tracing_subscriber::{fmt, EnvFilter};

/// Bookstore Server
#[derive(Parser, Debug)]
#[command(name = "bookstore-server")]
#[command(about = "REST API over an in-memory book catalogue")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    listen: String,

    /// Start with an empty catalogue
    #[arg(long)]
    no_seed: bool,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    compact: bool,

    /// Request body limit in KB
    #[arg(long, default_value = "1024")]
    max_body_kb: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookstore=debug,tower_http=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Bookstore Server v{}", bookstore::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .seed(!args.no_seed)
        .pretty_json(!args.compact)
        .max_body_bytes(body_limit_bytes(args.max_body_kb))
        .build();

    let store = Arc::new(BookStore::open(&config));
    tracing::info!("Store initialized with {} books", store.len());

    let server = Server::new(config, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Body limit in bytes, clamped instead of wrapping on huge inputs
fn body_limit_bytes(kb: usize) -> usize {
    kb.saturating_mul(1024)
}
