mod cli;
mod logger;
mod render;

use std::sync::Arc;

use clap::Parser;
use munchies_client::{CancellationToken, DirectoryLoader, NetworkBackend, Storefront};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, arguments, logging)
    dotenv::dotenv().ok();
    let args = cli::Args::parse();
    logger::init_logger(&args.log_level, args.log_json, args.log_dir.as_deref())?;

    // 2. Client configuration
    let config = args.client_config();
    let backend = Arc::new(NetworkBackend::new(&config)?);
    let loader = DirectoryLoader::from_config(backend, &config);
    tracing::info!(backend = %config.base_url, "Munchies starting");

    // 3. Ctrl-C abandons in-flight requests
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    // 4. Load, apply the requested toggles, render
    let mut storefront = Storefront::new();
    eprint!("{}", render::render_page(&storefront, &config));
    storefront.load(&loader, &cancel).await;
    if cancel.is_cancelled() {
        tracing::info!("Interrupted before the directory loaded");
        return Ok(());
    }

    args.apply_selection(&mut storefront);
    print!("{}", render::render_page(&storefront, &config));

    if storefront.error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}
