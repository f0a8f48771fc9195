use anyhow::Result;
use axum::Router;
use clap::Parser;
use engine::RecEngine;
use server::build_app;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Catalog page to scrape at startup
    #[arg(long, default_value = "https://ware-consulting.vercel.app/")]
    source: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Scrape request timeout seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// User-Agent for the scrape request
    #[arg(long, default_value = "rec-engine-rs/0.1 (+https://example.com/bot)")]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let scraped = match ingest::scrape_products(&args.source, args.timeout_secs, &args.user_agent).await {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(%err, source = %args.source, "scrape failed, using fallback catalog");
            Vec::new()
        }
    };
    let records = if scraped.is_empty() { ingest::fallback_products() } else { scraped };

    let rec = Arc::new(RecEngine::new());
    for r in records {
        let img = if r.img.is_empty() { None } else { Some(r.img) };
        rec.add_product(r.title, r.desc, img);
    }
    rec.build();
    tracing::info!(num_products = rec.products().len(), "catalog ready");

    let app: Router = build_app(rec);
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
