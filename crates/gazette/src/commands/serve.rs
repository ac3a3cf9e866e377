//! Preview a built site over HTTP.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use clap::Args;
use tower_http::services::ServeDir;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 4000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Built site directory
    #[arg(short, long, default_value = "dist")]
    pub dir: PathBuf,

    /// Do not open browser
    #[arg(long)]
    pub no_open: bool,
}

/// Router serving the output tree as laid out by the builder: `/` is `index.html`,
/// `/articles/<slug>.html` the article pages, `/public/...` the copied assets.
fn site_router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
}

/// Run the serve command.
pub async fn run(args: ServeArgs) -> Result<()> {
    if !args.dir.join("index.html").is_file() {
        anyhow::bail!(
            "No built site in {} (index.html missing). Run 'gazette build' first.",
            args.dir.display()
        );
    }

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid address {}:{}", args.host, args.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let url = format!("http://{}", listener.local_addr()?);
    tracing::info!("Previewing {} at {}", args.dir.display(), url);

    if !args.no_open {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, site_router(&args.dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Preview server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
