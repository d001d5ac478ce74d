use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use magsync::app::AppContext;
use magsync::cli::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let ctx = AppContext::new()?;

    if cli.list {
        commands::list(&ctx)?;
        return Ok(());
    }

    let selector = cli.selector()?;

    if cli.daemonize {
        commands::daemonize(&ctx, selector.as_ref(), cli.check).await?;
    } else {
        match &selector {
            Some(selector) => commands::sync_one(&ctx, selector, cli.check).await?,
            None => commands::sync_all(&ctx, cli.check).await?,
        }
    }

    Ok(())
}
