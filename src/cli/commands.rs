use std::time::Duration;

use tracing::info;

use crate::app::{AppContext, Result};
use crate::domain::Selector;
use crate::sync::{self, SyncReport};

/// Sync every selector in the configuration. Per-selector failures are
/// reported at the end; they never stop the other selectors.
pub async fn sync_all(ctx: &AppContext, check_only: bool) -> Result<()> {
    let (selectors, config_errors) = ctx.config.selectors();

    if selectors.is_empty() && config_errors.is_empty() {
        println!("Nothing configured to sync");
        return Ok(());
    }

    let mut report = SyncReport::default();
    for error in config_errors {
        report.errors.push(("configuration".into(), error));
    }

    for selector in &selectors {
        info!(%selector, "syncing");
        report.merge(sync::sync_selector(ctx, selector, check_only).await);
    }

    print_report(&report, check_only);
    Ok(())
}

/// Sync one selector given on the command line.
pub async fn sync_one(ctx: &AppContext, selector: &Selector, check_only: bool) -> Result<()> {
    let report = sync::sync_selector(ctx, selector, check_only).await;
    print_report(&report, check_only);
    Ok(())
}

/// Print the configured selectors.
pub fn list(ctx: &AppContext) -> Result<()> {
    let (selectors, errors) = ctx.config.selectors();

    if selectors.is_empty() {
        println!("No selectors configured");
    }
    for selector in &selectors {
        println!(
            "{}  ({}, {}, {})",
            selector,
            selector.magazine.name(),
            selector.language.name(),
            selector.format.kind().label()
        );
    }
    for error in &errors {
        eprintln!("Invalid configuration entry: {error}");
    }

    Ok(())
}

/// Re-run the sync every `check-interval` minutes, forever: the whole
/// configuration, or just one selector when the command line named one.
pub async fn daemonize(
    ctx: &AppContext,
    selector: Option<&Selector>,
    check_only: bool,
) -> Result<()> {
    let interval = Duration::from_secs(ctx.config.check_interval() * 60);
    info!(minutes = ctx.config.check_interval(), "running on an interval");

    loop {
        match selector {
            Some(selector) => sync_one(ctx, selector, check_only).await?,
            None => sync_all(ctx, check_only).await?,
        }
        tokio::time::sleep(interval).await;
    }
}

fn print_report(report: &SyncReport, check_only: bool) {
    if check_only {
        if report.pending.is_empty() {
            println!("Nothing new");
        } else {
            println!("{} new item(s):", report.pending.len());
            for path in &report.pending {
                println!("  {}", path.display());
            }
        }
    } else {
        for path in &report.downloaded {
            println!("Downloaded {}", path.display());
        }
        println!(
            "Done: {} downloaded, {} already present, {} error(s)",
            report.downloaded.len(),
            report.already_present,
            report.errors.len()
        );
    }

    for (what, error) in &report.errors {
        eprintln!("  Error ({what}): {error}");
    }
}
