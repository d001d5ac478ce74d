//! The synchronization pipeline: fetch a selector's feed, parse it, diff
//! the items against the local output tree, and download whatever is
//! missing. Errors in one selector or item are recorded and the run
//! continues; the report aggregates everything for end-of-run output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::{AppContext, MagsyncError, Result};
use crate::domain::{parse_issue_date, Feed, Item, Selector};
use crate::parser;
use crate::urls;

/// Outcome of placing one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Downloaded,
    AlreadyPresent,
}

/// Aggregated results of one run across all selectors.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Destination paths written this run.
    pub downloaded: Vec<PathBuf>,
    /// Items whose destination already existed.
    pub already_present: usize,
    /// Check mode only: destinations that would be downloaded.
    pub pending: Vec<PathBuf>,
    /// `(what failed, why)` pairs; the run continued past each.
    pub errors: Vec<(String, MagsyncError)>,
}

impl SyncReport {
    pub fn merge(&mut self, other: SyncReport) {
        self.downloaded.extend(other.downloaded);
        self.already_present += other.already_present;
        self.pending.extend(other.pending);
        self.errors.extend(other.errors);
    }
}

/// Items of `feed` whose destination path does not exist under `root`.
///
/// Lazy and restartable: existence is re-tested each time the iterator is
/// driven, and feed order is preserved.
pub fn new_items<'a>(feed: &'a Feed, root: &'a Path) -> impl Iterator<Item = &'a Item> + 'a {
    feed.items
        .iter()
        .filter(move |item| !feed.item_path(item, root).exists())
}

/// Download one item to its destination, creating the root/feed/issue
/// directory chain first. A destination that already exists is skipped and
/// counts as success; re-running the pipeline never re-downloads.
pub async fn fetch_and_place(
    ctx: &AppContext,
    feed: &Feed,
    item: &Item,
    root: &Path,
) -> Result<Placement> {
    let dest = feed.item_path(item, root);
    place(ctx, &item.link, &dest).await
}

async fn place(ctx: &AppContext, link: &str, dest: &Path) -> Result<Placement> {
    if dest.exists() {
        debug!(dest = %dest.display(), "already present, skipping");
        return Ok(Placement::AlreadyPresent);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| MagsyncError::io(parent, e))?;
    }

    info!(url = link, dest = %dest.display(), "downloading");
    let body = ctx.fetcher.fetch(link).await?;
    fs::write(dest, body).map_err(|e| MagsyncError::io(dest, e))?;

    Ok(Placement::Downloaded)
}

/// Sync everything one selector covers. With an issue date this fetches a
/// single direct file; otherwise the whole feed is diffed and filled in.
/// `check_only` reports what would download without fetching media.
pub async fn sync_selector(
    ctx: &AppContext,
    selector: &Selector,
    check_only: bool,
) -> SyncReport {
    let mut report = SyncReport::default();

    match &selector.issue_date {
        Some(date) => sync_single_issue(ctx, selector, date, check_only, &mut report).await,
        None => sync_feed(ctx, selector, check_only, &mut report).await,
    }

    report
}

async fn sync_feed(
    ctx: &AppContext,
    selector: &Selector,
    check_only: bool,
    report: &mut SyncReport,
) {
    let feed = match fetch_feed(ctx, selector).await {
        Ok(feed) => feed,
        Err(e) => {
            report.errors.push((selector.to_string(), e));
            return;
        }
    };

    if feed.selector != *selector {
        warn!(requested = %selector, listed = %feed.selector, "feed lists a different selector");
    }

    let root = match ctx.config.root_dir(feed.selector.format.kind()) {
        Ok(root) => root,
        Err(e) => {
            report.errors.push((selector.to_string(), e));
            return;
        }
    };

    if check_only {
        report
            .pending
            .extend(new_items(&feed, &root).map(|item| feed.item_path(item, &root)));
        report.already_present += feed.items.len() - report.pending.len();
        return;
    }

    // Collect first: placement mutates the filesystem the differ reads.
    let missing: Vec<&Item> = new_items(&feed, &root).collect();
    report.already_present += feed.items.len() - missing.len();

    for item in missing {
        match fetch_and_place(ctx, &feed, item, &root).await {
            Ok(Placement::Downloaded) => {
                report.downloaded.push(feed.item_path(item, &root));
            }
            Ok(Placement::AlreadyPresent) => report.already_present += 1,
            Err(e) => report.errors.push((item.filename().to_string(), e)),
        }
    }
}

async fn sync_single_issue(
    ctx: &AppContext,
    selector: &Selector,
    date: &str,
    check_only: bool,
    report: &mut SyncReport,
) {
    let result = async {
        let (year, month) =
            parse_issue_date(date).ok_or_else(|| MagsyncError::IssueDate(date.to_string()))?;
        let url = urls::issue_file_url(selector, &year, &month)?;
        let root = ctx.config.root_dir(selector.format.kind())?;

        // No feed metadata in this mode; root the file under the magazine
        // name and a year-month issue directory so re-runs stay idempotent.
        let dest = root
            .join(selector.magazine.name())
            .join(format!("{year}-{month}"))
            .join(urls::file_name(selector, &year, &month));

        if check_only {
            if dest.exists() {
                report.already_present += 1;
            } else {
                report.pending.push(dest);
            }
            return Ok(());
        }

        match place(ctx, url.as_str(), &dest).await? {
            Placement::Downloaded => report.downloaded.push(dest),
            Placement::AlreadyPresent => report.already_present += 1,
        }
        Ok(())
    }
    .await;

    if let Err(e) = result {
        report.errors.push((selector.to_string(), e));
    }
}

async fn fetch_feed(ctx: &AppContext, selector: &Selector) -> Result<Feed> {
    let url = urls::feed_url(selector)?;
    debug!(url = %url, "fetching feed");
    let body = ctx.fetcher.fetch(url.as_str()).await?;
    parser::parse(&body)
}
