//! # magsync
//!
//! A personal media-sync utility for a publisher's magazine feeds: fetch
//! the RSS listing for each configured (magazine, language, format)
//! selector, diff its items against the local output tree, and download
//! whatever is missing into
//! `<root>/<feed title>/<issue date>/<filename>`.
//!
//! ## Pipeline
//!
//! ```text
//! Config → URL generator → Fetcher → Parser → Differ → Placer
//! ```
//!
//! run once per selector. The downloaded files themselves are the only
//! durable state; presence of a file at its destination path is the
//! "already fetched" marker, so re-runs are idempotent.

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the loaded configuration to the
/// HTTP fetcher; [`MagsyncError`](app::MagsyncError) is the crate-wide
/// error enum.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// TOML configuration: magazine selections, output roots (with optional
/// primary/fallback pairs), and the daemon check interval.
pub mod config;

/// Core domain models and pure helpers.
///
/// - [`Magazine`](domain::Magazine) / [`Language`](domain::Language) /
///   [`Format`](domain::Format): the closed validation tables
/// - [`Selector`](domain::Selector): a validated triple, optionally pinned
///   to one issue
/// - [`Feed`](domain::Feed) / [`Item`](domain::Item): parsed listing plus
///   destination-path derivation
/// - [`parse_issue_date`](domain::parse_issue_date): user-facing issue
///   date shapes
pub mod domain;

/// HTTP fetching behind the [`Fetcher`](fetcher::Fetcher) trait, including
/// the server's soft-404 sentinel detection.
pub mod fetcher;

/// Feed parsing: XML bytes into a validated [`Feed`](domain::Feed).
pub mod parser;

/// The fetch → parse → diff → place pipeline and its run report.
pub mod sync;

/// Feed-listing and direct-file URL construction.
pub mod urls;
