pub mod commands;

use clap::Parser;

use crate::app::{MagsyncError, Result};
use crate::domain::Selector;

/// Sync magazine audio and publication files from the publisher's feeds.
///
/// With no arguments every selector in the configuration is synced. A
/// `CODE LANGUAGE FORMAT [ISSUE]` triple syncs just that selector; with an
/// issue date the feed is skipped and the single file fetched directly.
#[derive(Parser)]
#[command(name = "magsync")]
#[command(about = "Sync magazine feeds to the local filesystem", long_about = None)]
pub struct Cli {
    /// Magazine code (g, w, ws)
    pub code: Option<String>,

    /// Language code (E, J, AL, ...)
    pub language: Option<String>,

    /// Format (MP3, AAC, PDF, EPUB, RTF)
    pub format: Option<String>,

    /// Issue date (2012-9, 9/2012, or a bare month for the current year)
    pub issue: Option<String>,

    /// Report new items without downloading them
    #[arg(short, long)]
    pub check: bool,

    /// Keep running, re-syncing every check-interval minutes (the whole
    /// configuration, or just the given selector)
    #[arg(short, long)]
    pub daemonize: bool,

    /// Print the configured selectors and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The selector named on the command line, validated; `None` when no
    /// positional arguments were given. A partial triple is an error.
    pub fn selector(&self) -> Result<Option<Selector>> {
        match (&self.code, &self.language, &self.format) {
            (Some(code), Some(language), Some(format)) => {
                let mut selector = Selector::new(code, language, format)?;
                if let Some(date) = &self.issue {
                    selector = selector.with_issue_date(date);
                }
                Ok(Some(selector))
            }
            (None, None, None) => Ok(None),
            _ => Err(MagsyncError::Config(
                "a selector needs all of CODE, LANGUAGE and FORMAT".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Format;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("magsync").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_means_no_selector() {
        assert_eq!(parse(&[]).selector().unwrap(), None);
    }

    #[test]
    fn full_triple_builds_a_selector() {
        let cli = parse(&["w", "J", "PDF", "2012-08"]);
        let selector = cli.selector().unwrap().unwrap();
        assert_eq!(selector.format, Format::Pdf);
        assert_eq!(selector.issue_date.as_deref(), Some("2012-08"));
    }

    #[test]
    fn partial_triple_is_an_error() {
        assert!(parse(&["w"]).selector().is_err());
        assert!(parse(&["w", "J"]).selector().is_err());
    }

    #[test]
    fn daemonize_combines_with_a_selector() {
        let cli = parse(&["-d", "g", "E", "MP3"]);
        assert!(cli.daemonize);
        assert!(cli.selector().unwrap().is_some());
    }
}
