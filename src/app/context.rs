use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl AppContext {
    /// Load configuration (writing defaults on first run) and wire up the
    /// HTTP fetcher.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());

        Ok(Self { config, fetcher })
    }

    pub fn with_parts(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { config, fetcher }
    }
}
