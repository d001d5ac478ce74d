//! Configuration management.
//!
//! Configuration is read from `~/.config/magsync/config.toml` at startup
//! and is read-only for the rest of the run. On first run the built-in
//! defaults are written there (creating parent directories) and read back.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::{MagsyncError, Result};
use crate::domain::magazine::Kind;
use crate::domain::Selector;

/// Minutes between daemon-mode sync runs when the config does not say.
pub const DEFAULT_CHECK_INTERVAL: u64 = 240;

/// An output directory entry: either a single path, or a
/// `[primary, fallback]` pair where the primary wins iff it exists on the
/// filesystem at resolution time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DirEntry {
    Path(PathBuf),
    WithFallback([PathBuf; 2]),
}

impl DirEntry {
    fn resolve(&self) -> PathBuf {
        match self {
            Self::Path(p) => expand_home(p),
            Self::WithFallback([primary, fallback]) => {
                let primary = expand_home(primary);
                if primary.exists() {
                    primary
                } else {
                    expand_home(fallback)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DirTable {
    pub audio: Option<DirEntry>,
    #[serde(rename = "pub")]
    pub publication: Option<DirEntry>,
}

impl Default for DirTable {
    fn default() -> Self {
        Self {
            audio: Some(DirEntry::Path("~/Music/magazines".into())),
            publication: Some(DirEntry::Path("~/Documents/magazines".into())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `mags.<code>.<language> = [formats]`
    pub mags: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub dir: DirTable,
    #[serde(rename = "check-interval")]
    pub check_interval: Option<u64>,
}

impl Default for Config {
    // Built literally: serde's container-default re-enters Default during
    // deserialization, so this must not itself deserialize anything.
    fn default() -> Self {
        let mut mags = BTreeMap::new();
        mags.insert(
            "g".to_string(),
            BTreeMap::from([("E".to_string(), vec!["MP3".to_string()])]),
        );
        mags.insert(
            "w".to_string(),
            BTreeMap::from([("E".to_string(), vec!["MP3".to_string(), "PDF".to_string()])]),
        );

        Self {
            mags,
            dir: DirTable::default(),
            check_interval: Some(DEFAULT_CHECK_INTERVAL),
        }
    }
}

impl Config {
    /// Load configuration from the default path, writing the defaults
    /// first if no file exists. Missing keys fall back to the built-in
    /// defaults field by field.
    pub fn load() -> Result<Self> {
        let path = Self::default_config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::write_default_config(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| MagsyncError::io(path, e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MagsyncError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// `~/.config/magsync/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MagsyncError::Config("could not determine config directory".into()))?;
        Ok(config_dir.join("magsync").join("config.toml"))
    }

    fn write_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| MagsyncError::io(parent, e))?;
        }

        let mut file = fs::File::create(path).map_err(|e| MagsyncError::io(path, e))?;
        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| MagsyncError::io(path, e))?;
        Ok(())
    }

    fn default_config_content() -> &'static str {
        r#"# magsync configuration
#
# mags.<magazine code>.<language code> = [formats to sync]
#   magazine codes: g (Awake!), w (The Watchtower), ws (Simplified)
#   formats: MP3, AAC, PDF, EPUB, RTF
#
# dir.audio / dir.pub take either a single path or a
# [primary, fallback] pair; the primary is used when it exists.

check-interval = 240

[mags]
g = { E = ["MP3"] }
w = { E = ["MP3", "PDF"] }

[dir]
audio = "~/Music/magazines"
pub = "~/Documents/magazines"
"#
    }

    /// Flatten `mags` into validated selectors, in table order. Entries
    /// that fail validation are returned separately so one bad line does
    /// not block the rest.
    pub fn selectors(&self) -> (Vec<Selector>, Vec<MagsyncError>) {
        let mut selectors = Vec::new();
        let mut errors = Vec::new();

        for (code, languages) in &self.mags {
            for (language, formats) in languages {
                for format in formats {
                    match Selector::new(code, language, format) {
                        Ok(sel) => selectors.push(sel),
                        Err(e) => errors.push(e),
                    }
                }
            }
        }

        (selectors, errors)
    }

    /// Output root for a kind. Two-element entries pick the primary iff it
    /// exists at call time. `~` expands to the home directory.
    pub fn root_dir(&self, kind: Kind) -> Result<PathBuf> {
        let entry = match kind {
            Kind::Audio => self.dir.audio.as_ref(),
            Kind::Publication => self.dir.publication.as_ref(),
        };
        let entry = entry.ok_or_else(|| {
            let name = match kind {
                Kind::Audio => "dir.audio",
                Kind::Publication => "dir.pub",
            };
            MagsyncError::Config(format!("no output directory configured ({name})"))
        })?;

        Ok(entry.resolve())
    }

    pub fn check_interval(&self) -> u64 {
        self.check_interval.unwrap_or(DEFAULT_CHECK_INTERVAL)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
