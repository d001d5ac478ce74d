use std::fmt;

use crate::app::Result;
use crate::domain::magazine::{Format, Language, Magazine};

/// A validated (magazine, language, format) triple, optionally pinned to a
/// single issue date. Construction is the only validation point; once a
/// `Selector` exists its components are known-good table members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub magazine: Magazine,
    pub language: Language,
    pub format: Format,
    pub issue_date: Option<String>,
}

impl Selector {
    pub fn new(code: &str, language: &str, format: &str) -> Result<Self> {
        Ok(Self {
            magazine: Magazine::from_code(code)?,
            language: Language::from_code(language)?,
            format: Format::from_name(format)?,
            issue_date: None,
        })
    }

    pub fn with_issue_date(mut self, date: impl Into<String>) -> Self {
        self.issue_date = Some(date.into());
        self
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.magazine.code(),
            self.language.code(),
            self.format.name()
        )?;
        if let Some(date) = &self.issue_date {
            write!(f, " ({date})")?;
        }
        Ok(())
    }
}
