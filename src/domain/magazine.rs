//! Closed tables for the publisher's magazine codes, language codes, and
//! output formats. Everything user-supplied or recovered from a feed is
//! validated against these tables at construction time.

use std::fmt;

use crate::app::{MagsyncError, Result};

/// One of the publisher's magazines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magazine {
    Awake,
    Watchtower,
    WatchtowerSimplified,
}

impl Magazine {
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "g" => Ok(Self::Awake),
            "w" => Ok(Self::Watchtower),
            "ws" => Ok(Self::WatchtowerSimplified),
            other => Err(MagsyncError::validation("magazine code", other)),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Awake => "g",
            Self::Watchtower => "w",
            Self::WatchtowerSimplified => "ws",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Awake => "Awake!",
            Self::Watchtower => "The Watchtower",
            Self::WatchtowerSimplified => "The Watchtower (Simplified)",
        }
    }

    /// Day-of-month fragment appended after `<year><month>` in direct file
    /// URLs. Awake! issues carry no day at all.
    pub fn issue_day(&self) -> &'static str {
        match self {
            Self::Awake => "",
            Self::Watchtower => "15",
            Self::WatchtowerSimplified => "01",
        }
    }

    pub fn all() -> &'static [Magazine] {
        &[Self::Awake, Self::Watchtower, Self::WatchtowerSimplified]
    }
}

impl fmt::Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language code table: publisher short code → display name.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("AL", "Albanian"),
    ("A", "Arabic"),
    ("REA", "Armenian"),
    ("BL", "Bulgarian"),
    ("CB", "Cebuano"),
    ("CHS", "Chinese (Simplified)"),
    ("CH", "Chinese (Traditional)"),
    ("C", "Croatian"),
    ("B", "Czech"),
    ("D", "Danish"),
    ("O", "Dutch"),
    ("E", "English"),
    ("ST", "Estonian"),
    ("FI", "Finnish"),
    ("F", "French"),
    ("GE", "Georgian"),
    ("X", "German"),
    ("G", "Greek"),
    ("Q", "Hebrew"),
    ("H", "Hungarian"),
    ("IN", "Indonesian"),
    ("I", "Italian"),
    ("J", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Latvian"),
    ("L", "Lithuanian"),
    ("MK", "Macedonian"),
    ("MT", "Maltese"),
    ("N", "Norwegian"),
    ("P", "Polish"),
    ("T", "Portuguese"),
    ("M", "Romanian"),
    ("U", "Russian"),
    ("SB", "Serbian"),
    ("V", "Slovak"),
    ("SV", "Slovenian"),
    ("S", "Spanish"),
    ("SW", "Swahili"),
    ("Z", "Swedish"),
    ("TG", "Tagalog"),
    ("TK", "Turkish"),
    ("K", "Ukrainian"),
    ("VT", "Vietnamese"),
];

/// A validated language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    pub fn from_code(code: &str) -> Result<Self> {
        LANGUAGES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(code, name)| Self { code, name })
            .ok_or_else(|| MagsyncError::validation("language code", code))
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Coarse category a format belongs to; selects the output root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Audio,
    Publication,
}

impl Kind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Publication => "publication",
        }
    }
}

/// A downloadable output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Mp3,
    Aac,
    Pdf,
    Epub,
    Rtf,
}

impl Format {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "MP3" => Ok(Self::Mp3),
            "AAC" => Ok(Self::Aac),
            "PDF" => Ok(Self::Pdf),
            "EPUB" => Ok(Self::Epub),
            "RTF" => Ok(Self::Rtf),
            other => Err(MagsyncError::validation("format", other)),
        }
    }

    /// Reverse lookup from a filename extension (without the dot).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext {
            "mp3" => Ok(Self::Mp3),
            "m4b" => Ok(Self::Aac),
            "pdf" => Ok(Self::Pdf),
            "epub" => Ok(Self::Epub),
            "rtf" => Ok(Self::Rtf),
            other => Err(MagsyncError::validation("file extension", other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Aac => "AAC",
            Self::Pdf => "PDF",
            Self::Epub => "EPUB",
            Self::Rtf => "RTF",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Aac => "m4b",
            Self::Pdf => "pdf",
            Self::Epub => "epub",
            Self::Rtf => "rtf",
        }
    }

    /// Identifier used when requesting a feed. The server does not expose
    /// AAC under its own name; it is listed as M4B.
    pub fn feed_request_name(&self) -> &'static str {
        match self {
            Self::Aac => "M4B",
            other => other.name(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Mp3 | Self::Aac => Kind::Audio,
            Self::Pdf | Self::Epub | Self::Rtf => Kind::Publication,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
