//! URL construction for the publisher's two endpoints: the feed listing
//! (query-string parameterized) and the direct file download (path
//! parameterized).

use url::Url;

use crate::app::{MagsyncError, Result};
use crate::domain::magazine::Kind;
use crate::domain::{parse_issue_date, Selector};

const FEED_ENDPOINT: &str = "https://www.jw.org/apps/index.xjp";
const FILE_ENDPOINT: &str = "https://download.jw.org/files/media_magazines";

/// Opaque per-kind query-option codes the feed endpoint expects.
const AUDIO_OPTION: &str = "QrYQZRQVNlFg";
const PUBLICATION_OPTION: &str = "FRSXyKKWkVNr";

/// Feed listing URL for browsing a selector's available issues.
pub fn feed_url(selector: &Selector) -> Result<Url> {
    let option = match selector.format.kind() {
        Kind::Audio => AUDIO_OPTION,
        Kind::Publication => PUBLICATION_OPTION,
    };

    let mut url = Url::parse(FEED_ENDPOINT)?;
    url.query_pairs_mut()
        .append_pair("option", option)
        .append_pair("rln", selector.language.code())
        .append_pair("rmn", selector.magazine.code())
        .append_pair("rfm", selector.format.feed_request_name());
    Ok(url)
}

/// Filename of a single issue on the download server:
/// `<code>_<language>_<year><month><fixed-day>.<ext>`.
pub fn file_name(selector: &Selector, year: &str, month: &str) -> String {
    format!(
        "{}_{}_{}{}{}.{}",
        selector.magazine.code(),
        selector.language.code(),
        year,
        month,
        selector.magazine.issue_day(),
        selector.format.extension()
    )
}

/// Direct download URL for an already-parsed issue date.
pub fn issue_file_url(selector: &Selector, year: &str, month: &str) -> Result<Url> {
    Ok(Url::parse(&format!(
        "{FILE_ENDPOINT}/{}",
        file_name(selector, year, month)
    ))?)
}

/// Direct download URL for a user-supplied issue date string.
pub fn file_url(selector: &Selector, date: &str) -> Result<Url> {
    let (year, month) =
        parse_issue_date(date).ok_or_else(|| MagsyncError::IssueDate(date.to_string()))?;
    issue_file_url(selector, &year, &month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn feed_url_audio_option() {
        let sel = Selector::new("g", "E", "MP3").unwrap();
        let url = feed_url(&sel).unwrap();
        let q = query_map(&url);
        assert_eq!(q["option"], AUDIO_OPTION);
        assert_eq!(q["rln"], "E");
        assert_eq!(q["rmn"], "g");
        assert_eq!(q["rfm"], "MP3");
    }

    #[test]
    fn feed_url_publication_option() {
        let sel = Selector::new("w", "AL", "EPUB").unwrap();
        let q = query_map(&feed_url(&sel).unwrap());
        assert_eq!(q["option"], PUBLICATION_OPTION);
        assert_eq!(q["rfm"], "EPUB");
    }

    #[test]
    fn feed_url_remaps_aac() {
        let sel = Selector::new("g", "E", "AAC").unwrap();
        let q = query_map(&feed_url(&sel).unwrap());
        assert_eq!(q["rfm"], "M4B");
    }

    #[test]
    fn file_url_watchtower_pdf() {
        let sel = Selector::new("w", "J", "PDF").unwrap();
        let url = file_url(&sel, "2012-08").unwrap();
        assert_eq!(
            url.as_str(),
            "https://download.jw.org/files/media_magazines/w_J_20120815.pdf"
        );
    }

    #[test]
    fn file_url_awake_has_no_day() {
        let sel = Selector::new("g", "E", "MP3").unwrap();
        let url = file_url(&sel, "9/2012").unwrap();
        assert_eq!(
            url.as_str(),
            "https://download.jw.org/files/media_magazines/g_E_201209.mp3"
        );
    }

    #[test]
    fn file_url_simplified_day_01() {
        let sel = Selector::new("ws", "E", "EPUB").unwrap();
        let url = file_url(&sel, "2013-01").unwrap();
        assert!(url.as_str().ends_with("/ws_E_20130101.epub"));
    }

    #[test]
    fn file_name_is_the_url_tail() {
        let sel = Selector::new("w", "J", "PDF").unwrap();
        let name = file_name(&sel, "2012", "08");
        assert_eq!(name, "w_J_20120815.pdf");
        let url = issue_file_url(&sel, "2012", "08").unwrap();
        assert!(url.as_str().ends_with(&name));
        assert_eq!(url, file_url(&sel, "2012-08").unwrap());
    }

    #[test]
    fn file_url_rejects_unparsed_date() {
        let sel = Selector::new("w", "E", "PDF").unwrap();
        assert!(matches!(
            file_url(&sel, "next month"),
            Err(MagsyncError::IssueDate(_))
        ));
    }
}
