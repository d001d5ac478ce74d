//! Feed parsing: raw XML bytes → a validated [`Feed`].
//!
//! The publisher encodes the (magazine, language, format) triple only in
//! the channel description, as `"<lowercase code><UPPERCASE lang> <FORMAT>"`
//! (e.g. `"gE MP3"`). Parsing recovers and validates that triple; a feed
//! whose description does not decode to known table entries is rejected
//! rather than carried forward unvalidated.

use rss::Channel;

use crate::app::{MagsyncError, Result};
use crate::domain::{Feed, Item, Selector};

/// Parse one feed document. Fails with a parse error when the document has
/// no `channel`, and a validation error when the recovered triple is not
/// in the tables. A channel with zero items is a valid empty feed.
pub fn parse(body: &[u8]) -> Result<Feed> {
    let channel = Channel::read_from(body).map_err(|e| MagsyncError::Parse(e.to_string()))?;

    let description = channel.description().trim().to_string();
    let selector = selector_from_description(&description)?;

    // Prefer the atom self-link's href; fall back to the plain <link> text.
    let url = channel
        .atom_ext()
        .and_then(|ext| ext.links().first().map(|l| l.href().to_string()))
        .or_else(|| Some(channel.link().to_string()).filter(|l| !l.is_empty()));

    let items = channel
        .items()
        .iter()
        .map(|item| Item {
            title: item.title().unwrap_or_default().to_string(),
            link: item.link().unwrap_or_default().to_string(),
            pub_date: item.pub_date().unwrap_or_default().to_string(),
        })
        .collect();

    Ok(Feed {
        title: channel.title().to_string(),
        description,
        language: channel.language().map(String::from),
        url,
        image_url: channel.image().map(|img| img.url().to_string()),
        items,
        selector,
    })
}

/// Decode `"<code><LANG> <FORMAT>"` into a validated selector.
fn selector_from_description(description: &str) -> Result<Selector> {
    let (prefix, format) = description
        .split_once(' ')
        .ok_or_else(|| MagsyncError::Parse(format!("malformed feed description: {description:?}")))?;

    let (code, language) = split_code_prefix(prefix)
        .ok_or_else(|| MagsyncError::Parse(format!("malformed feed description: {description:?}")))?;

    Selector::new(code, language, format)
}

/// Split a run of lowercase letters followed by a run of uppercase
/// letters, e.g. `"wAL"` → `("w", "AL")`. Anything else is malformed.
fn split_code_prefix(prefix: &str) -> Option<(&str, &str)> {
    let boundary = prefix.find(|c: char| c.is_ascii_uppercase())?;
    let (code, language) = prefix.split_at(boundary);
    if code.is_empty()
        || language.is_empty()
        || !code.bytes().all(|b| b.is_ascii_lowercase())
        || !language.bytes().all(|b| b.is_ascii_uppercase())
    {
        return None;
    }
    Some((code, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Format, Magazine};

    fn feed_xml(description: &str, items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>Awake! (MP3)</title>
    <description>{description}</description>
    <language>en</language>
    <atom:link href="https://www.jw.org/apps/index.xjp?option=x" rel="self"/>
    <image>
      <url>https://www.jw.org/img/g.jpg</url>
      <title>Awake!</title>
      <link>https://www.jw.org</link>
    </image>
    {items}
  </channel>
</rss>"#
        )
    }

    const TWO_ITEMS: &str = r#"
    <item>
      <title>Awake! September 2012</title>
      <link>https://download.jw.org/files/media_magazines/g_E_201209.mp3</link>
      <pubDate>Sat, 01 Sep 2012 00:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Awake! October 2012</title>
      <link>https://download.jw.org/files/media_magazines/g_E_201210.mp3</link>
      <pubDate>Mon, 01 Oct 2012 00:00:00 GMT</pubDate>
    </item>"#;

    #[test]
    fn parses_channel_scalars_and_items() {
        let feed = parse(feed_xml("gE MP3", TWO_ITEMS).as_bytes()).unwrap();

        assert_eq!(feed.title, "Awake! (MP3)");
        assert_eq!(feed.language.as_deref(), Some("en"));
        assert_eq!(
            feed.url.as_deref(),
            Some("https://www.jw.org/apps/index.xjp?option=x")
        );
        assert_eq!(
            feed.image_url.as_deref(),
            Some("https://www.jw.org/img/g.jpg")
        );
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].title, "Awake! September 2012");
        assert_eq!(
            feed.items[1].link,
            "https://download.jw.org/files/media_magazines/g_E_201210.mp3"
        );
        assert_eq!(feed.items[0].pub_date, "Sat, 01 Sep 2012 00:00:00 GMT");
    }

    #[test]
    fn description_ge_mp3_selector() {
        let feed = parse(feed_xml("gE MP3", "").as_bytes()).unwrap();
        assert_eq!(feed.selector.magazine, Magazine::Awake);
        assert_eq!(feed.selector.language.code(), "E");
        assert_eq!(feed.selector.format, Format::Mp3);
    }

    #[test]
    fn description_wal_pdf_selector() {
        let feed = parse(feed_xml("wAL PDF", "").as_bytes()).unwrap();
        assert_eq!(feed.selector.magazine, Magazine::Watchtower);
        assert_eq!(feed.selector.language.code(), "AL");
        assert_eq!(feed.selector.format, Format::Pdf);
    }

    #[test]
    fn zero_items_is_a_valid_empty_feed() {
        let feed = parse(feed_xml("gE MP3", "").as_bytes()).unwrap();
        assert!(feed.items.is_empty());
    }

    #[test]
    fn missing_channel_is_parse_error() {
        let xml = r#"<?xml version="1.0"?><html><body>nope</body></html>"#;
        assert!(matches!(parse(xml.as_bytes()), Err(MagsyncError::Parse(_))));
    }

    #[test]
    fn unknown_code_in_description_is_validation_error() {
        let result = parse(feed_xml("zzE MP3", "").as_bytes());
        assert!(matches!(result, Err(MagsyncError::Validation { .. })));
    }

    #[test]
    fn malformed_description_is_parse_error() {
        for desc in ["NOFORMAT", "GE MP3", "g3 MP3"] {
            let result = parse(feed_xml(desc, "").as_bytes());
            assert!(result.is_err(), "description {desc:?} should fail");
        }
    }

    #[test]
    fn split_code_prefix_shapes() {
        assert_eq!(split_code_prefix("gE"), Some(("g", "E")));
        assert_eq!(split_code_prefix("wAL"), Some(("w", "AL")));
        assert_eq!(split_code_prefix("wsKO"), Some(("ws", "KO")));
        assert_eq!(split_code_prefix("E"), None);
        assert_eq!(split_code_prefix("g"), None);
        assert_eq!(split_code_prefix("gEx"), None);
    }
}
