//! Issue-date parsing.
//!
//! Users can name an issue as `2012-9`, `9/2012`, or a bare month number
//! (current year implied). The output is always a `(year, two-digit
//! month)` pair of strings ready for URL splicing.

use chrono::{Datelike, Utc};

/// Parse a user-supplied issue date.
///
/// Shapes are tried in order: `YYYY-M[M]`, `M[M]/YYYY`, bare `M[M]`.
/// Returns `None` when no shape matches; the caller must treat the input
/// as unparsed.
pub fn parse_issue_date(input: &str) -> Option<(String, String)> {
    if let Some((year, month)) = input.split_once('-') {
        return combine(year, month);
    }
    if let Some((month, year)) = input.split_once('/') {
        return combine(year, month);
    }
    if month_number(input).is_some() {
        let year = Utc::now().year().to_string();
        return combine(&year, input);
    }
    None
}

fn combine(year: &str, month: &str) -> Option<(String, String)> {
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    month_number(month).map(|m| (year.to_string(), format!("{m:02}")))
}

/// A one- or two-digit month in 1..=12; anything longer never matches.
fn month_number(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => Some(m),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shapes_agree() {
        for input in ["2012-9", "2012-09", "9/2012", "09/2012"] {
            assert_eq!(
                parse_issue_date(input),
                Some(("2012".into(), "09".into())),
                "input {input}"
            );
        }
    }

    #[test]
    fn every_month_zero_padded() {
        for m in 1..=12u32 {
            let expected = Some(("2020".to_string(), format!("{m:02}")));
            assert_eq!(parse_issue_date(&format!("2020-{m}")), expected);
            assert_eq!(parse_issue_date(&format!("2020-{m:02}")), expected);
            assert_eq!(parse_issue_date(&format!("{m}/2020")), expected);
            assert_eq!(parse_issue_date(&format!("{m:02}/2020")), expected);
        }
    }

    #[test]
    fn bare_month_uses_current_year() {
        let year = Utc::now().year().to_string();
        assert_eq!(parse_issue_date("3"), Some((year.clone(), "03".into())));
        assert_eq!(parse_issue_date("11"), Some((year, "11".into())));
    }

    #[test]
    fn out_of_range_months_rejected() {
        assert_eq!(parse_issue_date("2012-0"), None);
        assert_eq!(parse_issue_date("2012-13"), None);
        assert_eq!(parse_issue_date("0/2012"), None);
        assert_eq!(parse_issue_date("13/2012"), None);
    }

    #[test]
    fn three_digit_month_never_matches() {
        assert_eq!(parse_issue_date("123"), None);
        assert_eq!(parse_issue_date("012"), None);
    }

    #[test]
    fn garbage_is_unparsed() {
        assert_eq!(parse_issue_date("latest"), None);
        assert_eq!(parse_issue_date("2012"), None);
        assert_eq!(parse_issue_date("12-2012"), None);
        assert_eq!(parse_issue_date(""), None);
    }
}
