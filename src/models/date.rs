use chrono::{DateTime, NaiveDate};

/// Parse the date strings found in published content.
///
/// The feeds are not consistent: some carry full RFC 3339 timestamps, some
/// bare `YYYY-MM-DD` dates, some `DD/MM/YYYY`. Returns `None` for anything
/// unrecognized rather than failing the render.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    None
}

/// Format a raw date string for display.
///
/// Malformed dates pass through unchanged; showing the raw value beats
/// showing nothing.
pub fn display_date(raw: &str) -> String {
    match parse_flexible(raw) {
        Some(d) => d.format("%-d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let d = parse_flexible("2024-05-12").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
    }

    #[test]
    fn test_parse_rfc3339() {
        let d = parse_flexible("2024-05-12T08:30:00+07:00").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
    }

    #[test]
    fn test_parse_slash_forms() {
        assert_eq!(
            parse_flexible("2024/05/12"),
            NaiveDate::from_ymd_opt(2024, 5, 12)
        );
        assert_eq!(
            parse_flexible("12/05/2024"),
            NaiveDate::from_ymd_opt(2024, 5, 12)
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_flexible("yesterday"), None);
        assert_eq!(parse_flexible(""), None);
    }

    #[test]
    fn test_display_falls_back_to_raw() {
        assert_eq!(display_date("not a date"), "not a date");
        assert_eq!(display_date("2024-05-12"), "12 May 2024");
    }
}
