// Tolerant timestamp handling for upstream date fields

use chrono::{DateTime, NaiveDate};

/// Parse an upstream timestamp string to epoch seconds (UTC).
///
/// RFC3339 first ("2026-03-01T10:00:00Z", offset forms included), then bare
/// "YYYY-MM-DD" at midnight UTC. Anything else is None; unparsable dates are
/// dropped rather than poisoning downstream reductions.
pub fn parse_ts(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp());
    }
    None
}

/// Min/max over a collection of optional timestamps, skipping the missing
/// ones. None when nothing parses.
pub fn date_bounds<I>(timestamps: I) -> Option<(i64, i64)>
where
    I: IntoIterator<Item = Option<i64>>,
{
    let mut bounds: Option<(i64, i64)> = None;
    for ts in timestamps.into_iter().flatten() {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(ts), max.max(ts)),
            None => (ts, ts),
        });
    }
    bounds
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(parse_ts("1970-01-01T00:00:10Z"), Some(10));
        assert!(parse_ts("2026-03-01T10:00:00+02:00").is_some());
    }

    #[test]
    fn test_parse_bare_date() {
        assert_eq!(parse_ts("1970-01-02"), Some(86_400));
    }

    #[test]
    fn test_unparsable_is_none() {
        assert_eq!(parse_ts("not a date"), None);
        assert_eq!(parse_ts(""), None);
        assert_eq!(parse_ts("03/01/2026"), None);
    }

    #[test]
    fn test_date_bounds_skips_missing() {
        let bounds = date_bounds(vec![Some(5), None, Some(2), Some(9), None]);
        assert_eq!(bounds, Some((2, 9)));
        assert_eq!(date_bounds(vec![None, None]), None);
        assert_eq!(date_bounds(Vec::new()), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.666_666), 6.67);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.5), 2.5);
    }
}
