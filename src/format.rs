//! Formatting Helpers
//!
//! Pure input-filtering, lenient number parsing, and relative-time helpers
//! shared by the form and list components.

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Strip everything but digits and decimal points from raw protein input.
///
/// Deliberately does not collapse repeated dots ("12a.3.4" becomes
/// "12.3.4"); `parse_protein` is the lenient counterpart that still
/// accepts such strings.
pub fn filter_protein_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse the longest leading numeric prefix, the way JavaScript's
/// `parseFloat` reads "12.3.4" as 12.3. None when no digit appears in the
/// prefix.
pub fn parse_protein(raw: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in raw.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + c.len_utf8();
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + c.len_utf8();
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    raw[..end].parse().ok()
}

/// Coarse "time ago" label for an entry's creation instant.
pub fn time_ago(now_ms: u64, then_ms: u64) -> String {
    let delta = now_ms.saturating_sub(then_ms);
    if delta < MINUTE_MS {
        "just now".to_string()
    } else if delta < HOUR_MS {
        plural(delta / MINUTE_MS, "minute")
    } else if delta < DAY_MS {
        plural(delta / HOUR_MS, "hour")
    } else {
        plural(delta / DAY_MS, "day")
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_digits_and_dots_only() {
        assert_eq!(filter_protein_input("12a.3.4"), "12.3.4");
        assert_eq!(filter_protein_input("-5"), "5");
        assert_eq!(filter_protein_input("abc"), "");
        assert_eq!(filter_protein_input("30"), "30");
    }

    #[test]
    fn test_parse_takes_longest_numeric_prefix() {
        assert_eq!(parse_protein("12.3.4"), Some(12.3));
        assert_eq!(parse_protein("30"), Some(30.0));
        assert_eq!(parse_protein("0.5"), Some(0.5));
        assert_eq!(parse_protein(".5"), Some(0.5));
        assert_eq!(parse_protein("12."), Some(12.0));
    }

    #[test]
    fn test_parse_rejects_digitless_input() {
        assert_eq!(parse_protein(""), None);
        assert_eq!(parse_protein("."), None);
        assert_eq!(parse_protein("g"), None);
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = 10 * DAY_MS;
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now, now - 59 * 1000), "just now");
        assert_eq!(time_ago(now, now - MINUTE_MS), "1 minute ago");
        assert_eq!(time_ago(now, now - 5 * MINUTE_MS), "5 minutes ago");
        assert_eq!(time_ago(now, now - HOUR_MS), "1 hour ago");
        assert_eq!(time_ago(now, now - 2 * HOUR_MS), "2 hours ago");
        assert_eq!(time_ago(now, now - DAY_MS), "1 day ago");
        assert_eq!(time_ago(now, now - 3 * DAY_MS), "3 days ago");
    }

    #[test]
    fn test_time_ago_saturates_on_clock_skew() {
        // an entry stamped "in the future" never underflows
        assert_eq!(time_ago(1000, 5000), "just now");
    }
}
