//! Date validation against a day/month/year token format
//!
//! The format mini-language is a fixed subset of the familiar
//! `yyyy-MM-dd` token style:
//!
//! | token | meaning |
//! |---|---|
//! | `yyyy`, `y` | full year |
//! | `yy` | two-digit year |
//! | `M`, `MM` | month 1-12 |
//! | `d`, `dd` | day of month |
//! | `H`, `HH` | hour 0-23 |
//! | `m`, `mm` | minute |
//! | `s`, `ss` | second |
//!
//! Anything else alphabetic (month names, 12-hour clocks, zones, quoted
//! literals) is unsupported and fails the check. Non-alphabetic characters
//! match themselves. Parsing is strict: the whole string must be consumed,
//! the calendar must agree (no month 13, no Feb 29 off leap years), and a
//! format carrying date tokens must name year, month, and day. Naive
//! `chrono` types keep the interpretation free of timezone and locale.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

struct Translated {
    pattern: String,
    has_date: bool,
    has_time: bool,
}

/// Translates a token format into a chrono strftime pattern, tracking which
/// field groups it names. Unsupported tokens or an incomplete date (month
/// without year, etc.) yield `None`.
fn translate(format: &str) -> Option<Translated> {
    let mut pattern = String::with_capacity(format.len() + 4);
    let (mut has_year, mut has_month, mut has_day) = (false, false, false);
    let mut has_time = false;

    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_alphabetic() {
            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }
            let spec = match (c, run) {
                ('y', 1) | ('y', 4) => {
                    has_year = true;
                    "%Y"
                }
                ('y', 2) => {
                    has_year = true;
                    "%y"
                }
                ('M', 1..=2) => {
                    has_month = true;
                    "%m"
                }
                ('d', 1..=2) => {
                    has_day = true;
                    "%d"
                }
                ('H', 1..=2) => {
                    has_time = true;
                    "%H"
                }
                ('m', 1..=2) => {
                    has_time = true;
                    "%M"
                }
                ('s', 1..=2) => {
                    has_time = true;
                    "%S"
                }
                _ => return None,
            };
            pattern.push_str(spec);
        } else if c == '%' {
            pattern.push_str("%%");
        } else {
            pattern.push(c);
        }
    }

    let any_date = has_year || has_month || has_day;
    if any_date && !(has_year && has_month && has_day) {
        return None;
    }

    Some(Translated {
        pattern,
        has_date: any_date,
        has_time,
    })
}

/// Validates that `text` parses completely against the given token format.
///
/// Time-bearing formats need at least hour and minute to form a parseable
/// time; seconds default to zero when the format omits them.
pub fn is_valid_date(text: &str, format: &str) -> bool {
    let Some(t) = translate(format) else {
        return false;
    };
    match (t.has_date, t.has_time) {
        (true, true) => NaiveDateTime::parse_from_str(text, &t.pattern).is_ok(),
        (true, false) => NaiveDate::parse_from_str(text, &t.pattern).is_ok(),
        (false, true) => NaiveTime::parse_from_str(text, &t.pattern).is_ok(),
        (false, false) => false,
    }
}
