//! Screenshot entries and their ordering

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use crate::storage::SCREENSHOT_EXTENSION;

/// Prefix of files written by the capture hotkey
pub const CAPTURE_PREFIX: &str = "ss_";

/// `DDMMYYYY_HHMMSS`, the timestamp embedded in capture file names
const TIMESTAMP_FORMAT: &str = "%d%m%Y_%H%M%S";
const TIMESTAMP_LEN: usize = 15;

/// One screenshot file. Identity is the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotEntry {
    name: String,
    created_at: Option<NaiveDateTime>,
    sequence: u32,
}

impl ScreenshotEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let (created_at, sequence) = match parse_capture_name(&name) {
            Some((stamp, sequence)) => (Some(stamp), sequence),
            None => (None, 0),
        };

        Self {
            name,
            created_at,
            sequence,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capture time encoded in the file name, if it follows the convention
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// Newest first: timestamped entries by time, then the rest by name
    pub fn listing_order(&self, other: &Self) -> Ordering {
        match (self.created_at, other.created_at) {
            (Some(a), Some(b)) => b
                .cmp(&a)
                .then_with(|| other.sequence.cmp(&self.sequence))
                .then_with(|| other.name.cmp(&self.name)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => other.name.cmp(&self.name),
        }
    }
}

/// Sort entries into listing order
pub fn sort_newest_first(entries: &mut [ScreenshotEntry]) {
    entries.sort_by(|a, b| a.listing_order(b));
}

/// File name for a capture taken at `moment`.
///
/// `sequence` 1 yields `ss_DDMMYYYY_HHMMSS.png`; higher values append
/// `_<sequence>` for captures landing in the same second.
pub fn capture_file_name(moment: &NaiveDateTime, sequence: u32) -> String {
    let stamp = moment.format(TIMESTAMP_FORMAT);
    if sequence <= 1 {
        format!("{}{}{}", CAPTURE_PREFIX, stamp, SCREENSHOT_EXTENSION)
    } else {
        format!("{}{}_{}{}", CAPTURE_PREFIX, stamp, sequence, SCREENSHOT_EXTENSION)
    }
}

/// Parse `ss_DDMMYYYY_HHMMSS[_n].png` into its timestamp and sequence
pub fn parse_capture_name(name: &str) -> Option<(NaiveDateTime, u32)> {
    let stem = name
        .strip_prefix(CAPTURE_PREFIX)?
        .strip_suffix(SCREENSHOT_EXTENSION)?;

    let stamp = stem.get(..TIMESTAMP_LEN)?;
    let rest = stem.get(TIMESTAMP_LEN..)?;

    let well_formed = stamp
        .bytes()
        .enumerate()
        .all(|(i, b)| if i == 8 { b == b'_' } else { b.is_ascii_digit() });
    if !well_formed {
        return None;
    }

    let sequence = if rest.is_empty() {
        1
    } else {
        let digits = rest.strip_prefix('_')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()?
    };

    let moment = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some((moment, sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut entries: Vec<_> = names.iter().map(|n| ScreenshotEntry::new(*n)).collect();
        sort_newest_first(&mut entries);
        entries.into_iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_capture_file_name() {
        let moment = at(2024, 1, 2, 8, 5, 9);
        assert_eq!(capture_file_name(&moment, 1), "ss_02012024_080509.png");
        assert_eq!(capture_file_name(&moment, 3), "ss_02012024_080509_3.png");
    }

    #[test]
    fn test_parse_capture_name() {
        assert_eq!(
            parse_capture_name("ss_31122023_235959.png"),
            Some((at(2023, 12, 31, 23, 59, 59), 1))
        );
        assert_eq!(
            parse_capture_name("ss_31122023_235959_12.png"),
            Some((at(2023, 12, 31, 23, 59, 59), 12))
        );
    }

    #[test]
    fn test_parse_rejects_other_names() {
        for name in [
            "vacation.png",
            "ss_31122023_235959.jpg",
            "ss_32122023_235959.png",
            "ss_3112202_2359590.png",
            "ss_31122023_235959_.png",
            "ss_31122023_235959x.png",
            "ss_+1122023_235959.png",
        ] {
            assert!(parse_capture_name(name).is_none(), "{} should not parse", name);
        }
    }

    #[test]
    fn test_newest_first_by_timestamp() {
        // Lexicographic order on DDMMYYYY would put 31 January first
        assert_eq!(
            sorted(&["ss_31012024_090000.png", "ss_01022024_090000.png"]),
            vec!["ss_01022024_090000.png", "ss_31012024_090000.png"]
        );
    }

    #[test]
    fn test_unconventional_names_follow_timestamped() {
        assert_eq!(
            sorted(&["apple.png", "ss_01012024_120000.png", "vacation.png", "ss_02012024_080000.png"]),
            vec![
                "ss_02012024_080000.png",
                "ss_01012024_120000.png",
                "vacation.png",
                "apple.png",
            ]
        );
    }

    #[test]
    fn test_same_second_sequence_order() {
        assert_eq!(
            sorted(&[
                "ss_01012024_120000.png",
                "ss_01012024_120000_10.png",
                "ss_01012024_120000_2.png",
            ]),
            vec![
                "ss_01012024_120000_10.png",
                "ss_01012024_120000_2.png",
                "ss_01012024_120000.png",
            ]
        );
    }

    #[test]
    fn test_entry_accessors() {
        let entry = ScreenshotEntry::new("ss_05032024_101500.png");
        assert_eq!(entry.name(), "ss_05032024_101500.png");
        assert_eq!(entry.created_at(), Some(at(2024, 3, 5, 10, 15, 0)));
        assert!(ScreenshotEntry::new("notes.png").created_at().is_none());
    }
}
