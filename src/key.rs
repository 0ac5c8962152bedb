//! Conversion of raw fields into comparable keys

use crate::config::{ColumnKind, SortConfig};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A decoded field. Keys are only compared against keys produced by the
/// same `KeyCodec`, so in practice both sides always share a variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(i64),
    /// Magnitude first, then suffix
    SuffixedNumber(u64, String),
    /// 1 for January through 12 for December
    Month(u8),
}

/// Mode-specific decoder for a single field
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyCodec {
    kind: ColumnKind,
    month_case_sensitive: bool,
}

impl KeyCodec {
    pub fn new(kind: ColumnKind, month_case_sensitive: bool) -> Self {
        Self {
            kind,
            month_case_sensitive,
        }
    }

    pub fn from_config(config: &SortConfig) -> Self {
        Self::new(config.column_kind(), config.month_case_sensitive)
    }

    /// Decode `field`. `None` means the field does not parse under the
    /// active kind; text and suffixed numbers always succeed.
    pub fn encode<'a>(&self, field: &'a str) -> Option<SortKey<'a>> {
        match self.kind {
            ColumnKind::Text => Some(SortKey::Text(field)),
            ColumnKind::Number => parse_number(field).map(SortKey::Number),
            ColumnKind::SuffixedNumber => {
                let (number, suffix) = split_numeric_suffix(field);
                Some(SortKey::SuffixedNumber(number, suffix))
            }
            ColumnKind::Month => {
                parse_month(field, self.month_case_sensitive).map(SortKey::Month)
            }
        }
    }
}

/// Parse a base-10 signed integer with an optional leading sign.
/// Out-of-range values do not parse.
pub fn parse_number(field: &str) -> Option<i64> {
    field.parse::<i64>().ok()
}

/// Split a field into its digits, read as one number, and every other
/// character, kept in order as the suffix: `"10k"` is `(10, "k")`, `"abc"`
/// is `(0, "abc")`. Magnitudes beyond `u64::MAX` saturate.
pub fn split_numeric_suffix(field: &str) -> (u64, String) {
    let mut number: u64 = 0;
    let mut suffix = String::new();

    for ch in field.chars() {
        match ch.to_digit(10) {
            Some(digit) => {
                number = number.saturating_mul(10).saturating_add(u64::from(digit));
            }
            None => suffix.push(ch),
        }
    }

    (number, suffix)
}

/// Parse a three-letter month abbreviation into 1..=12.
/// The whole field must be the abbreviation; `"January"` does not parse.
pub fn parse_month(field: &str, case_sensitive: bool) -> Option<u8> {
    if field.len() != 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|month| {
            if case_sensitive {
                *month == field
            } else {
                month.eq_ignore_ascii_case(field)
            }
        })
        .map(|idx| idx as u8 + 1)
}

/// Strip trailing spaces and tabs
pub fn trim_trailing_blanks(s: &str) -> &str {
    s.trim_end_matches(|c| c == ' ' || c == '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("123"), Some(123));
        assert_eq!(parse_number("-456"), Some(-456));
        assert_eq!(parse_number("+789"), Some(789));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("12.5"), None);
        assert_eq!(parse_number("99999999999999999999"), None);
    }

    #[test]
    fn test_split_numeric_suffix() {
        assert_eq!(split_numeric_suffix("10k"), (10, "k".to_string()));
        assert_eq!(split_numeric_suffix("9"), (9, String::new()));
        assert_eq!(split_numeric_suffix("10m"), (10, "m".to_string()));
        assert_eq!(split_numeric_suffix("abc"), (0, "abc".to_string()));
        assert_eq!(split_numeric_suffix(""), (0, String::new()));
        assert_eq!(split_numeric_suffix("a1b2"), (12, "ab".to_string()));
        assert_eq!(
            split_numeric_suffix("123456789012345678901234567890"),
            (u64::MAX, String::new())
        );
    }

    #[test]
    fn test_suffixed_keys_order() {
        let codec = KeyCodec::new(ColumnKind::SuffixedNumber, false);
        let nine = codec.encode("9").expect("suffix keys always decode");
        let ten_k = codec.encode("10k").expect("suffix keys always decode");
        let ten_m = codec.encode("10m").expect("suffix keys always decode");
        assert!(nine < ten_k);
        assert!(ten_k < ten_m);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("Jan", false), Some(1));
        assert_eq!(parse_month("dec", false), Some(12));
        assert_eq!(parse_month("MAY", false), Some(5));
        assert_eq!(parse_month("MAY", true), None);
        assert_eq!(parse_month("May", true), Some(5));
        assert_eq!(parse_month("January", false), None);
        assert_eq!(parse_month("Foo", false), None);
        assert_eq!(parse_month("", false), None);
    }

    #[test]
    fn test_number_codec_reports_failure() {
        let codec = KeyCodec::new(ColumnKind::Number, false);
        assert_eq!(codec.encode("42"), Some(SortKey::Number(42)));
        assert_eq!(codec.encode("x42"), None);
    }

    #[test]
    fn test_trim_trailing_blanks() {
        assert_eq!(trim_trailing_blanks("abc \t "), "abc");
        assert_eq!(trim_trailing_blanks("  abc"), "  abc");
        assert_eq!(trim_trailing_blanks("abc\n"), "abc\n");
    }
}
