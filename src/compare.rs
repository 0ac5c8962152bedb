//! Line ordering built from the active sort mode

use crate::config::{SortConfig, SortMode};
use crate::field::FieldExtractor;
use crate::key::{trim_trailing_blanks, KeyCodec, SortKey};
use std::cmp::Ordering;

/// Ranked key for one line.
///
/// Variant order is part of the ordering: lines missing the selected column
/// come first (compared as whole lines), then decoded fields, then fields
/// that failed to decode (compared as raw text). This keeps the order total
/// when numeric or month decoding fails for some lines only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LineKey<'a> {
    /// The selected column is absent; carries the whole line
    Short(&'a str),
    Parsed(SortKey<'a>),
    /// The field did not decode under the active kind
    Unparsed(&'a str),
}

impl LineKey<'_> {
    /// True when the line is not ordered by its decoded column
    pub fn is_fallback(&self) -> bool {
        !matches!(self, LineKey::Parsed(_))
    }
}

/// Total order over lines for one sort run. Resolved once from the
/// configuration; comparisons never re-inspect the flags.
#[derive(Debug, Clone, Copy)]
pub struct Comparator {
    mode: SortMode,
    extractor: FieldExtractor,
    codec: KeyCodec,
    trim_trailing: bool,
}

impl Comparator {
    pub fn new(config: &SortConfig) -> Self {
        Self {
            mode: config.mode(),
            extractor: FieldExtractor::new(config.field_separator),
            codec: KeyCodec::from_config(config),
            trim_trailing: config.ignore_trailing_whitespace,
        }
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    /// Sort key of `line`
    pub fn key<'a>(&self, line: &'a str) -> LineKey<'a> {
        let line = if self.trim_trailing {
            trim_trailing_blanks(line)
        } else {
            line
        };

        match self.mode {
            SortMode::WholeLine => LineKey::Parsed(SortKey::Text(line)),
            SortMode::Column(column, _) => match self.extractor.field(line, column) {
                None => LineKey::Short(line),
                Some(field) => self
                    .codec
                    .encode(field)
                    .map_or(LineKey::Unparsed(field), LineKey::Parsed),
            },
        }
    }

    #[inline]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// True iff `a` orders strictly before `b`
    #[inline]
    pub fn less(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}
