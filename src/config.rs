//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// How the selected column is decoded before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Plain string comparison
    #[default]
    Text,
    /// Base-10 signed integer
    Number,
    /// Digits as magnitude, remaining characters as tie-break suffix (e.g. `10k`)
    SuffixedNumber,
    /// Three-letter month abbreviation
    Month,
}

/// Resolved comparison rule for one sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Compare whole lines as strings
    WholeLine,
    /// Compare the given 1-based column, decoded as `ColumnKind`
    Column(usize, ColumnKind),
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    /// Column to sort by (1-based); 0 selects the whole line
    pub column: usize,
    /// Parse the column as an integer
    pub numeric: bool,
    /// Parse the column as a number with a suffix
    pub numeric_suffix: bool,
    /// Parse the column as a month abbreviation
    pub month: bool,
    /// Match month abbreviations case-sensitively (`Jan` but not `JAN`)
    pub month_case_sensitive: bool,
    /// Strip trailing spaces and tabs before comparing
    pub ignore_trailing_whitespace: bool,
    /// Field separator character; `None` splits on runs of whitespace
    pub field_separator: Option<char>,
    /// Reverse the sorted output
    pub reverse: bool,
    /// Output only the first occurrence of each line
    pub unique: bool,
    /// Check if input is already sorted instead of sorting it
    pub check: bool,
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the column to sort by
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the column decoding rule, clearing any other kind flags
    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.numeric = kind == ColumnKind::Number;
        self.numeric_suffix = kind == ColumnKind::SuffixedNumber;
        self.month = kind == ColumnKind::Month;
        self
    }

    /// Enable reverse sorting
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enable unique output
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Enable check mode
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Enable trailing whitespace trimming
    pub fn with_ignore_trailing_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_trailing_whitespace = ignore;
        self
    }

    /// Set field separator
    pub fn with_field_separator(mut self, separator: Option<char>) -> Self {
        self.field_separator = separator;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if let Some(sep) = self.field_separator {
            if !sep.is_ascii() {
                return Err(SortError::invalid_field_separator(&format!(
                    "{sep} (only single ASCII characters are supported)"
                )));
            }
            if sep == '\n' {
                return Err(SortError::invalid_field_separator(
                    "newline cannot separate fields",
                ));
            }
        }

        Ok(())
    }

    /// Decoding rule for the selected column. When more than one kind flag
    /// is set the suffix rule wins over numeric, and numeric over month.
    pub fn column_kind(&self) -> ColumnKind {
        if self.numeric_suffix {
            ColumnKind::SuffixedNumber
        } else if self.numeric {
            ColumnKind::Number
        } else if self.month {
            ColumnKind::Month
        } else {
            ColumnKind::Text
        }
    }

    /// Resolve the flags into a single comparison rule
    pub fn mode(&self) -> SortMode {
        match self.column {
            0 => SortMode::WholeLine,
            column => SortMode::Column(column, self.column_kind()),
        }
    }

    /// True when kind flags are set but ignored because no column is selected
    pub fn has_ignored_kind_flags(&self) -> bool {
        self.column == 0 && (self.numeric || self.numeric_suffix || self.month)
    }
}

impl FromStr for ColumnKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "lexicographic" | "default" => Ok(ColumnKind::Text),
            "numeric" | "n" => Ok(ColumnKind::Number),
            "human-numeric" | "h" => Ok(ColumnKind::SuffixedNumber),
            "month" | "m" => Ok(ColumnKind::Month),
            _ => Err(SortError::conflicting_options(&format!(
                "unknown sort kind: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnKind::Text => "text",
            ColumnKind::Number => "numeric",
            ColumnKind::SuffixedNumber => "human-numeric",
            ColumnKind::Month => "month",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::WholeLine => write!(f, "whole-line"),
            SortMode::Column(column, kind) => write!(f, "column {column} ({kind})"),
        }
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
    raw_column: i64,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
            raw_column: 0,
        }
    }

    /// Select the column as given by the caller; negative values are
    /// rejected by `build`
    pub fn column(mut self, column: i64) -> Self {
        self.raw_column = column;
        self
    }

    /// Set the column decoding rule
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.config = self.config.with_kind(kind);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.config.numeric = true;
        self
    }

    pub fn numeric_suffix(mut self) -> Self {
        self.config.numeric_suffix = true;
        self
    }

    pub fn month(mut self) -> Self {
        self.config.month = true;
        self
    }

    pub fn month_case_sensitive(mut self) -> Self {
        self.config.month_case_sensitive = true;
        self
    }

    pub fn ignore_trailing_whitespace(mut self) -> Self {
        self.config.ignore_trailing_whitespace = true;
        self
    }

    /// Enable reverse sorting
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    /// Enable check mode
    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    /// Set field separator
    pub fn field_separator(mut self, separator: char) -> Self {
        self.config.field_separator = Some(separator);
        self
    }

    /// Build the final configuration
    pub fn build(mut self) -> SortResult<SortConfig> {
        self.config.column = usize::try_from(self.raw_column)
            .map_err(|_| SortError::invalid_column(self.raw_column))?;
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset configurations for common use cases
pub mod presets {
    use super::*;

    /// Integer ordering of the given column
    pub fn numeric(column: usize) -> SortConfig {
        SortConfig::new()
            .with_column(column)
            .with_kind(ColumnKind::Number)
    }

    /// Suffixed-number ordering of the given column (`9 < 10k < 10m`)
    pub fn human_numeric(column: usize) -> SortConfig {
        SortConfig::new()
            .with_column(column)
            .with_kind(ColumnKind::SuffixedNumber)
    }

    /// Month-name ordering of the given column
    pub fn month(column: usize) -> SortConfig {
        SortConfig::new()
            .with_column(column)
            .with_kind(ColumnKind::Month)
    }

    /// Configuration for sorting with unique output
    pub fn unique() -> SortConfig {
        SortConfig::new().with_unique(true)
    }

    /// Configuration for reverse sorting
    pub fn reverse() -> SortConfig {
        SortConfig::new().with_reverse(true)
    }

    /// Configuration for check mode
    pub fn check() -> SortConfig {
        SortConfig::new().with_check(true)
    }
}
