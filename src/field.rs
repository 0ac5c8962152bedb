//! Field splitting and column lookup

/// Splits lines into fields, either on runs of ASCII whitespace or on every
/// occurrence of an explicit separator character.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor {
    separator: Option<char>,
}

impl FieldExtractor {
    pub fn new(separator: Option<char>) -> Self {
        Self { separator }
    }

    /// All fields of `line`, in order.
    ///
    /// With no separator, leading and trailing whitespace produce no fields
    /// and runs of whitespace count as one break. An explicit separator is
    /// never collapsed: `"a::b"` split on `':'` has an empty second field.
    pub fn fields<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.separator {
            Some(sep) => line.split(sep).collect(),
            None => line.split_ascii_whitespace().collect(),
        }
    }

    /// The `k`-th field of `line` (1-based). `k == 0` returns the whole line
    /// unmodified; `None` means the line has fewer than `k` fields.
    pub fn field<'a>(&self, line: &'a str, k: usize) -> Option<&'a str> {
        if k == 0 {
            return Some(line);
        }
        match self.separator {
            Some(sep) => line.split(sep).nth(k - 1),
            None => line.split_ascii_whitespace().nth(k - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_fields() {
        let extractor = FieldExtractor::default();
        assert_eq!(extractor.fields("  10\t x  y "), vec!["10", "x", "y"]);
        assert!(extractor.fields("").is_empty());
        assert!(extractor.fields("   ").is_empty());
    }

    #[test]
    fn test_separator_is_not_collapsed() {
        let extractor = FieldExtractor::new(Some(':'));
        assert_eq!(extractor.fields("a::b"), vec!["a", "", "b"]);
        assert_eq!(extractor.field("a::b", 2), Some(""));
        assert_eq!(extractor.field("a::b", 3), Some("b"));
        assert_eq!(extractor.field("a::b", 4), None);
    }

    #[test]
    fn test_column_zero_is_whole_line() {
        let extractor = FieldExtractor::default();
        assert_eq!(extractor.field(" spaced  line ", 0), Some(" spaced  line "));
    }

    #[test]
    fn test_out_of_range_column() {
        let extractor = FieldExtractor::default();
        assert_eq!(extractor.field("one two", 2), Some("two"));
        assert_eq!(extractor.field("one two", 3), None);
        assert_eq!(extractor.field("", 1), None);
    }
}
