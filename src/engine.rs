//! In-memory sort pipeline
//!
//! Lines are keyed once, stably sorted, then optionally reversed and
//! deduplicated. Check mode only reports the first out-of-order line.

use crate::check::SortednessChecker;
use crate::compare::{Comparator, LineKey};
use crate::config::SortConfig;
use crate::error::SortResult;
use itertools::Itertools;
use std::hash::Hash;
use tracing::debug;

/// Result of one engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// The reordered document
    Sorted(Vec<String>),
    /// Check-only result; `first_disorder` is the 0-based index of the
    /// first out-of-order line
    Checked { first_disorder: Option<usize> },
}

impl SortOutcome {
    /// Sorted lines, if this was not a check-only run
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            SortOutcome::Sorted(lines) => Some(lines),
            SortOutcome::Checked { .. } => None,
        }
    }

    /// Check result, if this was a check-only run
    pub fn is_sorted(&self) -> Option<bool> {
        match self {
            SortOutcome::Sorted(_) => None,
            SortOutcome::Checked { first_disorder } => Some(first_disorder.is_none()),
        }
    }
}

/// Sort pipeline for one configuration: sort, then reverse, then dedupe,
/// or only the sortedness check in check mode.
#[derive(Debug, Clone)]
pub struct SortEngine {
    config: SortConfig,
    comparator: Comparator,
}

impl SortEngine {
    /// Validate `config` and resolve its comparator. Fails before any
    /// comparison runs.
    pub fn new(config: SortConfig) -> SortResult<Self> {
        config.validate()?;
        let comparator = Comparator::new(&config);
        debug!(
            mode = %comparator.mode(),
            reverse = config.reverse,
            unique = config.unique,
            check = config.check,
            "resolved sort mode"
        );
        Ok(Self { config, comparator })
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    pub fn run<S: AsRef<str>>(&self, document: &[S]) -> SortOutcome {
        if self.config.check {
            let first_disorder = SortednessChecker::new(&self.comparator)
                .descending(self.config.reverse)
                .first_disorder(document);
            return SortOutcome::Checked { first_disorder };
        }

        let mut output = sort_lines(document, &self.comparator);
        if self.config.reverse {
            output = reverse_lines(output);
        }
        if self.config.unique {
            output = dedupe_lines(output);
        }
        SortOutcome::Sorted(output)
    }
}

/// Run the full pipeline for `config` over `document`
pub fn run<S: AsRef<str>>(document: &[S], config: &SortConfig) -> SortResult<SortOutcome> {
    Ok(SortEngine::new(config.clone())?.run(document))
}

/// Stable sort of `document` under `comparator` into a new sequence.
/// Each line's key is computed once; equal keys keep their input order.
pub fn sort_lines<S: AsRef<str>>(document: &[S], comparator: &Comparator) -> Vec<String> {
    if document.len() < 2 {
        return document.iter().map(|line| line.as_ref().to_string()).collect();
    }

    let mut keyed: Vec<(LineKey<'_>, usize)> = document
        .iter()
        .enumerate()
        .map(|(idx, line)| (comparator.key(line.as_ref()), idx))
        .collect();

    let fallbacks = keyed.iter().filter(|(key, _)| key.is_fallback()).count();
    if fallbacks > 0 {
        debug!(
            fallbacks,
            lines = document.len(),
            "lines ordered by fallback rule"
        );
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    keyed
        .into_iter()
        .map(|(_, idx)| document[idx].as_ref().to_string())
        .collect()
}

/// Opposite order of `lines`
pub fn reverse_lines<T>(mut lines: Vec<T>) -> Vec<T> {
    lines.reverse();
    lines
}

/// Keep the first occurrence of each distinct line, preserving order.
/// Equality is global, not only between neighbours.
pub fn dedupe_lines<T: Clone + Eq + Hash>(lines: Vec<T>) -> Vec<T> {
    lines.into_iter().unique().collect()
}
