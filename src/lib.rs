//! Line-oriented sort utility
//!
//! The engine reorders an in-memory sequence of lines by whole line or by a
//! single column, read as text, integer, number with suffix (`10k`) or
//! month abbreviation, with optional reversal, deduplication and a
//! sortedness check that shares the sort's ordering. File handling and
//! parallel processing of several files sit around it.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Engine
pub mod field;
pub mod key;
pub mod compare;
pub mod engine;
pub mod check;

// File handling
pub mod args;
pub mod document;
pub mod job;
pub mod logging;

// Re-export commonly used types
pub use args::SortArgs;
pub use check::{is_sorted, SortednessChecker};
pub use compare::Comparator;
pub use config::{ColumnKind, SortConfig, SortConfigBuilder, SortMode};
pub use engine::{dedupe_lines, reverse_lines, run, sort_lines, SortEngine, SortOutcome};
pub use error::{SortError, SortResult};
pub use job::FileReport;

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Sort (or check) every input file and print one status line per file.
/// Returns the process exit code: 0 when everything succeeded, 1 when a
/// checked file is out of order, 2 when any file failed.
pub fn sort(config: &SortConfig, args: &SortArgs) -> SortResult<i32> {
    let engine = SortEngine::new(config.clone())?;
    let mut exit_code = EXIT_SUCCESS;

    for result in job::run_jobs(&engine, args)? {
        match result {
            Ok(FileReport::Written { output, lines, .. }) => {
                println!("sorted {lines} lines, written to {}", output.display());
            }
            Ok(FileReport::Checked {
                input,
                first_disorder: None,
            }) => {
                println!("{}: sorted", input.display());
            }
            Ok(FileReport::Checked {
                input,
                first_disorder: Some(idx),
            }) => {
                let err = SortError::not_sorted(&input.display().to_string(), idx + 1);
                eprintln!("sort: {err}");
                exit_code = exit_code.max(err.exit_code());
            }
            Err(err) => {
                eprintln!("sort: {err}");
                exit_code = exit_code.max(err.exit_code());
            }
        }
    }

    Ok(exit_code)
}
