//! File-level options: inputs, destinations and the worker count

use crate::document::sorted_path;
use crate::error::{SortError, SortResult};
use std::path::{Path, PathBuf};

/// File-level options around the engine: what to read, where to write,
/// and how many files to process at once.
#[derive(Debug, Clone, Default)]
pub struct SortArgs {
    pub files: Vec<PathBuf>,
    /// Explicit destination; only valid with a single input file
    pub output: Option<PathBuf>,
    /// Worker threads for processing several files (default: CPU count)
    pub parallel_threads: Option<usize>,
}

impl SortArgs {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_parallel_threads(mut self, threads: Option<usize>) -> Self {
        self.parallel_threads = threads;
        self
    }

    pub fn validate(&self) -> SortResult<()> {
        if self.files.is_empty() {
            return Err(SortError::conflicting_options("no input files given"));
        }

        if self.output.is_some() && self.files.len() > 1 {
            return Err(SortError::conflicting_options(
                "--output requires exactly one input file",
            ));
        }

        // A destination that is also an input would be truncated while
        // another job still has it mapped. With --output there is a single
        // input, which may be its own destination.
        if self.output.is_none() {
            for input in &self.files {
                let destination = sorted_path(input);
                if let Some(other) = self.files.iter().find(|f| same_path(f, &destination)) {
                    return Err(SortError::conflicting_options(&format!(
                        "input {} is the destination of {}",
                        other.display(),
                        input.display()
                    )));
                }
            }
        }

        if let Some(threads) = self.parallel_threads {
            if threads == 0 {
                return Err(SortError::thread_pool_error(
                    "thread count must be positive",
                ));
            }
            if threads > 1024 {
                return Err(SortError::thread_pool_error(
                    "too many threads (maximum 1024)",
                ));
            }
        }

        Ok(())
    }

    /// Get effective thread count
    pub fn effective_thread_count(&self) -> usize {
        self.parallel_threads
            .unwrap_or_else(num_cpus::get)
            .min(self.files.len().max(1))
    }

    /// Destination for `input`: the explicit output if set, else `<input>.sorted`
    pub fn destination_for(&self, input: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| sorted_path(input))
    }
}

/// Whether `a` and `b` name the same file, by spelling or, when both
/// exist, by canonical path
fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
