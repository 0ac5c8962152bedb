//! Per-file sort jobs
//!
//! Every input file is an independent engine call. Files are fanned out on
//! a rayon pool; results come back in input order.

use crate::args::SortArgs;
use crate::document::{write_document, MappedDocument};
use crate::engine::{SortEngine, SortOutcome};
use crate::error::{SortError, SortResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    Written {
        input: PathBuf,
        output: PathBuf,
        lines: usize,
    },
    Checked {
        input: PathBuf,
        /// 0-based index of the first out-of-order line
        first_disorder: Option<usize>,
    },
}

impl FileReport {
    pub fn input(&self) -> &Path {
        match self {
            FileReport::Written { input, .. } | FileReport::Checked { input, .. } => input,
        }
    }
}

/// Read `path`, run the engine over it and write or check the result
pub fn process_file(path: &Path, engine: &SortEngine, args: &SortArgs) -> SortResult<FileReport> {
    // The mapping is released before the destination is opened, which may
    // be the input itself.
    let outcome = {
        let document = MappedDocument::open(path)?;
        let lines = document.lines()?;
        debug!(file = document.name(), lines = lines.len(), "read document");
        engine.run(&lines)
    };

    match outcome {
        SortOutcome::Checked { first_disorder } => {
            info!(file = %path.display(), sorted = first_disorder.is_none(), "checked");
            Ok(FileReport::Checked {
                input: path.to_path_buf(),
                first_disorder,
            })
        }
        SortOutcome::Sorted(sorted) => {
            let output = args.destination_for(path);
            write_document(&output, &sorted)?;
            info!(
                file = %path.display(),
                output = %output.display(),
                lines = sorted.len(),
                "sorted"
            );
            Ok(FileReport::Written {
                input: path.to_path_buf(),
                output,
                lines: sorted.len(),
            })
        }
    }
}

/// Process every file in `args` on a dedicated pool. The outer error covers
/// argument and pool setup; per-file failures are reported individually.
pub fn run_jobs(engine: &SortEngine, args: &SortArgs) -> SortResult<Vec<SortResult<FileReport>>> {
    args.validate()?;

    let threads = args.effective_thread_count();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| SortError::thread_pool_error(&e.to_string()))?;
    debug!(
        threads,
        files = args.files.len(),
        mode = %engine.comparator().mode(),
        "starting jobs"
    );

    Ok(pool.install(|| {
        args.files
            .par_iter()
            .map(|file| process_file(file, engine, args))
            .collect()
    }))
}
