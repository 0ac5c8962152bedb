//! Reading documents from and writing them to files
//!
//! A document is the file content split on `\n`. A trailing newline yields a
//! trailing empty line, and writing joins lines with `\n` without adding a
//! final terminator, so reading then writing reproduces the file exactly.

use crate::error::{SortContext, SortError, SortResult};
use memmap2::Mmap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension appended to an input path to name its default destination
pub const SORTED_EXTENSION: &str = ".sorted";

/// Memory-mapped input file whose lines borrow from the mapping
pub struct MappedDocument {
    name: String,
    mmap: Option<Mmap>, // None for empty files
}

impl MappedDocument {
    pub fn open(path: &Path) -> SortResult<Self> {
        let name = path.display().to_string();
        let metadata = std::fs::metadata(path).with_file_context(&name)?;
        if metadata.is_dir() {
            return Err(SortError::is_directory(&name));
        }

        let mmap = if metadata.len() == 0 {
            None
        } else {
            let file = File::open(path).with_file_context(&name)?;
            // SAFETY: the mapping is read-only and lives as long as `self`;
            // the file is not modified by this process while mapped.
            Some(unsafe { Mmap::map(&file) }.with_file_context(&name)?)
        };

        Ok(Self { name, mmap })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or_default()
    }

    /// Lines of the file; fails if the content is not UTF-8
    pub fn lines(&self) -> SortResult<Vec<&str>> {
        let text =
            std::str::from_utf8(self.bytes()).map_err(|_| SortError::invalid_utf8(&self.name))?;
        Ok(split_lines(text))
    }
}

/// Split text on `\n`. Never empty: `""` is one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Inverse of `split_lines`
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Write `lines` to `path`, replacing any existing file
pub fn write_document<S: AsRef<str>>(path: &Path, lines: &[S]) -> SortResult<()> {
    let name = path.display().to_string();
    let file = File::create(path).with_file_context(&name)?;
    let mut output = BufWriter::new(file);

    output
        .write_all(join_lines(lines).as_bytes())
        .with_file_context(&name)?;
    output.flush().with_file_context(&name)?;
    Ok(())
}

/// Default destination for a sorted input: `<input>.sorted`
pub fn sorted_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(SORTED_EXTENSION);
    PathBuf::from(path)
}
