//! File Helpers
//!
//! Thin wrappers over `std::fs` that attach the offending path to every
//! failure. Each fallible helper returns [`FileError`]; the variant names the
//! operation that failed and [`FileError::kind`] exposes the underlying
//! `io::ErrorKind`.
//!
//! Failures are also emitted as `debug` events through `tracing`.
//!
//! # Examples
//!
//! ```no_run
//! use utils_rs::files;
//!
//! files::create_directory("out/logs")?;
//! files::write_file("out/logs/run.txt", "started\n")?;
//! files::append_to_file("out/logs/run.txt", "finished\n")?;
//! assert_eq!(files::read_lines("out/logs/run.txt")?, ["started", "finished"]);
//! # Ok::<(), utils_rs::error::FileError>(())
//! ```

use crate::error::FileError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::string::String;
use std::vec::Vec;
use tracing::debug;

fn logged(err: FileError) -> FileError {
    debug!(path = %err.path().display(), kind = ?err.kind(), "{}", err);
    err
}

fn read_error(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| {
        logged(FileError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| {
        logged(FileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn directory_error(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| {
        logged(FileError::Directory {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Reads the whole file as UTF-8 text.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(read_error(path))
}

/// Writes `contents` to `path`, creating the file or truncating it.
pub fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(write_error(path))
}

/// Appends `contents` to `path`, creating the file if it does not exist.
pub fn append_to_file(
    path: impl AsRef<Path>,
    contents: impl AsRef<[u8]>,
) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error(path))?;
    file.write_all(contents.as_ref()).map_err(write_error(path))
}

/// Reads the file and splits it into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped. A trailing newline does not
/// produce an empty final line.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    let contents = read_file(path)?;
    Ok(contents.lines().map(String::from).collect())
}

/// Returns true if something exists at `path`.
///
/// Errors while checking (such as a permission failure on a parent
/// directory) count as "does not exist".
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().try_exists().unwrap_or(false)
}

/// Creates `path` and any missing parents. Succeeds if it already exists.
pub fn create_directory(path: impl AsRef<Path>) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(directory_error(path))
}

/// Returns the size of the file in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64, FileError> {
    let path = path.as_ref();
    fs::metadata(path).map(|m| m.len()).map_err(|source| {
        logged(FileError::Metadata {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Lists every entry directly inside `dir`, files and subdirectories alike.
///
/// Paths are returned sorted so results are stable across platforms.
pub fn list_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, FileError> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(directory_error(dir))? {
        paths.push(entry.map_err(directory_error(dir))?.path());
    }
    paths.sort();
    Ok(paths)
}

/// Lists the regular files directly inside `dir` whose extension is
/// `extension`.
///
/// The leading dot is optional: `"txt"` and `".txt"` are equivalent. The
/// comparison is case sensitive.
pub fn list_files_with_extension(
    dir: impl AsRef<Path>,
    extension: &str,
) -> Result<Vec<PathBuf>, FileError> {
    let dir = dir.as_ref();
    let wanted = extension.strip_prefix('.').unwrap_or(extension);
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(directory_error(dir))? {
        let entry = entry.map_err(directory_error(dir))?;
        let is_file = entry
            .file_type()
            .map_err(directory_error(dir))?
            .is_file();
        let path = entry.path();
        if is_file && path.extension().is_some_and(|ext| ext == wanted) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
