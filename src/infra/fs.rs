use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Snapshot of a directory taken once at the start of a run.
#[derive(Debug)]
pub struct DirectoryListing {
    /// Regular files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Every entry name, files and directories alike.
    pub names: NameIndex,
}

pub fn list_directory(dir_path: &Path) -> Result<DirectoryListing> {
    let read_err = |source| Error::ReadDir {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    let mut names = NameIndex::default();

    for entry in fs::read_dir(dir_path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        names.insert(&path);
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    debug!(dir = %dir_path.display(), files = files.len(), "listed directory");

    Ok(DirectoryListing { files, names })
}

/// Moves `from` to `to`, refusing to replace anything already at `to`.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    let rename_err = |source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    // fs::rename silently replaces on Unix.
    if to.symlink_metadata().is_ok() {
        return Err(rename_err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination appeared during the run",
        )));
    }

    fs::rename(from, to).map_err(rename_err)
}

/// Case-insensitive set of file names within one directory.
#[derive(Debug, Default)]
pub struct NameIndex(HashSet<String>);

impl NameIndex {
    pub fn insert(&mut self, path: &Path) {
        self.0.insert(normalize(path));
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.contains(&normalize(path))
    }

    pub fn record_move(&mut self, from: &Path, to: &Path) {
        self.0.remove(&normalize(from));
        self.insert(to);
    }
}

fn normalize(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Compares two paths ignoring case.
pub fn same_path(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}
