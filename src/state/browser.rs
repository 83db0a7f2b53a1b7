//! Folder browser state
//!
//! Captures the immediate entries of a folder once and walks through them
//! with a wrapping index. The listing is never refreshed; changes on disk
//! after capture are not seen.

use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ViewerError};

#[derive(Debug, Clone)]
pub struct FolderBrowser {
    folder: PathBuf,
    /// File names, sorted lexicographically
    entries: Vec<String>,
    index: usize,
}

impl FolderBrowser {
    /// List `folder` (one level, no filtering by type) and select the first entry.
    /// An empty folder is rejected rather than leaving the index dangling.
    pub fn scan(folder: &Path) -> Result<Self> {
        let entries = list_entries(folder)?;
        if entries.is_empty() {
            return Err(ViewerError::EmptyFolder {
                path: folder.to_path_buf(),
            });
        }

        info!("📁 {} entries in {}", entries.len(), folder.display());
        Ok(Self {
            folder: folder.to_path_buf(),
            entries,
            index: 0,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Path of the entry under the index
    pub fn current_path(&self) -> PathBuf {
        self.folder.join(&self.entries[self.index])
    }

    /// Step to the next entry, wrapping to the first after the last
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.entries.len();
        debug!("Browser index -> {}/{}", self.index, self.entries.len());
        self.index
    }
}

/// Immediate entries of `folder` (files and sub-folders), sorted by name
fn list_entries(folder: &Path) -> Result<Vec<String>> {
    WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .map_err(|source| ViewerError::ListFolder {
                    path: folder.to_path_buf(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn folder_with(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        dir
    }

    #[test]
    fn listing_is_lexicographic() {
        let dir = folder_with(&["b.png", "a.png", "C.png", "2.png", "10.png"]);
        let browser = FolderBrowser::scan(dir.path()).unwrap();
        assert_eq!(
            browser.entries(),
            &["10.png", "2.png", "C.png", "a.png", "b.png"]
        );
        assert_eq!(browser.index(), 0);
        assert_eq!(browser.current_path(), dir.path().join("10.png"));
    }

    #[test]
    fn listing_keeps_non_images_and_subfolders() {
        let dir = folder_with(&["notes.txt", "photo.jpg"]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.png"), b"x").unwrap();

        let browser = FolderBrowser::scan(dir.path()).unwrap();
        assert_eq!(browser.entries(), &["nested", "notes.txt", "photo.jpg"]);
    }

    #[test]
    fn advancing_len_times_returns_to_start() {
        let dir = folder_with(&["a", "b", "c", "d"]);
        let mut browser = FolderBrowser::scan(dir.path()).unwrap();
        let start = browser.index();
        let visited: Vec<usize> = (0..browser.len()).map(|_| browser.advance()).collect();
        assert_eq!(visited, vec![1, 2, 3, 0]);
        assert_eq!(browser.index(), start);
    }

    #[test]
    fn single_entry_wraps_onto_itself() {
        let dir = folder_with(&["only.png"]);
        let mut browser = FolderBrowser::scan(dir.path()).unwrap();
        assert_eq!(browser.advance(), 0);
    }

    #[test]
    fn empty_folder_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let error = FolderBrowser::scan(dir.path()).unwrap_err();
        assert!(matches!(error, ViewerError::EmptyFolder { .. }));
    }

    #[test]
    fn missing_folder_is_a_listing_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let error = FolderBrowser::scan(&missing).unwrap_err();
        assert!(matches!(error, ViewerError::ListFolder { .. }));
    }
}
