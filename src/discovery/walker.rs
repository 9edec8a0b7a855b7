//! Recursive directory walker built on walkdir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::discovery::filter::is_listable;
use crate::error::{ListingError, ListingErrorKind, ListingResult};
use crate::listing::ListingConfig;

/// An entry the walker could not read and stepped over.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Everything a single walk produced.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// File paths in traversal order
    pub files: Vec<PathBuf>,
    /// Directories descended into, root included
    pub directories_visited: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// Directory walker configured from a [`ListingConfig`].
#[derive(Debug, Clone)]
pub struct FileWalker {
    config: ListingConfig,
}

impl FileWalker {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and collect every listable path below it.
    pub fn walk(&self, root: &Path) -> ListingResult<WalkOutcome> {
        self.walk_with(root, |_| {})
    }

    /// Walk `root`, calling `on_file` for each path as it is found.
    pub fn walk_with<F>(&self, root: &Path, mut on_file: F) -> ListingResult<WalkOutcome>
    where
        F: FnMut(&Path),
    {
        check_root(root)?;

        let mut walker = WalkDir::new(root).follow_links(self.config.follow_links);
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }
        if self.config.sort_by_name {
            // Files first, then subdirectories, each group by name
            walker = walker.sort_by(|a, b| {
                (a.file_type().is_dir(), a.file_name()).cmp(&(b.file_type().is_dir(), b.file_name()))
            });
        }

        let mut outcome = WalkOutcome::default();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself failing is never skippable
                Err(err) if self.config.skip_unreadable && err.depth() > 0 => {
                    let skipped = SkippedEntry {
                        path: err.path().map(Path::to_path_buf),
                        reason: err
                            .io_error()
                            .map_or_else(|| err.to_string(), io::Error::to_string),
                    };
                    warn!(
                        path = ?skipped.path,
                        reason = %skipped.reason,
                        "Skipping unreadable entry"
                    );
                    outcome.skipped.push(skipped);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if entry.file_type().is_dir() {
                debug!(path = %entry.path().display(), depth = entry.depth(), "Entering directory");
                outcome.directories_visited += 1;
                continue;
            }

            if is_listable(&entry) {
                on_file(entry.path());
                outcome.files.push(entry.into_path());
            }
        }

        Ok(outcome)
    }
}

fn check_root(root: &Path) -> ListingResult<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ListingError::listing(ListingErrorKind::NotADirectory {
            path: root.to_path_buf(),
        })),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ListingError::listing(ListingErrorKind::InputNotFound {
                path: root.to_path_buf(),
            }))
        }
        Err(err) => Err(ListingError::listing_with_source(
            ListingErrorKind::traversal(err.to_string(), Some(root.to_path_buf())),
            err.into(),
        )),
    }
}
