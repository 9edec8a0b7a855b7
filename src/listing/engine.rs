//! Listing engine: walk the configured root and build the file list

use std::time::Instant;

use tracing::info;

use crate::discovery::FileWalker;
use crate::error::{ListingError, ListingResult};
use crate::listing::{FileList, ListingConfig, ListingStatistics};

/// Result of a completed listing run
#[derive(Debug, Clone)]
pub struct FileListing {
    pub files: FileList,
    pub stats: ListingStatistics,
}

/// Main listing engine
pub struct ListingEngine {
    config: ListingConfig,
}

impl ListingEngine {
    /// Create a new listing engine with the given configuration
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    /// Walk the configured root and collect every file path
    pub fn collect(&self) -> ListingResult<FileListing> {
        self.collect_with_progress(|_| {})
    }

    /// Like [`collect`](Self::collect), reporting the running file count
    pub fn collect_with_progress<F>(&self, mut on_progress: F) -> ListingResult<FileListing>
    where
        F: FnMut(usize),
    {
        self.config.validate().map_err(ListingError::configuration)?;

        let start = Instant::now();
        let walker = FileWalker::new(self.config.clone());

        let mut found = 0usize;
        let outcome = walker.walk_with(&self.config.input_dir, |_| {
            found += 1;
            on_progress(found);
        })?;

        let stats = ListingStatistics::for_walk(
            outcome.files.len(),
            outcome.directories_visited,
            outcome.skipped.len(),
            start.elapsed(),
        );
        let files = FileList::from_paths(outcome.files);

        info!(
            root = %self.config.input_dir.display(),
            files = stats.file_count,
            directories = stats.directory_count,
            skipped = stats.skipped_count,
            "Listing complete"
        );

        Ok(FileListing { files, stats })
    }
}
