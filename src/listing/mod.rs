//! File listing module
//!
//! This module contains the listing engine, its configuration, the file
//! list itself and run statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ListingConfig, OutputConfig};
pub use engine::{FileListing, ListingEngine};
pub use stats::ListingStatistics;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Ordered list of discovered file paths.
///
/// Serializes as a bare JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileList(Vec<String>);

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from walked paths, keeping their order
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut list = Self::new();
        for path in paths {
            list.push(&path);
        }
        list
    }

    /// Append a path. Names that are not valid UTF-8 are converted lossily.
    pub fn push(&mut self, path: &Path) {
        match path.to_str() {
            Some(s) => self.0.push(s.to_owned()),
            None => {
                let lossy = path.to_string_lossy().into_owned();
                warn!(path = %lossy, "Path is not valid UTF-8, replacing invalid bytes");
                self.0.push(lossy);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|p| p == path)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<String>> for FileList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}
