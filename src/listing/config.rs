//! Configuration options for directory listing and JSON output

use std::path::PathBuf;

/// Indentation used when no explicit value is given
pub const DEFAULT_INDENT: u8 = 4;

/// Largest accepted indentation
pub const MAX_INDENT: u8 = 8;

/// Traversal configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ListingConfig {
    /// Root directory to scan
    pub input_dir: PathBuf,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Sort entries by file name within each directory
    pub sort_by_name: bool,
    /// Maximum descent depth (root is depth 0)
    pub max_depth: Option<usize>,
    /// Warn about and skip unreadable entries instead of aborting
    pub skip_unreadable: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            follow_links: false,
            sort_by_name: false,
            max_depth: None,
            skip_unreadable: false,
        }
    }
}

impl ListingConfig {
    /// Create a configuration for the given root with default options
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn with_sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_dir.as_os_str().is_empty() {
            return Err("Input directory must not be empty".to_string());
        }

        if self.max_depth == Some(0) {
            return Err("Max depth must be at least 1 to list any files".to_string());
        }

        Ok(())
    }
}

/// JSON rendering options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputConfig {
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Escape every character outside printable ASCII as `\uXXXX`
    pub ensure_ascii: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT,
            ensure_ascii: true,
        }
    }
}

impl OutputConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > MAX_INDENT {
            return Err(format!(
                "Indent size must be between 0 and {}, got {}",
                MAX_INDENT, self.indent_size
            ));
        }

        Ok(())
    }

    /// The indentation unit as raw bytes
    pub fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent_size as usize]
    }
}
