//! JSON rendering and output writing
//!
//! The file list is rendered as a pretty-printed JSON array (4-space indent
//! and ASCII-only escaping unless configured otherwise) and written either to
//! a file or stdout.

pub mod ascii;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{ListingError, ListingErrorKind, ListingResult};
use crate::listing::{FileList, OutputConfig};

pub use ascii::AsciiPrettyFormatter;

/// Where the rendered list goes
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Get a human-readable description of the target
    pub fn description(&self) -> String {
        match self {
            Self::File(path) => format!("'{}'", path.display()),
            Self::Stdout => "standard output".to_string(),
        }
    }
}

/// Render the list as a JSON array
pub fn render_json(files: &FileList, config: &OutputConfig) -> ListingResult<String> {
    config.validate().map_err(ListingError::configuration)?;

    let indent = config.indent_bytes();
    let mut buf = Vec::with_capacity(files.len() * 64 + 2);

    if config.ensure_ascii {
        let mut ser = Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::with_indent(&indent));
        files.serialize(&mut ser)?;
    } else {
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        files.serialize(&mut ser)?;
    }

    String::from_utf8(buf).map_err(|e| {
        ListingError::listing(ListingErrorKind::serialization(e.to_string()))
    })
}

/// Write rendered output, returning the number of bytes written.
///
/// Files get the content verbatim; stdout gets a trailing newline.
pub fn write_output(target: &OutputTarget, content: &str) -> ListingResult<u64> {
    match target {
        OutputTarget::File(path) => {
            write_file(path, content)?;
            Ok(content.len() as u64)
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)
                .and_then(|_| handle.flush())
                .map_err(|e| io_error(e, None))?;
            Ok(content.len() as u64 + 1)
        }
    }
}

fn write_file(path: &Path, content: &str) -> ListingResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(e, Some(parent)))?;
    }
    fs::write(path, content).map_err(|e| io_error(e, Some(path)))
}

fn io_error(err: io::Error, path: Option<&Path>) -> ListingError {
    ListingError::listing_with_source(
        ListingErrorKind::io(err.to_string(), path.map(Path::to_path_buf)),
        err.into(),
    )
}
