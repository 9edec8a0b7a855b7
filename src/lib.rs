//! Recursive file lister
//!
//! Walks a directory tree and writes every file path found below it as a
//! pretty-printed JSON array.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod listing;
pub mod logging;
pub mod output;

use std::path::Path;

// Re-export commonly used types
pub use discovery::FileWalker;
pub use error::{ListingError, ListingErrorKind, ListingResult};
pub use listing::{FileList, FileListing, ListingConfig, ListingEngine, OutputConfig};
pub use output::{render_json, write_output, OutputTarget};

/// List every file under `input` and write the paths to `output` as JSON
/// with 4-space indentation
pub fn generate_file_list(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> ListingResult<FileList> {
    generate_file_list_with_config(
        &ListingConfig::new(input.as_ref()),
        &OutputConfig::default(),
        &OutputTarget::File(output.as_ref().to_path_buf()),
    )
}

/// List files with custom traversal and output configuration
pub fn generate_file_list_with_config(
    listing_config: &ListingConfig,
    output_config: &OutputConfig,
    target: &OutputTarget,
) -> ListingResult<FileList> {
    let listing = ListingEngine::new(listing_config.clone()).collect()?;
    let content = render_json(&listing.files, output_config)?;
    write_output(target, &content)?;
    Ok(listing.files)
}
