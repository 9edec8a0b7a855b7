use std::fs;
use walkdir::DirEntry;

/// Return true if the entry belongs in the file list.
///
/// Everything that is not a directory counts, including broken symlinks and
/// special files. A symlink that resolves to a directory is skipped rather
/// than listed.
pub fn is_listable(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }

    if file_type.is_symlink() {
        // metadata() follows the link; a dangling link still gets listed
        return fs::metadata(entry.path()).map_or(true, |meta| !meta.is_dir());
    }

    true
}
