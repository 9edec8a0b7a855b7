//! Listing properties checked over generated directory trees

use pathlist::generate_file_list;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Build a tree `depth` levels deep with `per_level` files at each level.
fn build_tree(root: &Path, depth: usize, per_level: usize) -> HashSet<String> {
    let mut created = HashSet::new();
    let mut dir = root.to_path_buf();
    for level in 0..depth {
        fs::create_dir_all(&dir).unwrap();
        for i in 0..per_level {
            let path = dir.join(format!("sample_{}_{}.wav", level, i));
            fs::write(&path, b"").unwrap();
            created.insert(path.to_str().unwrap().to_string());
        }
        dir = dir.join(format!("level{}", level));
    }
    created
}

#[test]
fn test_count_matches_files_at_any_depth() {
    for (depth, per_level) in [(1, 0), (1, 5), (3, 2), (12, 1)] {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let created = build_tree(input.path(), depth, per_level);

        let out_path = output.path().join("paths.json");
        let files = generate_file_list(input.path(), &out_path).unwrap();

        assert_eq!(files.len(), created.len(), "depth={} per_level={}", depth, per_level);

        let parsed: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
        let parsed_set: HashSet<String> = parsed.iter().cloned().collect();

        assert_eq!(parsed.len(), parsed_set.len(), "no duplicates");
        assert_eq!(parsed_set, created);
        assert!(parsed
            .iter()
            .all(|p| Path::new(p).starts_with(input.path())));
    }
}

#[test]
fn test_entries_keep_root_spelling() {
    let input = tempdir().unwrap();
    build_tree(input.path(), 2, 1);

    let output = tempdir().unwrap();
    let out_path = output.path().join("paths.json");

    // Entries are not canonicalized; the ".." hop survives
    let name = input.path().file_name().unwrap();
    let hopped_root = input.path().join("..").join(name);
    let files = generate_file_list(&hopped_root, &out_path).unwrap();

    let prefix = hopped_root.to_str().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.starts_with(prefix)));
}
