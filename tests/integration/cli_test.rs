//! End-to-end tests driving the compiled `pathlist` binary

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_pathlist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pathlist"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute pathlist")
}

fn create_file(dir: &tempfile::TempDir, name: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"RIFF").unwrap();
}

#[test]
fn test_writes_output_file() {
    let input = tempdir().unwrap();
    create_file(&input, "kit/kick.wav");
    create_file(&input, "kit/snare.wav");
    create_file(&input, "loops/120bpm/break.wav");

    let output = tempdir().unwrap();
    let out_path = output.path().join("paths.json");

    let result = run_pathlist(&[
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Wrote 3 paths"), "stdout: {}", stdout);

    let parsed: Vec<String> =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 3);
}

#[test]
fn test_long_flags_and_quiet() {
    let input = tempdir().unwrap();
    create_file(&input, "one.wav");

    let output = tempdir().unwrap();
    let out_path = output.path().join("nested/paths.json");

    let result = run_pathlist(&[
        "--input",
        input.path().to_str().unwrap(),
        "--output",
        out_path.to_str().unwrap(),
        "--quiet",
    ]);

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert!(out_path.exists());
}

#[test]
fn test_stdout_when_no_output_given() {
    let input = tempdir().unwrap();
    create_file(&input, "pad.wav");

    let result = run_pathlist(&["-i", input.path().to_str().unwrap(), "--sort"]);

    assert!(result.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(parsed.len(), 1);
    assert!(parsed[0].ends_with("pad.wav"));
}

#[test]
fn test_missing_input_flag_fails() {
    let result = run_pathlist(&[]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("No input directory provided"), "stderr: {}", stderr);
    assert!(stderr.contains("--help"));
}

#[test]
fn test_nonexistent_input_fails_without_output() {
    let tmp = tempdir().unwrap();
    let out_path = tmp.path().join("paths.json");

    let result = run_pathlist(&[
        "-i",
        tmp.path().join("ghost").to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
    assert!(!out_path.exists());
}

#[test]
fn test_stats_go_to_stderr() {
    let input = tempdir().unwrap();
    create_file(&input, "a.wav");
    create_file(&input, "b/c.wav");

    let result = run_pathlist(&["-i", input.path().to_str().unwrap(), "--stats"]);

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Listing Statistics"), "stderr: {}", stderr);
    assert!(stderr.contains("Files: 2"));

    // stdout still carries only the JSON list
    let parsed: Vec<String> = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_invalid_indent_rejected() {
    let input = tempdir().unwrap();
    let result = run_pathlist(&["-i", input.path().to_str().unwrap(), "--indent", "9"]);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Indent size"));
}

#[test]
fn test_non_ascii_escaped_by_default() {
    let input = tempdir().unwrap();
    create_file(&input, "café.wav");

    let escaped = run_pathlist(&["-i", input.path().to_str().unwrap()]);
    assert!(escaped.status.success());
    let stdout = String::from_utf8_lossy(&escaped.stdout);
    assert!(stdout.is_ascii(), "stdout: {}", stdout);
    assert!(stdout.contains("caf\\u00e9.wav"));

    let unicode = run_pathlist(&["-i", input.path().to_str().unwrap(), "--unicode"]);
    assert!(unicode.status.success());
    assert!(String::from_utf8_lossy(&unicode.stdout).contains("café.wav"));

    // Both forms decode to the same path
    let a: Vec<String> = serde_json::from_slice(&escaped.stdout).unwrap();
    let b: Vec<String> = serde_json::from_slice(&unicode.stdout).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_max_depth_limits_listing() {
    let input = tempdir().unwrap();
    create_file(&input, "top.wav");
    create_file(&input, "one/mid.wav");
    create_file(&input, "one/two/deep.wav");

    let result = run_pathlist(&["-i", input.path().to_str().unwrap(), "--max-depth", "2", "--sort"]);

    assert!(result.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(parsed.len(), 2);
    assert!(parsed[0].ends_with("top.wav"));
    assert!(parsed[1].ends_with("mid.wav"));
}

#[test]
fn test_stats_json_is_machine_readable() {
    let input = tempdir().unwrap();
    create_file(&input, "a.wav");

    let result = run_pathlist(&["-i", input.path().to_str().unwrap(), "--stats-json"]);

    assert!(result.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&result.stderr).unwrap();
    assert_eq!(stats["file_count"], 1);
    assert_eq!(stats["skipped_count"], 0);
    assert!(stats["collected_at"].is_string());
}

#[cfg(unix)]
#[test]
fn test_follow_links_descends_into_linked_directory() {
    use std::os::unix::fs::symlink;

    let input = tempdir().unwrap();
    create_file(&input, "local.wav");
    let outside = tempdir().unwrap();
    create_file(&outside, "shared/pad.wav");
    symlink(outside.path().join("shared"), input.path().join("shared")).unwrap();

    let plain = run_pathlist(&["-i", input.path().to_str().unwrap()]);
    assert!(plain.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&plain.stdout).unwrap();
    assert_eq!(parsed.len(), 1);

    let followed = run_pathlist(&["-i", input.path().to_str().unwrap(), "--follow-links"]);
    assert!(followed.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&followed.stdout).unwrap();
    assert_eq!(parsed.len(), 2);
    assert!(parsed.iter().any(|p| p.ends_with("shared/pad.wav")));
}

#[cfg(unix)]
#[test]
fn test_skip_unreadable_reports_skipped_entries() {
    use std::os::unix::fs::symlink;

    let input = tempdir().unwrap();
    create_file(&input, "kick.wav");
    symlink(input.path().join("gone.wav"), input.path().join("dangling.wav")).unwrap();

    let output = tempdir().unwrap();
    let out_path = output.path().join("paths.json");

    let strict = run_pathlist(&[
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
        "--follow-links",
    ]);
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("--skip-unreadable"), "stderr: {}", stderr);
    assert!(!out_path.exists());

    let lenient = run_pathlist(&[
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
        "--follow-links",
        "--skip-unreadable",
        "--stats",
    ]);
    assert!(lenient.status.success());
    let stderr = String::from_utf8_lossy(&lenient.stderr);
    assert!(stderr.contains("Skipped: 1"), "stderr: {}", stderr);
    assert!(stderr.contains("Files: 1"));

    let parsed: Vec<String> =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
    assert!(parsed[0].ends_with("kick.wav"));
}
