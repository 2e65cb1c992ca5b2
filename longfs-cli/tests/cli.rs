//! Integration tests for the longfs subcommands.
//!
//! Each test runs the real binary in a scratch directory and checks both
//! the filesystem effect and the printed output.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// resolve
// ============================================================================

#[test]
fn test_resolve_relative_path() {
    let env = TestEnv::new();
    let expected = env.path().join("data").join("out.txt");

    env.command()
        .args(["resolve", "data/./out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(expected.display().to_string()));
}

#[test]
fn test_resolve_long_paths_marks_over_threshold() {
    let env = TestEnv::new();

    env.command()
        .args(["--long-paths", "--threshold", "1", "resolve", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t\\\\?\\"));
}

#[test]
fn test_resolve_threshold_from_env() {
    let env = TestEnv::new();

    env.command()
        .env("LONGFS_THRESHOLD", "1")
        .args(["--long-paths", "resolve", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\\\\?\\"));
}

#[test]
fn test_resolve_short_path_unchanged() {
    let env = TestEnv::new();
    let expected = env.path().join("x");
    let line = format!("{0}\t{0}\n", expected.display());

    env.command()
        .args(["--long-paths", "resolve", "x"])
        .assert()
        .success()
        .stdout(line);
}

#[test]
fn test_resolve_verbose_shows_working_dir() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "resolve", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("original:  x"))
        .stdout(predicate::str::contains(format!("cwd:       {}", env.path().display())));
}

// ============================================================================
// mkdir / rm
// ============================================================================

#[test]
fn test_mkdir_parents_deep() {
    let env = TestEnv::new();
    let deep = TestEnv::deep_relative(52);

    env.command().arg("mkdir").arg("-p").arg(&deep).assert().success();
    assert!(env.path().join(&deep).is_dir());

    // Existing chain is fine with -p
    env.command().arg("mkdir").arg("-p").arg(&deep).assert().success();
}

#[test]
fn test_mkdir_existing_fails_without_parents() {
    let env = TestEnv::new();
    env.create_dir("taken");

    env.command()
        .args(["mkdir", "taken"])
        .assert()
        .code(3)
        .stderr(predicate::str::starts_with("Error: fs: mkdir failed"));
}

#[cfg(unix)]
#[test]
fn test_mkdir_mode() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    env.command()
        .args(["mkdir", "--mode", "700", "private"])
        .assert()
        .success();

    let mode = std::fs::metadata(env.path().join("private"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o700);
}

#[test]
fn test_rm_recursive_deep_tree() {
    let env = TestEnv::new();
    let deep = TestEnv::deep_relative(52);
    std::fs::create_dir_all(env.path().join(&deep)).unwrap();

    env.command().args(["rm", "-r", "abcd"]).assert().success();
    assert!(!env.path().join("abcd").exists());
}

#[test]
fn test_rm_recursive_missing_is_ok() {
    let env = TestEnv::new();
    env.command().args(["rm", "-r", "ghost"]).assert().success();
}

#[test]
fn test_rm_missing_not_found() {
    let env = TestEnv::new();
    env.command()
        .args(["rm", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Original Path: ghost"));
}

// ============================================================================
// mv / ln / readlink
// ============================================================================

#[test]
fn test_mv_renames() {
    let env = TestEnv::new();
    env.create_file("old.txt", "content");

    env.command().args(["mv", "old.txt", "new.txt"]).assert().success();
    assert!(!env.path().join("old.txt").exists());
    assert_eq!(
        std::fs::read_to_string(env.path().join("new.txt")).unwrap(),
        "content"
    );
}

#[test]
fn test_mv_missing_reports_both_operands() {
    let env = TestEnv::new();

    env.command()
        .args(["mv", "nope.txt", "other.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fs: rename nope.txt other.txt"));
}

#[test]
fn test_ln_hard_link() {
    let env = TestEnv::new();
    env.create_file("a.txt", "shared");

    env.command().args(["ln", "a.txt", "b.txt"]).assert().success();
    assert_eq!(
        std::fs::read_to_string(env.path().join("b.txt")).unwrap(),
        "shared"
    );
}

#[test]
fn test_ln_existing_link_already_exists() {
    let env = TestEnv::new();
    env.create_file("a.txt", "");
    env.create_file("b.txt", "");

    env.command()
        .args(["ln", "a.txt", "b.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("fs: link a.txt b.txt"));
}

#[cfg(unix)]
#[test]
fn test_ln_symbolic_and_readlink() {
    let env = TestEnv::new();
    env.create_file("target.txt", "x");

    env.command()
        .args(["ln", "-s", "target.txt", "link"])
        .assert()
        .success();

    env.command()
        .args(["readlink", "link"])
        .assert()
        .success()
        .stdout("target.txt\n");
}

// ============================================================================
// stat / touch
// ============================================================================

#[test]
fn test_stat_file_and_directory() {
    let env = TestEnv::new();
    env.create_file("f.txt", "12345");
    env.create_dir("d");

    env.command()
        .args(["stat", "f.txt", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("f.txt: file 5 "))
        .stdout(predicate::str::contains("d: directory "));
}

#[cfg(unix)]
#[test]
fn test_stat_no_follow() {
    let env = TestEnv::new();
    env.create_dir("real");
    std::os::unix::fs::symlink("real", env.path().join("link")).unwrap();

    env.command()
        .args(["stat", "--no-follow", "link"])
        .assert()
        .success()
        .stdout(predicate::str::contains("link: symlink "));

    env.command()
        .args(["stat", "link"])
        .assert()
        .success()
        .stdout(predicate::str::contains("link: directory "));
}

#[test]
fn test_touch_creates_file() {
    let env = TestEnv::new();

    env.command().args(["touch", "new.txt"]).assert().success();
    assert!(env.path().join("new.txt").is_file());
}

#[test]
fn test_touch_no_create_skips_missing() {
    let env = TestEnv::new();

    env.command().args(["touch", "-c", "ghost.txt"]).assert().success();
    assert!(!env.path().join("ghost.txt").exists());
}

#[test]
fn test_touch_updates_mtime() {
    let env = TestEnv::new();
    let file = env.create_file("old.txt", "");
    let past = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
    std::fs::File::options()
        .write(true)
        .open(&file)
        .unwrap()
        .set_modified(past)
        .unwrap();

    env.command().args(["touch", "old.txt"]).assert().success();
    let modified = std::fs::metadata(&file).unwrap().modified().unwrap();
    assert!(modified > past);
}

#[test]
fn test_touch_existing_directory() {
    let env = TestEnv::new();
    let dir = env.create_dir("build");
    let past = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
    filetime::set_file_mtime(&dir, filetime::FileTime::from_system_time(past)).unwrap();

    env.command().args(["touch", "build"]).assert().success();
    assert!(dir.is_dir());
    assert!(std::fs::metadata(&dir).unwrap().modified().unwrap() > past);
}

#[test]
fn test_touch_keeps_existing_contents() {
    let env = TestEnv::new();
    let file = env.create_file("notes.txt", "keep me");

    env.command().args(["touch", "notes.txt"]).assert().success();
    assert_eq!(std::fs::read_to_string(file).unwrap(), "keep me");
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("longfs"));
}
