//! Edge case and error handling tests for canopy


use std::fs;

use harness::{TestTree, child_names, run_canopy, run_json};

// ============================================================================
// Root Shapes
// ============================================================================

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::sample();
    let root = tree.path().join("a.txt");
    let json = run_json(&root, &["--attributes", "size,type"]);

    assert_eq!(json["kind"], "file");
    assert_eq!(json["name"], "a.txt");
    assert_eq!(json["attributes"]["size"], 10);
    assert_eq!(json["attributes"]["type"], "file");
    assert!(json.get("children").is_none());
}

#[test]
fn test_empty_root_directory() {
    let tree = TestTree::new();
    let json = run_json(tree.path(), &[]);
    assert_eq!(json["kind"], "directory");
    assert_eq!(json["children"], serde_json::json!([]));
}

#[test]
fn test_empty_subdirectory_keeps_empty_children_array() {
    let tree = TestTree::new();
    tree.add_dir("hollow");
    let json = run_json(tree.path(), &[]);
    assert_eq!(json["children"][0]["name"], "hollow");
    assert_eq!(json["children"][0]["children"], serde_json::json!([]));
}

#[test]
fn test_deeply_nested_directories() {
    let tree = TestTree::new();
    let deep: Vec<&str> = std::iter::repeat_n("d", 64).collect();
    tree.add_file(&format!("{}/leaf.txt", deep.join("/")), "x");

    let json = run_json(tree.path(), &[]);
    let mut node = &json;
    for _ in 0..64 {
        node = &node["children"][0];
        assert_eq!(node["kind"], "directory");
    }
    assert_eq!(node["children"][0]["name"], "leaf.txt");
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlinks_are_skipped() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::sample();
    symlink(tree.path().join("a.txt"), tree.path().join("link.txt")).unwrap();
    symlink(tree.path().join("sub"), tree.path().join("linkdir")).unwrap();

    let json = run_json(tree.path(), &[]);
    assert_eq!(child_names(&json), ["a.txt", "sub"]);
}

#[cfg(unix)]
#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::sample();
    symlink("..", tree.path().join("sub/parent")).unwrap();

    let json = run_json(tree.path(), &[]);
    assert_eq!(child_names(&json["children"][1]), ["b.txt"]);
}

#[cfg(unix)]
#[test]
fn test_broken_symlink() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::sample();
    symlink("nonexistent.txt", tree.path().join("broken.txt")).unwrap();

    let json = run_json(tree.path(), &[]);
    assert_eq!(child_names(&json), ["a.txt", "sub"]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_root_is_followed() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::sample();
    let outside = TestTree::new();
    let link = outside.path().join("rootlink");
    symlink(tree.path(), &link).unwrap();

    let json = run_json(&link, &[]);
    assert_eq!(json["kind"], "directory");
    assert_eq!(child_names(&json), ["a.txt", "sub"]);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_warns_and_continues() {
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::sample();
    let locked = tree.add_dir("locked");
    tree.add_file("locked/hidden.txt", "secret");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).unwrap();

    // Privileged processes can read the directory anyway.
    let denied = fs::read_dir(&locked).is_err();

    let (stdout, stderr, success) = run_canopy(&["--path", &tree.path_str()]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).unwrap();

    assert!(success, "unreadable subdirectory must not abort: {stderr}");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    if denied {
        assert_eq!(child_names(&json), ["a.txt", "sub"]);
        assert!(
            stderr.contains("warning") && stderr.contains("locked"),
            "expected warning naming the skipped entry: {stderr}"
        );
    }
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("file with spaces.txt", "content");
    tree.add_file("dir with spaces/nested.txt", "content");

    let json = run_json(tree.path(), &[]);
    assert_eq!(
        child_names(&json),
        ["dir with spaces", "file with spaces.txt"]
    );
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.txt", "content");
    tree.add_file("中文目录/文件.txt", "content");

    let json = run_json(tree.path(), &[]);
    let names = child_names(&json);
    assert!(names.contains(&"日本語.txt".to_string()), "names: {names:?}");
    assert!(names.contains(&"中文目录".to_string()), "names: {names:?}");
}

#[test]
fn test_extension_of_multi_dot_filename() {
    let tree = TestTree::new();
    tree.add_file("archive.tar.gz", "content");
    let json = run_json(tree.path(), &["--attributes", "extension"]);
    assert_eq!(json["children"][0]["attributes"]["extension"], ".gz");
}

#[test]
fn test_extensionless_file_has_no_extension_attribute() {
    let tree = TestTree::new();
    tree.add_file("Makefile", "all:\n");
    let json = run_json(tree.path(), &["--attributes", "extension"]);
    assert!(json["children"][0].get("attributes").is_none());
}

// ============================================================================
// Exclusion Edge Cases
// ============================================================================

#[test]
fn test_exclusion_is_relative_to_root() {
    // `^sub$` anchors against the root-relative path, so a nested `sub`
    // survives while the top-level one is pruned.
    let tree = TestTree::sample();
    tree.add_file("keep/sub/c.txt", "content");

    let json = run_json(tree.path(), &["--exclude", "^sub$"]);
    assert_eq!(child_names(&json), ["a.txt", "keep"]);
    assert_eq!(child_names(&json["children"][1]), ["sub"]);
}

#[test]
fn test_exclusion_pattern_spanning_components() {
    let tree = TestTree::sample();
    let json = run_json(tree.path(), &["--exclude", r"^sub/b\.txt$"]);

    let sub = &json["children"][1];
    assert_eq!(sub["name"], "sub");
    assert_eq!(sub["children"], serde_json::json!([]));
}

#[test]
fn test_excluding_everything_leaves_bare_root() {
    let tree = TestTree::sample();
    let json = run_json(tree.path(), &["--exclude", ".*"]);
    assert_eq!(json["children"], serde_json::json!([]));
}
