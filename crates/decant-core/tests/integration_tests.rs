//! Integration tests for decant-core.
//!
//! These tests drive the real `tar` tool end to end: create an archive from
//! a directory tree, extract it through the validating path, and check what
//! landed on disk.

#![cfg(unix)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use decant_core::DestDir;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

/// Collects all paths under `root`, relative to it, in sorted order.
fn relative_entries(root: &Path) -> BTreeSet<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            out.insert(path.strip_prefix(root).unwrap().to_path_buf());
            if path.is_dir() && !path.is_symlink() {
                walk(root, &path, out);
            }
        }
    }
    let mut out = BTreeSet::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn test_roundtrip_reproduces_tree() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("bottle");
    fs::create_dir_all(src.join("drive_c/windows/system32")).unwrap();
    fs::create_dir_all(src.join("drive_c/users/steamuser")).unwrap();
    fs::write(src.join("drive_c/windows/system32/kernel32.dll"), "dll").unwrap();
    fs::write(src.join("drive_c/users/steamuser/notes.txt"), "hello").unwrap();
    fs::write(src.join("metadata.plist"), "<plist/>").unwrap();

    let archive = temp.path().join("bottle.tar.gz");
    decant_core::tar(&src, &archive).expect("tar should succeed");

    let out = temp.path().join("imported");
    fs::create_dir(&out).unwrap();
    decant_core::untar(&archive, &out).expect("untar should succeed");

    assert_eq!(relative_entries(&src), relative_entries(&out));
    assert_eq!(
        fs::read_to_string(out.join("drive_c/users/steamuser/notes.txt")).unwrap(),
        "hello"
    );
    assert_eq!(
        fs::read_to_string(out.join("drive_c/windows/system32/kernel32.dll")).unwrap(),
        "dll"
    );
}

#[test]
fn test_roundtrip_internal_symlink() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("bottle");
    fs::create_dir_all(src.join("drive_c")).unwrap();
    fs::write(src.join("drive_c/target.txt"), "pointed at").unwrap();
    std::os::unix::fs::symlink("target.txt", src.join("drive_c/link")).unwrap();

    let archive = temp.path().join("bottle.tar.gz");
    decant_core::tar(&src, &archive).unwrap();

    let out = temp.path().join("imported");
    fs::create_dir(&out).unwrap();
    decant_core::untar(&archive, &out).expect("internal symlink should be accepted");

    let link = out.join("drive_c/link");
    assert!(link.is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), PathBuf::from("target.txt"));
    assert_eq!(fs::read_to_string(&link).unwrap(), "pointed at");
}

#[test]
fn test_extraction_stays_inside_destination() {
    // Containment invariant: every path that exists after a successful
    // extraction is a descendant of the destination, including resolved
    // symlinks created by the extraction
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("bottle");
    fs::create_dir_all(src.join("a/b")).unwrap();
    fs::write(src.join("a/b/file.txt"), "x").unwrap();
    std::os::unix::fs::symlink("b/file.txt", src.join("a/link")).unwrap();

    let archive = temp.path().join("bottle.tar.gz");
    decant_core::tar(&src, &archive).unwrap();

    let out = temp.path().join("imported");
    fs::create_dir(&out).unwrap();
    decant_core::untar(&archive, &out).unwrap();

    let canonical_out = out.canonicalize().unwrap();
    for relative in relative_entries(&out) {
        let path = out.join(&relative);
        assert!(path.starts_with(&out), "{} escaped", path.display());
        if path.is_symlink() {
            let resolved = path.canonicalize().unwrap();
            assert!(
                resolved.starts_with(&canonical_out),
                "symlink {} resolves outside: {}",
                path.display(),
                resolved.display()
            );
        }
    }
}

#[test]
fn test_escaping_symlink_rejected_and_nothing_extracted() {
    // Scenario: ["drive_c/file.txt", "drive_c/link -> ../../../tmp/evil"]
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("bottle");
    fs::create_dir_all(src.join("drive_c")).unwrap();
    fs::write(src.join("drive_c/file.txt"), "ok").unwrap();
    std::os::unix::fs::symlink("../../../tmp/evil", src.join("drive_c/link")).unwrap();

    let archive = temp.path().join("bottle.tar.gz");
    decant_core::tar(&src, &archive).unwrap();

    let out = temp.path().join("imported");
    fs::create_dir(&out).unwrap();
    let err = decant_core::untar(&archive, &out).expect_err("escaping link must be rejected");

    match &err {
        decant_core::ArchiveError::UnsafeSymlink { path, target } => {
            assert!(path.ends_with("link"), "unexpected path: {}", path.display());
            assert_eq!(target, &PathBuf::from("../../../tmp/evil"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_security_violation());

    // No filesystem entries may have been created
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_absolute_symlink_rejected() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("bottle");
    fs::create_dir_all(&src).unwrap();
    std::os::unix::fs::symlink("/etc/passwd", src.join("link")).unwrap();

    let archive = temp.path().join("bottle.tar.gz");
    decant_core::tar(&src, &archive).unwrap();

    let out = temp.path().join("imported");
    fs::create_dir(&out).unwrap();
    let err = decant_core::untar(&archive, &out).expect_err("absolute target must be rejected");
    assert!(matches!(
        err,
        decant_core::ArchiveError::UnsafeSymlink { .. }
    ));
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_untar_missing_archive() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("imported");
    fs::create_dir(&out).unwrap();

    let result = decant_core::untar(temp.path().join("missing.tar.gz"), &out);
    assert!(result.is_err());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_dest_dir_must_exist_before_untar() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("bottle.tar.gz");
    let src = temp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("f"), "x").unwrap();
    decant_core::tar(&src, &archive).unwrap();

    let result = decant_core::untar(&archive, temp.path().join("does-not-exist"));
    assert!(matches!(result, Err(decant_core::ArchiveError::Io(_))));
}

#[test]
fn test_concurrent_independent_operations() {
    // Two validate+extract cycles share no state and may run concurrently
    let temp = TempDir::new().unwrap();
    let mut handles = Vec::new();

    for i in 0..2 {
        let base = temp.path().join(format!("op{i}"));
        fs::create_dir(&base).unwrap();
        handles.push(std::thread::spawn(move || {
            let src = base.join("src");
            fs::create_dir(&src).unwrap();
            fs::write(src.join("file.txt"), format!("op {i}")).unwrap();

            let archive = base.join("bottle.tar.gz");
            decant_core::tar(&src, &archive).unwrap();

            let out = base.join("out");
            fs::create_dir(&out).unwrap();
            decant_core::untar(&archive, &out).unwrap();

            fs::read_to_string(out.join("file.txt")).unwrap()
        }));
    }

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["op 0".to_string(), "op 1".to_string()]);
}

#[test]
fn test_dest_dir_reusable_for_validation_and_extraction() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    let dest = DestDir::new(&out).unwrap();
    assert!(dest.as_path().is_absolute());
}
