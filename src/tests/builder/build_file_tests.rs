//! Tests for build_file and build_file_with.

use std::fs;
use std::io::ErrorKind;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::config::{FileExistsPolicy, FileSpec};
use crate::error::Stage;
use crate::{build_file, build_file_with};

#[test]
fn build_file_writes_formatted_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buildfile.txt");

    build_file(&path, |p| {
        p.printfln(format_args!("foobar {}", 10));
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "foobar 10\n");
}

#[test]
fn build_file_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "a much longer previous content\n").unwrap();

    build_file(&path, |p| {
        p.println(&[&"short"]);
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
}

#[test]
fn build_file_reports_creation_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let mut called = false;

    let err = build_file(&path, |_| called = true).unwrap_err();

    assert_eq!(err.stage, Stage::Create);
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!called);
}

#[cfg(unix)]
#[test]
fn build_file_reports_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users are not subject to directory permissions.
    if fs::write(locked.join("canary"), b"").is_ok() {
        eprintln!("skipped: running privileged");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let path = locked.join("nopermission.txt");
    let err = build_file(&path, |p| {
        p.println(&[&"i'm not allowed!"]);
    })
    .unwrap_err();

    assert_eq!(err.stage, Stage::Create);
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert!(!path.exists());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn build_file_rejects_directory_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("occupied");
    fs::create_dir(&target).unwrap();
    let mut called = false;

    let err = build_file(&target, |_| called = true).unwrap_err();

    assert_eq!(err.stage, Stage::Create);
    assert_ne!(err.kind(), ErrorKind::NotFound);
    assert!(!called);
    assert!(target.is_dir());
}

#[test]
fn build_file_closes_when_operations_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.txt");

    let result = catch_unwind(AssertUnwindSafe(|| {
        build_file(&path, |p| {
            p.println(&[&"before"]);
            panic!("operation failed");
        })
    }));

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "before\n");
}

#[cfg(target_os = "linux")]
#[test]
fn build_file_surfaces_flush_failure() {
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return;
    }

    let err = build_file(full, |p| {
        p.println(&[&"no space"]);
    })
    .unwrap_err();

    assert_eq!(err.stage, Stage::Flush);
    assert_eq!(err.source.raw_os_error(), Some(28));
}

#[test]
fn build_file_with_append_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    let spec = FileSpec::new(&path).with_file_exists_policy(FileExistsPolicy::Append);

    build_file_with(&spec, |p| {
        p.println(&[&"first"]);
    })
    .unwrap();
    build_file_with(&spec, |p| {
        p.println(&[&"second"]);
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn build_file_with_error_policy_leaves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.txt");
    fs::write(&path, "keep\n").unwrap();
    let spec = FileSpec::new(&path).with_file_exists_policy(FileExistsPolicy::Error);

    let err = build_file_with(&spec, |p| {
        p.println(&[&"replace"]);
    })
    .unwrap_err();

    assert_eq!(err.stage, Stage::Create);
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep\n");
}

#[test]
fn small_buffer_capacity_still_delivers_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.txt");
    let spec = FileSpec::new(&path).with_buffer_capacity(3);

    build_file_with(&spec, |p| {
        for i in 0..5 {
            p.printfln(format_args!("line {i}"));
        }
    })
    .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "line 0\nline 1\nline 2\nline 3\nline 4\n"
    );
}

#[test]
fn oversized_buffer_capacity_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.txt");
    fs::write(&path, "previous content that must go\n").unwrap();
    let spec = FileSpec::new(&path).with_buffer_capacity(usize::MAX);

    build_file_with(&spec, |p| {
        p.println(&[&"replaced"]);
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "replaced\n");
}
