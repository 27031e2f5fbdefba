//! Tests for file opening policies.

use std::fs;
use std::io::{ErrorKind, Write};

use crate::config::FileExistsPolicy;
use crate::io::open_file;

#[test]
fn overwrite_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"old content").unwrap();

    let mut file = open_file(&path, FileExistsPolicy::Overwrite).unwrap();
    file.write_all(b"new").unwrap();
    drop(file);

    assert_eq!(fs::read(&path).unwrap(), b"new".to_vec());
}

#[test]
fn append_keeps_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"abc").unwrap();

    let mut file = open_file(&path, FileExistsPolicy::Append).unwrap();
    file.write_all(b"def").unwrap();
    drop(file);

    assert_eq!(fs::read(&path).unwrap(), b"abcdef".to_vec());
}

#[test]
fn error_policy_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"abc").unwrap();

    let err = open_file(&path, FileExistsPolicy::Error).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());
}

#[test]
fn every_policy_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    for (i, policy) in [
        FileExistsPolicy::Overwrite,
        FileExistsPolicy::Append,
        FileExistsPolicy::Error,
    ]
    .into_iter()
    .enumerate()
    {
        let path = dir.path().join(format!("new-{i}.txt"));
        open_file(&path, policy).unwrap();
        assert!(path.exists());
    }
}
