#![cfg(test)]

use std::fs;
use std::io::{self, Cursor, Write};

use super::*;

#[test]
fn test_read_lines() {
    let lines = read_lines(Cursor::new("first\nsecond\r\n\nlast\n")).unwrap();
    assert_eq!(
        lines.to_vec(),
        ["first", "second", "", "last"],
        "Terminators should be stripped and blank lines kept."
    );

    let empty = read_lines(Cursor::new("")).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_read_lines_invalid_utf8() {
    let err = read_lines(Cursor::new(b"ok\n\xff\xfe\n".to_vec())).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_read_lines_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    {
        let mut file = fs::File::create(&path).unwrap();
        for i in 0..25 {
            writeln!(file, "line {i}").unwrap();
        }
    }

    let lines = read_lines_from(&path).unwrap();

    assert_eq!(lines.len(), 25);
    assert_eq!(lines.cap(), 30);
    assert_eq!(*lines[24], "line 24");

    let missing = read_lines_from(path.with_extension("missing")).unwrap_err();
    assert_eq!(missing.kind(), io::ErrorKind::NotFound);
}
