//! Filesystem gateway
//!
//! The three editor operations (list, read, write/append) independent of
//! any transport. Every call either returns a complete value or a
//! [`FileError`]; nothing is cached and nothing is sandboxed.

mod error;

pub use error::{FileError, FileOp};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// One direct child of a listed directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    /// Listed directory joined with `name`
    pub path: String,
    pub is_directory: bool,
    /// Last modification, RFC 3339 UTC with milliseconds
    pub modified: String,
}

/// Map a caller-supplied path to the filesystem path operated on.
///
/// Paths are taken as given (absolute or relative to the working
/// directory). A root jail would go here.
pub fn resolve_path(raw: &str) -> PathBuf {
    PathBuf::from(raw)
}

/// Treat absent and empty values alike as missing
pub fn require(value: Option<String>, message: &'static str) -> Result<String, FileError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FileError::MissingParameter(message)),
    }
}

/// List the direct children of a directory.
///
/// Entries come back in whatever order the OS enumerates them; no order is
/// guaranteed. Each child is stat'ed (following symlinks), and any failure
/// fails the whole listing.
pub async fn list_directory(dir: &str) -> Result<Vec<DirectoryEntry>, FileError> {
    let err = |e| FileError::io(FileOp::ReadDirectory, e);
    let dir_path = resolve_path(dir);

    let mut reader = fs::read_dir(&dir_path).await.map_err(err)?;
    let mut entries = Vec::new();

    while let Some(item) = reader.next_entry().await.map_err(err)? {
        let name = item.file_name();
        let child = dir_path.join(&name);
        let meta = fs::metadata(&child).await.map_err(err)?;
        let modified = meta.modified().map_err(err)?;

        entries.push(DirectoryEntry {
            name: name.to_string_lossy().into_owned(),
            path: child.to_string_lossy().into_owned(),
            is_directory: meta.is_dir(),
            modified: format_timestamp(modified),
        });
    }

    Ok(entries)
}

/// Read a whole file as UTF-8 text. There is no size cap.
pub async fn read_file(path: &str) -> Result<String, FileError> {
    fs::read_to_string(resolve_path(path))
        .await
        .map_err(|e| FileError::io(FileOp::ReadFile, e))
}

/// Create or truncate a file and write `content` to it
pub async fn write_file(path: &str, content: &str) -> Result<(), FileError> {
    fs::write(resolve_path(path), content)
        .await
        .map_err(|e| FileError::io(FileOp::WriteFile, e))
}

/// Append `content` to a file, creating it if needed
pub async fn append_file(path: &str, content: &str) -> Result<(), FileError> {
    let err = |e| FileError::io(FileOp::AppendFile, e);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(resolve_path(path))
        .await
        .map_err(err)?;
    file.write_all(content.as_bytes()).await.map_err(err)?;
    file.flush().await.map_err(err)
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_list_directory_children() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("note.md"), "# hi").unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();
        std::fs::write(dir.path().join("drafts/nested.md"), "deep").unwrap();

        let mut entries = list_directory(dir.path().to_str().unwrap()).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "drafts");
        assert!(entries[0].is_directory);
        assert_eq!(entries[1].name, "note.md");
        assert!(!entries[1].is_directory);
        assert_eq!(entries[1].path, path_str(&dir, "note.md"));
        assert!(entries[1].modified.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = list_directory(&path_str(&dir, "nope")).await.unwrap_err();
        assert!(matches!(err, FileError::Io { op: FileOp::ReadDirectory, .. }));
        assert!(err.to_string().starts_with("failed to read directory: "));
    }

    #[tokio::test]
    async fn test_list_file_is_error() {
        let dir = TempDir::new().unwrap();
        let file = path_str(&dir, "plain.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(list_directory(&file).await.is_err());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let file = path_str(&dir, "doc.md");

        for content in ["", "plain", "多字节 ✓\nline two\n"] {
            write_file(&file, content).await.unwrap();
            assert_eq!(read_file(&file).await.unwrap(), content);
        }
    }

    #[tokio::test]
    async fn test_append_creates_and_extends() {
        let dir = TempDir::new().unwrap();
        let file = path_str(&dir, "log.md");

        append_file(&file, "A").await.unwrap();
        append_file(&file, "B").await.unwrap();
        assert_eq!(read_file(&file).await.unwrap(), "AB");
    }

    #[tokio::test]
    async fn test_append_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = append_file(&path_str(&dir, "no/such/dir.md"), "x")
            .await
            .unwrap_err();
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("failed to append file: "));
    }

    #[tokio::test]
    async fn test_read_failures() {
        let dir = TempDir::new().unwrap();

        let err = read_file(&path_str(&dir, "missing.md")).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to read file: "));

        // A directory is not readable as text
        assert!(read_file(dir.path().to_str().unwrap()).await.is_err());

        let binary = path_str(&dir, "blob.bin");
        std::fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(read_file(&binary).await.is_err());
    }

    #[tokio::test]
    async fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = write_file(&path_str(&dir, "no/such/dir.md"), "x")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to write file: "));
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some("a".into()), "m").unwrap(), "a");
        assert!(require(Some(String::new()), "m").unwrap_err().is_validation());
        assert!(require(None, "m").unwrap_err().is_validation());
    }

    #[test]
    fn test_timestamp_format() {
        let t = SystemTime::UNIX_EPOCH + std::time::Duration::from_millis(1_700_000_000_123);
        assert_eq!(format_timestamp(t), "2023-11-14T22:13:20.123Z");
    }
}
