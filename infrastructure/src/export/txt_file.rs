//! Plain-text file export

use async_trait::async_trait;
use quotebox_application::{ExportSink, ExportSinkError};
use std::path::PathBuf;
use tracing::debug;

/// Where a [`TxtFileExporter`] puts its output
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    /// Use the suggested file name inside this directory
    Directory(PathBuf),
    /// Write exactly this path, ignoring the suggested name
    File(PathBuf),
}

/// Writes export documents as UTF-8 text files
#[derive(Debug, Clone)]
pub struct TxtFileExporter {
    target: Target,
}

impl TxtFileExporter {
    /// Export into `directory` under the suggested file name
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::Directory(directory.into()),
        }
    }

    /// Export to a fixed file path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
        }
    }

    fn resolve(&self, file_name: &str) -> PathBuf {
        match &self.target {
            Target::Directory(dir) => dir.join(file_name),
            Target::File(path) => path.clone(),
        }
    }
}

#[async_trait]
impl ExportSink for TxtFileExporter {
    async fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, ExportSinkError> {
        let path = self.resolve(file_name);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ExportSinkError::CreateFailed {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
        }

        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| ExportSinkError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = TxtFileExporter::in_directory(dir.path().join("nested/out"));

        let path = exporter.write("list_2024-01-01.txt", "body").await.unwrap();

        assert_eq!(path, dir.path().join("nested/out/list_2024-01-01.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "body");
    }

    #[tokio::test]
    async fn test_fixed_path_ignores_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("mine.txt");
        let exporter = TxtFileExporter::at_path(&target);

        let path = exporter.write("ignored.txt", "x").await.unwrap();

        assert_eq!(path, target);
        assert!(!dir.path().join("ignored.txt").exists());
    }

    #[tokio::test]
    async fn test_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should go
        let target = dir.path().join("taken");
        std::fs::create_dir(&target).unwrap();

        let err = TxtFileExporter::at_path(&target)
            .write("x.txt", "x")
            .await
            .unwrap_err();

        assert!(matches!(err, ExportSinkError::WriteFailed { .. }));
    }
}
