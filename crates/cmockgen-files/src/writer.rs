//! Staged, all-or-nothing writing of generated mocks.

use crate::types::{FilesError, Result};
use cmockgen_codegen::GeneratedMock;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};

/// Writes generated mocks below an output directory.
///
/// Writing happens in two phases:
/// 1. every file is written to a temporary file in its target directory
/// 2. all temporary files are renamed onto their final paths
///
/// Nothing is visible at a final path until every file of the mock was
/// staged successfully. Before a file is replaced, its previous content is
/// copied to a backup next to it. If a rename fails, every earlier rename of
/// the same call is undone: replaced files get their backup back and newly
/// created files are removed.
#[derive(Debug, Clone)]
pub struct MockWriter {
    base: PathBuf,
}

impl MockWriter {
    /// Creates a writer for the output directory `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Output directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Writes every file of `mock`, returning the final paths in order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a file path is empty, absolute, or contains `..`
    /// - two files share a path
    /// - I/O operations fail (permissions, disk space, etc.)
    pub fn write(&self, mock: &GeneratedMock) -> Result<Vec<PathBuf>> {
        let mut targets: Vec<PathBuf> = Vec::with_capacity(mock.file_count());
        for file in mock.files() {
            let target = self.resolve(&file.path)?;
            if targets.contains(&target) {
                return Err(FilesError::DuplicatePath {
                    path: file.path.clone(),
                });
            }
            targets.push(target);
        }

        let mut staged = Vec::with_capacity(targets.len());
        for (file, target) in mock.files().zip(&targets) {
            staged.push(stage(target, &file.content)?);
        }

        let mut persisted: Vec<Persisted<'_>> = Vec::with_capacity(targets.len());
        for (temp, target) in staged.into_iter().zip(&targets) {
            let backup = match back_up(target) {
                Ok(backup) => backup,
                Err(e) => {
                    rollback(persisted);
                    return Err(e);
                }
            };
            if let Err(e) = temp.persist(target) {
                rollback(persisted);
                return Err(FilesError::IoError {
                    path: target.display().to_string(),
                    source: e.error,
                });
            }
            persisted.push(Persisted { target, backup });
        }
        // Deletes the backups.
        drop(persisted);

        tracing::info!(
            "Wrote {} file(s) for {} to {}",
            targets.len(),
            mock.mock_name,
            self.base.display()
        );
        Ok(targets)
    }

    /// Maps a generated file path onto a path below the output directory.
    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        if relative.trim().is_empty() {
            return Err(FilesError::InvalidPath {
                path: relative.to_string(),
            });
        }

        let path = Path::new(relative);
        if !path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        {
            return Err(FilesError::InvalidPathComponent {
                path: relative.to_string(),
            });
        }

        Ok(self.base.join(path))
    }
}

/// Writes `content` to a temporary file in the directory of `target`.
fn stage(target: &Path, content: &str) -> Result<NamedTempFile> {
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| FilesError::IoError {
        path: parent.display().to_string(),
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FilesError::IoError {
        path: parent.display().to_string(),
        source: e,
    })?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.flush())
        .map_err(|e| FilesError::IoError {
            path: temp.path().display().to_string(),
            source: e,
        })?;

    tracing::debug!("Staged {}", target.display());
    Ok(temp)
}

/// A target renamed into place, with the backup of what it replaced.
struct Persisted<'a> {
    target: &'a Path,
    backup: Option<TempPath>,
}

/// Copies an existing regular file at `target` to a temporary backup.
///
/// The backup is deleted when dropped unless it is restored.
fn back_up(target: &Path) -> Result<Option<TempPath>> {
    if !target.is_file() {
        return Ok(None);
    }

    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    let backup = tempfile::Builder::new()
        .prefix(".cmockgen-backup-")
        .tempfile_in(parent)
        .map_err(|e| FilesError::IoError {
            path: parent.display().to_string(),
            source: e,
        })?
        .into_temp_path();
    fs::copy(target, &backup).map_err(|e| FilesError::IoError {
        path: target.display().to_string(),
        source: e,
    })?;

    tracing::debug!("Backed up {}", target.display());
    Ok(Some(backup))
}

/// Undoes renames in reverse order.
fn rollback(persisted: Vec<Persisted<'_>>) {
    for entry in persisted.into_iter().rev() {
        let result = match entry.backup {
            Some(backup) => backup.persist(entry.target).map_err(|e| e.error),
            None => fs::remove_file(entry.target),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to roll back {}: {}", entry.target.display(), e);
        }
    }
}
