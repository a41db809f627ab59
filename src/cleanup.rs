//! Removal of empty folders left behind in the source directory.
//!
//! Only direct children are examined. A folder holding nothing but empty folders is
//! not empty and stays, and the source directory itself is never removed.

use crate::file_organizer::{OrganizeError, OrganizeResult, Organizer};
use log::{error, info};
use std::fs;
use std::path::PathBuf;

/// Outcome of an empty-folder pass.
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    /// Folders that were removed (or would be, in a dry run).
    pub removed: Vec<PathBuf>,
    /// Folders that could not be inspected or removed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl PruneReport {
    /// Number of folders removed.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

impl Organizer {
    /// Removes every empty direct subdirectory of the source directory.
    ///
    /// Symlinks to directories are left alone. A failure on one folder is logged and
    /// recorded without stopping the pass.
    pub fn clean_empty_folders(&self) -> OrganizeResult<PruneReport> {
        self.ensure_source_dir()?;

        let source_dir = self.source_dir();
        let entries = fs::read_dir(source_dir).map_err(|e| OrganizeError::ReadDirFailed {
            path: source_dir.to_path_buf(),
            source: e,
        })?;

        let mut report = PruneReport::default();
        let mut folders: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) if entry.file_type().is_ok_and(|t| t.is_dir()) => {
                    folders.push(entry.path())
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Error reading entry in {}: {}", source_dir.display(), e);
                    report.failures.push((source_dir.to_path_buf(), e.to_string()));
                }
            }
        }
        folders.sort();

        for folder in folders {
            let name = folder
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            let is_empty = match fs::read_dir(&folder) {
                Ok(mut children) => children.next().is_none(),
                Err(e) => {
                    error!("Error removing folder {}: {}", name, e);
                    report.failures.push((folder, e.to_string()));
                    continue;
                }
            };
            if !is_empty {
                continue;
            }

            if !self.is_dry_run()
                && let Err(e) = fs::remove_dir(&folder)
            {
                let err = OrganizeError::FolderRemovalFailed {
                    path: folder.clone(),
                    source: e,
                };
                error!("Error removing folder {}: {}", name, err);
                report.failures.push((folder, err.to_string()));
                continue;
            }

            info!("{}Removed empty folder: {}", self.log_prefix(), name);
            report.removed.push(folder);
        }

        info!(
            "{}Removed {} empty folders!",
            self.log_prefix(),
            report.removed_count()
        );
        Ok(report)
    }
}
