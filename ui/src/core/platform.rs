//! Filesystem locations and the export write path.

use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};

use crate::report::ExportError;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "Labdash", "Labdash")
}

pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Where exports land: the user's Downloads folder, else the app data dir.
pub fn export_dir() -> Result<PathBuf, ExportError> {
    let downloads = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf));
    if let Some(dir) = downloads {
        return Ok(dir);
    }

    project_dirs()
        .map(|dirs| dirs.data_dir().join("exports"))
        .ok_or(ExportError::NoExportDir)
}

/// Writes `bytes` to `dir/filename`, replacing any previous export.
pub async fn save_export_in(
    dir: &Path,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<PathBuf, ExportError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

pub async fn save_export(filename: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError> {
    let dir = export_dir()?;
    save_export_in(&dir, filename, bytes).await
}
