//! Dashboard settings.
//!
//! Defaults reproduce the fixed behaviour (workbook next to the working
//! directory, `Filtered_Report.csv`, top ten parameters, `"Pass"` as the
//! compliant conclusion). A `dashboard.json` in the per-user config directory
//! may override individual fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::report::{EXPORT_FILENAME, PASS_LABEL};

pub const DEFAULT_DATASET_PATH: &str = "Smart_Lab_System_Full_Data.xlsx";
pub const CONFIG_FILENAME: &str = "dashboard.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub export_filename: String,
    pub top_parameters: usize,
    pub pass_label: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            export_filename: EXPORT_FILENAME.to_string(),
            top_parameters: 10,
            pass_label: PASS_LABEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads `path`, falling back to defaults when it is absent or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no dashboard config; using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "invalid dashboard config; using defaults");
                Self::default()
            }
        }
    }

    /// Loads the per-user `dashboard.json`, if the platform has a config directory.
    pub fn from_user_config() -> Self {
        match crate::core::platform::config_dir() {
            Some(dir) => Self::load_or_default(&dir.join(CONFIG_FILENAME)),
            None => Self::default(),
        }
    }
}
