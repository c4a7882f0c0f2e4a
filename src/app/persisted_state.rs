// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across
//! sessions but is not user-configurable (unlike preferences in `settings.toml`)
//! and is not part of the invoice record (which has its own JSON snapshot file).
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_INVOICE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
///
/// This struct contains transient state that improves UX but is not
/// user-configurable. It is stored separately from user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory a PDF was exported to.
    /// Used as the initial directory when opening the export save dialog.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning message key explaining what went wrong.
    /// The warning can be displayed to the user via notifications.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. `ICED_INVOICE_DATA_DIR` environment variable (if set)
    /// 3. Platform-specific data directory
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification.stateParseError".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification.stateReadError".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning message key if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    ///
    /// Same path resolution as [`AppState::load_from`].
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification.stateWriteError".to_string());
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification.stateWriteError".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification.stateWriteError".to_string());
                }
                None
            }
            Err(_) => Some("notification.stateWriteError".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Sets the last export directory from a file path.
    ///
    /// Extracts the parent directory from the given path. If the path has no
    /// parent (e.g., root path), the directory is not updated.
    pub fn set_last_export_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_export_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_last_directory() {
        let state = AppState::default();
        assert!(state.last_export_directory.is_none());
    }

    #[test]
    fn set_last_export_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(std::path::Path::new(
            "/home/user/invoices/invoice_42_2026-08-23.pdf",
        ));
        assert_eq!(
            state.last_export_directory,
            Some(PathBuf::from("/home/user/invoices"))
        );
    }

    #[test]
    fn set_last_export_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(std::path::Path::new("/"));
        // Root has no parent, so directory should remain None
        assert!(state.last_export_directory.is_none());
    }

    #[test]
    fn load_does_not_panic() {
        // AppState::load() should never panic, even if the file exists
        // or doesn't exist. It should always return a valid AppState.
        // Note: We can't assert field values because the real state file
        // may exist on the developer's machine.
        let _state = AppState::load();
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_export_directory: Some(PathBuf::from("/test/export/directory")),
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");

        let expected_path = base_dir.join(STATE_FILE);
        assert!(expected_path.exists(), "state file should exist");

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let state_path = base_dir.join(STATE_FILE);
        fs::write(&state_path, "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning, Some("notification.stateParseError".to_string()));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_export_directory: Some(PathBuf::from("/test")),
        };

        let result = state.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
