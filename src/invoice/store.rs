// SPDX-License-Identifier: MPL-2.0
//! Wholesale JSON persistence for the invoice record.
//!
//! The record is written as one JSON snapshot on every mutation
//! (last-write-wins, no debounce) and restored at startup by merging the
//! stored fields onto the prefilled template. Restoring is a partial merge
//! rather than a plain deserialize so a sparse or truncated file recovers
//! what it has; see [`InvoiceRecord::merge_from`].
//!
//! All failures degrade: load falls back to the template, save reports a
//! notification key. Nothing here returns a hard error.

use std::fs;
use std::path::PathBuf;

use super::record::InvoiceRecord;
use crate::app::paths;

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "invoice.json";

/// Returns the full path to the storage file with optional base override.
fn storage_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STORAGE_FILE);
        path
    })
}

/// Loads the invoice record from the default location.
///
/// Returns the restored record and an optional notification key. The record
/// is always ready for editing: stored fields are merged onto the template
/// and empty dates are filled relative to today.
pub fn load() -> (InvoiceRecord, Option<String>) {
    load_with_override(None)
}

/// Loads the invoice record from a custom base directory.
///
/// Same path resolution as the other persistence modules: explicit override,
/// then `ICED_INVOICE_DATA_DIR`, then the platform data directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (InvoiceRecord, Option<String>) {
    let mut record = InvoiceRecord::template();

    let warning = match storage_path_with_override(base_dir) {
        Some(path) if path.exists() => match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<InvoiceRecord>(&content) {
                Ok(loaded) => {
                    record.merge_from(loaded);
                    None
                }
                Err(_) => Some("notification.storageLoadError".to_string()),
            },
            Err(_) => Some("notification.storageLoadError".to_string()),
        },
        _ => None,
    };

    record.ensure_default_dates();
    (record, warning)
}

/// Saves the invoice record to the default location.
///
/// Creates the parent directory if it doesn't exist. Returns an optional
/// notification key if the save failed; the caller surfaces it in the
/// save-status line and keeps editing.
pub fn save(record: &InvoiceRecord) -> Option<String> {
    save_with_override(record, None)
}

/// Saves the invoice record to a custom base directory.
pub fn save_with_override(record: &InvoiceRecord, base_dir: Option<PathBuf>) -> Option<String> {
    let Some(path) = storage_path_with_override(base_dir) else {
        return Some("notification.storageSaveError".to_string());
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return Some("notification.storageSaveError".to_string());
        }
    }

    let Ok(json) = serde_json::to_string_pretty(record) else {
        return Some("notification.storageSaveError".to_string());
    };

    match fs::write(&path, json) {
        Ok(()) => None,
        Err(_) => Some("notification.storageSaveError".to_string()),
    }
}

/// Removes the storage file, used by the reset action.
///
/// A missing file counts as success; only an actual failed removal reports.
pub fn clear() -> Option<String> {
    clear_with_override(None)
}

/// Removes the storage file under a custom base directory.
pub fn clear_with_override(base_dir: Option<PathBuf>) -> Option<String> {
    match storage_path_with_override(base_dir) {
        Some(path) if path.exists() => match fs::remove_file(&path) {
            Ok(()) => None,
            Err(_) => Some("notification.storageSaveError".to_string()),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::record::LineItem;
    use tempfile::tempdir;

    #[test]
    fn load_from_empty_directory_returns_template_with_dates() {
        let temp_dir = tempdir().expect("create temp dir");

        let (record, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(record.invoice_number, "1");
        assert!(!record.creation_date.is_empty());
        assert!(!record.due_date.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_record() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut record = InvoiceRecord::template();
        record.invoice_number = "2026-031".to_string();
        record.creation_date = "2026-08-20".to_string();
        record.due_date = "2026-08-22".to_string();
        record.line_items = vec![LineItem::new("Audit", "4200")];

        assert!(save_with_override(&record, Some(base_dir.clone())).is_none());
        let (restored, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(restored, record);
    }

    #[test]
    fn sparse_file_merges_onto_template() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STORAGE_FILE), r#"{"invoiceNumber": "42"}"#)
            .expect("write storage file");

        let (record, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(record.invoice_number, "42");
        assert_eq!(record.bill_from_name, "John Doe");
        assert_eq!(record.line_items.len(), 3);
    }

    #[test]
    fn malformed_file_degrades_to_template_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STORAGE_FILE), "{ this is not json")
            .expect("write storage file");

        let (record, warning) = load_with_override(Some(base_dir));

        assert_eq!(warning, Some("notification.storageLoadError".to_string()));
        assert_eq!(record.invoice_number, "1");
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let record = InvoiceRecord::template();
        assert!(save_with_override(&record, Some(nested.clone())).is_none());
        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn clear_removes_the_storage_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let record = InvoiceRecord::template();
        assert!(save_with_override(&record, Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STORAGE_FILE).exists());

        assert!(clear_with_override(Some(base_dir.clone())).is_none());
        assert!(!base_dir.join(STORAGE_FILE).exists());
    }

    #[test]
    fn clear_on_missing_file_is_silent() {
        let temp_dir = tempdir().expect("create temp dir");
        assert!(clear_with_override(Some(temp_dir.path().to_path_buf())).is_none());
    }
}
