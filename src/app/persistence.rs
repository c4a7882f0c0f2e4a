// SPDX-License-Identifier: MPL-2.0
//! Persistence side effects shared by the update handlers.
//!
//! Auto-save of the invoice record, config writes on language change, and
//! the window-state file all funnel through here so the handlers stay free
//! of file-system details.

use super::config::{self, Config};
use super::persisted_state::AppState;
use crate::i18n::Catalog;
use crate::invoice::{store, InvoiceRecord};
use crate::ui::header::SaveStatus;
use crate::ui::notifications::{Manager, Notification};
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Persists the record after an edit and flashes the save status.
///
/// Guarded during tests to keep isolation: unit tests exercise the handler
/// logic on the record itself rather than through disk writes.
pub fn persist_record(
    record: &InvoiceRecord,
    save_status: &mut SaveStatus,
    notifications: &mut Manager,
) {
    if cfg!(test) {
        return;
    }

    match store::save(record) {
        None => *save_status = SaveStatus::Saved(Instant::now()),
        Some(key) => {
            *save_status = SaveStatus::Failed(Instant::now());
            notifications.push(Notification::warning(key));
        }
    }
}

/// Removes the persisted record after a form reset.
pub fn clear_record(notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    if let Some(key) = store::clear() {
        notifications.push(Notification::warning(key));
    }
}

/// Applies the newly selected locale and persists it to config.
///
/// Returns `true` when the locale actually switched; on failure the active
/// locale is unchanged and the user is told which dictionary failed.
pub fn apply_language_change(
    catalog: &mut Catalog,
    config: &mut Config,
    locale: &LanguageIdentifier,
    notifications: &mut Manager,
) -> bool {
    match catalog.set_active_locale(locale) {
        Ok(_direction) => {
            config.general.language = Some(locale.to_string());
            if !cfg!(test) {
                if let Err(error) = config::save(config) {
                    eprintln!("Failed to save config: {error}");
                }
            }
            true
        }
        Err(error) => {
            notifications.push(
                Notification::error(error.i18n_key()).with_arg("locale", error.locale()),
            );
            false
        }
    }
}

/// Persists the window state (last export directory), surfacing a warning
/// toast when the write fails.
pub fn persist_app_state(app_state: &AppState, notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    if let Some(key) = app_state.save() {
        notifications.push(Notification::warning(key));
    }
}
