// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::RenderError;
use crate::ui::form;
use crate::ui::header;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Header(header::Message),
    Notification(notifications::NotificationMessage),
    /// Run the export flow: validate, then open the save dialog.
    /// Reachable from the form button and the keyboard shortcut.
    ExportRequested,
    /// Result from the save-as dialog; `None` means the user cancelled.
    ExportDialogResult(Option<PathBuf>),
    /// Result from the background render-and-write task.
    ExportCompleted(Result<PathBuf, RenderError>),
    /// Force a preview recompute (keyboard shortcut).
    RecomputeRequested,
    /// Periodic tick while timed UI state is pending.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for invoice and state files).
    /// Takes precedence over `ICED_INVOICE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_INVOICE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
