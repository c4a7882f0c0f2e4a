// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! `App::update` groups messages by component and delegates here. Each
//! handler borrows the state it touches through [`UpdateContext`], applies
//! the component's event, and returns any follow-up [`Task`].

use super::config::Config;
use super::persisted_state::AppState;
use super::{persistence, Message};
use crate::error::RenderError;
use crate::i18n::Catalog;
use crate::invoice::{self, InvoiceRecord, PreviewModel};
use crate::render::{self, PageConfig, PdfRenderer};
use crate::ui::form::{self, Event as FormEvent, FormState};
use crate::ui::header::{self, Event as HeaderEvent, SaveStatus};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Mutable view over the application state, shared by all handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a mut Catalog,
    pub config: &'a mut Config,
    pub record: &'a mut InvoiceRecord,
    pub form_state: &'a mut FormState,
    pub currency: &'a mut Option<String>,
    pub preview: &'a mut PreviewModel,
    pub save_status: &'a mut SaveStatus,
    pub exporting: &'a mut bool,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// The currency the preview and the export render with: the session
    /// selection when the user picked one, otherwise the locale default.
    pub fn effective_currency(&self) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| self.catalog.default_currency())
    }

    /// Recomputes the preview model from the current record and locale.
    pub fn refresh_preview(&mut self) {
        let currency = self.effective_currency();
        *self.preview = invoice::recompute(self.record, self.catalog, &currency);
    }
}

/// Handles form edits, line item changes, reset, and the export trigger.
pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    match form::update_with_state(ctx.record, ctx.form_state, message) {
        FormEvent::None => Task::none(),
        FormEvent::Edited => {
            persistence::persist_record(ctx.record, ctx.save_status, ctx.notifications);
            ctx.refresh_preview();
            Task::none()
        }
        FormEvent::RemoveRejected => {
            ctx.notifications
                .push(Notification::warning("notification.itemFloor"));
            Task::none()
        }
        FormEvent::ResetRequested => handle_form_reset(ctx),
        FormEvent::ExportRequested => handle_export_requested(ctx),
    }
}

/// Restores the template record and drops the persisted copy.
fn handle_form_reset(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.record = InvoiceRecord::template();
    ctx.record.ensure_default_dates();
    persistence::clear_record(ctx.notifications);

    ctx.form_state.revalidate(ctx.record);
    ctx.refresh_preview();
    ctx.notifications
        .push(Notification::success("notification.formReset"));

    Task::none()
}

/// Handles locale and currency selection from the header pickers.
pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::LocaleChanged(locale) => {
            // Labels, number formatting, and text direction all come from the
            // catalog, so a successful switch needs a fresh preview model.
            if persistence::apply_language_change(
                ctx.catalog,
                ctx.config,
                &locale,
                ctx.notifications,
            ) {
                ctx.refresh_preview();
            }
            Task::none()
        }
        HeaderEvent::CurrencyChanged(currency) => {
            *ctx.currency = Some(currency);
            ctx.refresh_preview();
            Task::none()
        }
    }
}

/// Validates the record and opens the save dialog.
///
/// Validation failures surface as an error toast and leave the app
/// interactive; only a valid record flips `exporting` and opens the dialog.
pub fn handle_export_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.exporting {
        return Task::none();
    }

    let request = match invoice::prepare_export(ctx.record) {
        Ok(request) => request,
        Err(error) => {
            ctx.notifications
                .push(Notification::error(error.i18n_key()));
            return Task::none();
        }
    };

    *ctx.exporting = true;

    let filename = request.suggested_filename;
    let last_export_directory = ctx.app_state.last_export_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter("PDF Document", &["pdf"]);

            if let Some(dir) = last_export_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ExportDialogResult,
    )
}

/// Renders the invoice to the chosen path, off the UI thread.
pub fn handle_export_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // Dialog cancelled.
        *ctx.exporting = false;
        return Task::none();
    };

    let model = ctx.preview.clone();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                render::render_to_file(&PdfRenderer, &model, &PageConfig::letter(), &path)
                    .map(|()| path)
            })
            .await
            .map_err(|error| RenderError::TaskFailed(error.to_string()))?
        },
        Message::ExportCompleted,
    )
}

/// Finishes the export flow: success toast plus remembered directory, or an
/// error toast keyed by what failed.
pub fn handle_export_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, RenderError>,
) -> Task<Message> {
    *ctx.exporting = false;

    match result {
        Ok(path) => {
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("invoice.pdf")
                .to_string();
            ctx.notifications.push(
                Notification::success("notification.exportSuccess").with_arg("file", filename),
            );
            ctx.app_state.set_last_export_directory_from_file(&path);
            persistence::persist_app_state(ctx.app_state, ctx.notifications);
        }
        Err(error) => {
            ctx.notifications
                .push(Notification::error(error.i18n_key()));
        }
    }

    Task::none()
}
