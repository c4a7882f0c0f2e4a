// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, preview, and header.
//!
//! The `App` struct wires together the domains (invoice record, localization,
//! rendering) and translates messages into side effects like auto-save or the
//! PDF export flow. This file intentionally keeps policy decisions (minimum
//! window size, persistence format, localization switching) close to the main
//! update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::Catalog;
use crate::invoice::{self, store, InvoiceRecord, PreviewModel};
use crate::ui::form::FormState;
use crate::ui::header::SaveStatus;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges the form, the live preview,
/// localization, and persisted state.
pub struct App {
    pub catalog: Catalog,
    config: config::Config,
    record: InvoiceRecord,
    form_state: FormState,
    /// Session currency override; `None` falls back to the locale default.
    currency: Option<String>,
    preview: PreviewModel,
    save_status: SaveStatus,
    /// True while an export (dialog or render task) is in flight.
    exporting: bool,
    theme_mode: ThemeMode,
    /// Persisted application state (last export directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.catalog.current_locale())
            .field("exporting", &self.exporting)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::default();
        let mut record = InvoiceRecord::template();
        record.ensure_default_dates();
        let mut form_state = FormState::new();
        form_state.revalidate(&record);
        let preview = invoice::recompute(&record, &catalog, &catalog.default_currency());

        Self {
            catalog,
            config: config::Config::default(),
            record,
            form_state,
            currency: None,
            preview,
            save_status: SaveStatus::Idle,
            exporting: false,
            theme_mode: ThemeMode::System,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the config file, the persisted
    /// record, and the window state, surfacing load problems as toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (catalog, locale_error) = Catalog::new(flags.lang.clone(), &config);

        let mut app = App {
            catalog,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.config = config;

        let (record, store_warning) = store::load();
        app.record = record;
        app.form_state.revalidate(&app.record);

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = store_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(error) = locale_error {
            app.notifications.push(
                notifications::Notification::error(error.i18n_key())
                    .with_arg("locale", error.locale()),
            );
        }

        app.preview = invoice::recompute(&app.record, &app.catalog, &app.effective_currency());

        (app, Task::none())
    }

    /// The currency the preview and the export render with.
    fn effective_currency(&self) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| self.catalog.default_currency())
    }

    fn title(&self) -> String {
        self.catalog.tr("meta.title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.effective_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.save_status != SaveStatus::Idle,
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            catalog: &mut self.catalog,
            config: &mut self.config,
            record: &mut self.record,
            form_state: &mut self.form_state,
            currency: &mut self.currency,
            preview: &mut self.preview,
            save_status: &mut self.save_status,
            exporting: &mut self.exporting,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::ExportRequested => update::handle_export_requested(&mut ctx),
            Message::ExportDialogResult(path) => {
                update::handle_export_dialog_result(&mut ctx, path)
            }
            Message::ExportCompleted(result) => update::handle_export_completed(&mut ctx, result),
            Message::RecomputeRequested => {
                ctx.refresh_preview();
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Auto-dismiss expired toasts and fold expired save flashes
                // back to the idle auto-save note.
                self.notifications.tick();
                self.save_status = self.save_status.settled(Instant::now());
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalog: &self.catalog,
            record: &self.record,
            form_state: &self.form_state,
            preview: &self.preview,
            save_status: self.save_status,
            currency: self.effective_currency(),
            exporting: self.exporting,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::invoice::Field;
    use crate::ui::form;
    use crate::ui::header;
    use crate::ui::notifications::Severity;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::tempdir;

    /// Points both application directories at a fresh temp dir for the
    /// duration of the test, so startup loads see an empty slate.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
    }

    fn first_notification(app: &App) -> &crate::ui::notifications::Notification {
        app.notifications
            .visible()
            .next()
            .expect("expected a notification")
    }

    #[test]
    fn new_starts_with_the_template_record() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.record.invoice_number, "1");
            assert_eq!(app.record.line_items.len(), 3);
            assert!(!app.record.creation_date.is_empty());
            assert_eq!(app.preview.items.len(), 3);
            assert!(!app.exporting);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_restores_a_previously_saved_record() {
        with_temp_dirs(|dir| {
            std::fs::write(
                dir.join("invoice.json"),
                r#"{"invoiceNumber": "77", "billToName": "Acme Corp"}"#,
            )
            .expect("write stored record");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.record.invoice_number, "77");
            assert_eq!(app.record.field(Field::BillToName), "Acme Corp");
            assert_eq!(app.preview.invoice_number, "77");
        });
    }

    #[test]
    fn new_honors_the_lang_flag() {
        with_temp_dirs(|_| {
            let flags = Flags {
                lang: Some("fr".to_string()),
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);

            assert_eq!(app.catalog.current_locale().language.as_str(), "fr");
            assert_eq!(app.preview.labels.invoice, app.catalog.tr("preview.invoice"));
        });
    }

    #[test]
    fn field_edit_flows_into_the_preview() {
        let mut app = App::default();

        let _ = app.update(Message::Form(form::Message::FieldChanged(
            Field::BillToName,
            "Acme Corp".into(),
        )));

        assert_eq!(app.record.field(Field::BillToName), "Acme Corp");
        assert_eq!(app.preview.bill_to_name, "Acme Corp");
    }

    #[test]
    fn item_edits_recompute_the_total() {
        let mut app = App::default();
        // Template items: 1500 + 750 + 250.
        assert_eq!(
            app.preview.total,
            app.catalog.format_currency(2500.0, "USD")
        );

        let _ = app.update(Message::Form(form::Message::ItemAmountChanged(
            0,
            "2000".into(),
        )));
        let _ = app.update(Message::Form(form::Message::AddItem));
        let _ = app.update(Message::Form(form::Message::ItemAmountChanged(
            3,
            "500".into(),
        )));

        assert_eq!(app.record.line_items.len(), 4);
        assert_eq!(
            app.preview.total,
            app.catalog.format_currency(3500.0, "USD")
        );
    }

    #[test]
    fn removing_the_last_row_warns_and_keeps_it() {
        let mut app = App::default();
        let _ = app.update(Message::Form(form::Message::RemoveItem(0)));
        let _ = app.update(Message::Form(form::Message::RemoveItem(0)));
        assert_eq!(app.record.line_items.len(), 1);
        assert!(!app.notifications.has_notifications());

        let _ = app.update(Message::Form(form::Message::RemoveItem(0)));

        assert_eq!(app.record.line_items.len(), 1);
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message_key(), "notification.itemFloor");
    }

    #[test]
    fn reset_restores_the_template_and_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::Form(form::Message::FieldChanged(
            Field::InvoiceNumber,
            "99".into(),
        )));

        let _ = app.update(Message::Form(form::Message::ResetForm));

        assert_eq!(app.record.invoice_number, "1");
        assert_eq!(app.preview.invoice_number, "1");
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notification.formReset");
    }

    #[test]
    fn export_with_a_missing_date_is_rejected() {
        let mut app = App::default();
        let _ = app.update(Message::Form(form::Message::FieldChanged(
            Field::CreationDate,
            String::new(),
        )));

        let _ = app.update(Message::ExportRequested);

        assert!(!app.exporting);
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.message_key(),
            "notification.missingCreationDate"
        );
    }

    #[test]
    fn export_without_described_items_is_rejected() {
        let mut app = App::default();
        for index in 0..3 {
            let _ = app.update(Message::Form(form::Message::ItemDescriptionChanged(
                index,
                String::new(),
            )));
        }

        let _ = app.update(Message::ExportRequested);

        assert!(!app.exporting);
        assert_eq!(
            first_notification(&app).message_key(),
            "notification.missingLineItems"
        );
    }

    #[test]
    fn valid_export_request_flips_the_exporting_flag() {
        // The default record is exportable: invoice number, filled dates,
        // and described template items.
        let mut app = App::default();

        let _ = app.update(Message::ExportRequested);

        assert!(app.exporting);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn second_export_request_is_ignored_while_one_runs() {
        let mut app = App::default();
        let _ = app.update(Message::ExportRequested);

        // The export button is disabled, but the keyboard shortcut still
        // emits the message; it must not restart the flow.
        let _ = app.update(Message::ExportRequested);

        assert!(app.exporting);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn cancelling_the_dialog_clears_the_exporting_flag() {
        let mut app = App::default();
        app.exporting = true;

        let _ = app.update(Message::ExportDialogResult(None));

        assert!(!app.exporting);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn completed_export_toasts_and_remembers_the_directory() {
        let mut app = App::default();
        app.exporting = true;

        let _ = app.update(Message::ExportCompleted(Ok(PathBuf::from(
            "/exports/invoice_1_2026-08-23.pdf",
        ))));

        assert!(!app.exporting);
        assert_eq!(
            app.app_state.last_export_directory,
            Some(PathBuf::from("/exports"))
        );
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notification.exportSuccess");
        assert_eq!(
            notification.message_args(),
            &[("file".to_string(), "invoice_1_2026-08-23.pdf".to_string())]
        );
    }

    #[test]
    fn failed_export_toasts_an_error() {
        let mut app = App::default();
        app.exporting = true;

        let _ = app.update(Message::ExportCompleted(Err(RenderError::Document(
            "page overflow".to_string(),
        ))));

        assert!(!app.exporting);
        assert!(app.app_state.last_export_directory.is_none());
        let notification = first_notification(&app);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.message_key(),
            "notification.exportRenderFailed"
        );
    }

    #[test]
    fn currency_selection_reformats_the_preview() {
        let mut app = App::default();

        let _ = app.update(Message::Header(header::Message::CurrencySelected(
            "EUR".to_string(),
        )));

        assert_eq!(app.currency.as_deref(), Some("EUR"));
        assert_eq!(
            app.preview.total,
            app.catalog.format_currency(app.record.total(), "EUR")
        );
    }

    #[test]
    fn locale_selection_translates_the_preview_labels() {
        let mut app = App::default();
        let entry = app
            .catalog
            .available_locales()
            .iter()
            .find(|entry| entry.code.language.as_str() == "fr")
            .cloned()
            .expect("fr locale registered");

        let _ = app.update(Message::Header(header::Message::LocaleSelected(entry)));

        assert_eq!(app.catalog.current_locale().language.as_str(), "fr");
        assert_eq!(app.preview.labels.invoice, app.catalog.tr("preview.invoice"));
        assert_eq!(app.title(), app.catalog.tr("meta.title"));
    }

    #[test]
    fn recompute_shortcut_rebuilds_a_stale_preview() {
        let mut app = App::default();
        app.record.set_field(Field::BillFromName, "Studio".into());
        assert_ne!(app.preview.bill_from_name, "Studio");

        let _ = app.update(Message::RecomputeRequested);

        assert_eq!(app.preview.bill_from_name, "Studio");
    }

    #[test]
    fn tick_settles_an_expired_save_flash() {
        let mut app = App::default();
        app.save_status = SaveStatus::Saved(Instant::now() - Duration::from_secs(5));

        let _ = app.update(Message::Tick(Instant::now()));

        assert_eq!(app.save_status, SaveStatus::Idle);
    }

    #[test]
    fn subscription_is_quiet_when_nothing_is_pending() {
        // No notifications and an idle save status mean no tick timer; the
        // keyboard listener alone remains.
        let app = App::default();
        let _subscription = app.subscription();

        assert!(!app.notifications.has_notifications());
        assert_eq!(app.save_status, SaveStatus::Idle);
    }
}
