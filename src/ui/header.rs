// SPDX-License-Identifier: MPL-2.0
//! Application header bar.
//!
//! Shows the document title, the auto-save status line, and the two pickers
//! (interface language, display currency). Picker selections are propagated
//! to the application as events; the header holds no state of its own.

use crate::i18n::{Catalog, LocaleEntry};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::alignment::Vertical;
use iced::widget::{container, pick_list, text, Row};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

/// Currencies offered in the picker. The per-locale default currency is
/// always one of these.
pub const CURRENCIES: [&str; 14] = [
    "USD", "EUR", "GBP", "BRL", "JPY", "CNY", "SAR", "ILS", "RUB", "UAH", "INR", "CHF", "CAD",
    "AUD",
];

/// How long the saved / save-failed flash stays before reverting.
const STATUS_FLASH: Duration = Duration::from_secs(2);

/// Outcome of the most recent auto-save, as shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing happened recently; the permanent auto-save note is shown.
    Idle,
    /// A save succeeded at the given time.
    Saved(Instant),
    /// A save failed at the given time.
    Failed(Instant),
}

impl Default for SaveStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl SaveStatus {
    /// Translation key for the current status line.
    #[must_use]
    pub fn translation_key(self) -> &'static str {
        match self {
            SaveStatus::Idle => "header.autoSave",
            SaveStatus::Saved(_) => "header.saved",
            SaveStatus::Failed(_) => "header.saveFailed",
        }
    }

    /// Returns the status with expired flashes folded back to `Idle`.
    #[must_use]
    pub fn settled(self, now: Instant) -> SaveStatus {
        match self {
            SaveStatus::Saved(at) | SaveStatus::Failed(at)
                if now.duration_since(at) >= STATUS_FLASH =>
            {
                SaveStatus::Idle
            }
            other => other,
        }
    }

    fn color(self) -> Color {
        match self {
            SaveStatus::Idle => palette::GRAY_400,
            SaveStatus::Saved(_) => palette::SUCCESS_500,
            SaveStatus::Failed(_) => palette::ERROR_500,
        }
    }
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub save_status: SaveStatus,
    /// Effective display currency (picker selection or locale default).
    pub currency: String,
}

/// Messages emitted by the header widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LocaleSelected(LocaleEntry),
    CurrencySelected(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Switch the interface language.
    LocaleChanged(LanguageIdentifier),
    /// Switch the display currency.
    CurrencyChanged(String),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LocaleSelected(entry) => Event::LocaleChanged(entry.code),
        Message::CurrencySelected(currency) => Event::CurrencyChanged(currency),
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let catalog = ctx.catalog;

    let title = text(catalog.tr("meta.title")).size(typography::TITLE_MD);

    let status = text(catalog.tr(ctx.save_status.translation_key()))
        .size(typography::BODY_SM)
        .color(ctx.save_status.color());

    let locale_options: Vec<LocaleEntry> = catalog.available_locales().to_vec();
    let locale_picker = pick_list(
        locale_options,
        catalog.current_entry().cloned(),
        Message::LocaleSelected,
    )
    .width(Length::Fixed(sizing::LOCALE_PICKER_WIDTH))
    .padding(spacing::XS)
    .text_size(typography::BODY);

    let currency_options: Vec<String> = CURRENCIES.iter().map(ToString::to_string).collect();
    let currency_picker = pick_list(
        currency_options,
        Some(ctx.currency),
        Message::CurrencySelected,
    )
    .width(Length::Fixed(sizing::CURRENCY_PICKER_WIDTH))
    .padding(spacing::XS)
    .text_size(typography::BODY);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(title)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(status)
        .push(
            text(catalog.tr("header.language"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .push(locale_picker)
        .push(
            text(catalog.tr("header.currency"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        )
        .push(currency_picker);

    container(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_status_shows_the_auto_save_note() {
        assert_eq!(SaveStatus::Idle.translation_key(), "header.autoSave");
    }

    #[test]
    fn fresh_flashes_are_not_settled() {
        let now = Instant::now();
        let status = SaveStatus::Saved(now);
        assert_eq!(status.settled(now), status);
    }

    #[test]
    fn old_flashes_settle_back_to_idle() {
        let old = Instant::now() - Duration::from_secs(3);
        assert_eq!(SaveStatus::Saved(old).settled(Instant::now()), SaveStatus::Idle);
        assert_eq!(SaveStatus::Failed(old).settled(Instant::now()), SaveStatus::Idle);
    }

    #[test]
    fn currency_selection_maps_to_event() {
        let event = update(Message::CurrencySelected("EUR".into()));
        assert!(matches!(event, Event::CurrencyChanged(c) if c == "EUR"));
    }

    #[test]
    fn every_locale_default_currency_is_offered() {
        let mut catalog = Catalog::default();
        for entry in crate::i18n::locale_registry() {
            catalog
                .set_active_locale(&entry.code)
                .unwrap_or_else(|e| panic!("dictionary for {} failed: {e}", entry.code));
            let default = catalog.default_currency();
            assert!(
                CURRENCIES.contains(&default.as_str()),
                "currency {default} for {} missing from picker",
                entry.code
            );
        }
    }
}
