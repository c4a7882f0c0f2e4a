// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Assembles the header bar, the form and preview panes, and the toast
//! overlay into the single window surface.

use super::Message;
use crate::i18n::Catalog;
use crate::invoice::{InvoiceRecord, PreviewModel};
use crate::ui::design_tokens::spacing;
use crate::ui::form::{self, FormState, ViewContext as FormViewContext};
use crate::ui::header::{self, SaveStatus, ViewContext as HeaderViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::preview;
use iced::widget::{Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub record: &'a InvoiceRecord,
    pub form_state: &'a FormState,
    pub preview: &'a PreviewModel,
    pub save_status: SaveStatus,
    /// Effective display currency (picker selection or locale default).
    pub currency: String,
    pub exporting: bool,
    pub notifications: &'a Manager,
}

/// Renders the whole window: header on top, form beside preview, toasts
/// stacked over everything.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_bar = header::view(HeaderViewContext {
        catalog: ctx.catalog,
        save_status: ctx.save_status,
        currency: ctx.currency,
    })
    .map(Message::Header);

    let form_pane = form::form(FormViewContext {
        catalog: ctx.catalog,
        record: ctx.record,
        state: ctx.form_state,
        exporting: ctx.exporting,
    })
    .map(Message::Form);

    let preview_pane = preview::pane(ctx.preview);

    let panes = Row::new()
        .push(
            Container::new(form_pane)
                .width(Length::FillPortion(2))
                .height(Length::Fill),
        )
        .push(
            Container::new(preview_pane)
                .width(Length::FillPortion(3))
                .height(Length::Fill),
        )
        .spacing(spacing::MD);

    let content = Column::new()
        .push(header_bar)
        .push(panes)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.catalog).map(Message::Notification);

    Stack::new().push(content).push(overlay).into()
}
