// SPDX-License-Identifier: MPL-2.0
//! Invoice form component.
//!
//! This module renders the editable form column (invoice details, addresses,
//! bank details, line items) and translates raw widget messages into events
//! for the application: most edits simply mutate the record in place, while
//! structural actions (reset, export) are propagated upward.

pub mod state;
pub mod view;

pub use state::{FormState, ValidationHints};
pub use view::ViewContext;

use crate::invoice::{Field, InvoiceRecord, LINE_ITEM_FLOOR};

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A scalar field value has changed.
    FieldChanged(Field, String),
    /// A line item description has changed.
    ItemDescriptionChanged(usize, String),
    /// A line item amount has changed.
    ItemAmountChanged(usize, String),
    /// Append a blank line item.
    AddItem,
    /// Remove the line item at the given index.
    RemoveItem(usize),
    /// Reset the whole form back to the template.
    ResetForm,
    /// Start a PDF export.
    GeneratePdf,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// No action needed.
    None,
    /// The record changed; the app should persist it and refresh the preview.
    Edited,
    /// A removal was refused because the form keeps at least one item row.
    RemoveRejected,
    /// Request to restore the template record (app clears storage too).
    ResetRequested,
    /// Request to run the export flow (validation, dialog, render).
    ExportRequested,
}

/// Process a form message against the record and form state.
pub fn update_with_state(
    record: &mut InvoiceRecord,
    state: &mut FormState,
    message: Message,
) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            record.set_field(field, value);
            state.revalidate_field(field, record);
            Event::Edited
        }
        Message::ItemDescriptionChanged(index, value) => {
            record.set_item_description(index, value);
            Event::Edited
        }
        Message::ItemAmountChanged(index, value) => {
            record.set_item_amount(index, value);
            Event::Edited
        }
        Message::AddItem => {
            record.add_line_item();
            Event::Edited
        }
        Message::RemoveItem(index) => {
            if record.line_items.len() <= LINE_ITEM_FLOOR {
                Event::RemoveRejected
            } else if record.remove_line_item(index) {
                Event::Edited
            } else {
                Event::None
            }
        }
        Message::ResetForm => Event::ResetRequested,
        Message::GeneratePdf => Event::ExportRequested,
    }
}

/// Render the form component.
pub fn form<'a>(ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
    view::form(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_and_state() -> (InvoiceRecord, FormState) {
        (InvoiceRecord::template(), FormState::new())
    }

    #[test]
    fn field_edit_mutates_record_and_emits_edited() {
        let (mut record, mut state) = record_and_state();

        let event = update_with_state(
            &mut record,
            &mut state,
            Message::FieldChanged(Field::InvoiceNumber, "42".into()),
        );

        assert_eq!(event, Event::Edited);
        assert_eq!(record.field(Field::InvoiceNumber), "42");
    }

    #[test]
    fn date_edit_updates_validation_hint() {
        let (mut record, mut state) = record_and_state();

        update_with_state(
            &mut record,
            &mut state,
            Message::FieldChanged(Field::DueDate, "next week".into()),
        );
        assert!(state.hints.due_date.is_some());

        update_with_state(
            &mut record,
            &mut state,
            Message::FieldChanged(Field::DueDate, "2026-09-01".into()),
        );
        assert!(state.hints.due_date.is_none());
    }

    #[test]
    fn add_item_grows_the_record() {
        let (mut record, mut state) = record_and_state();
        let before = record.line_items.len();

        let event = update_with_state(&mut record, &mut state, Message::AddItem);

        assert_eq!(event, Event::Edited);
        assert_eq!(record.line_items.len(), before + 1);
    }

    #[test]
    fn remove_above_the_floor_emits_edited() {
        let (mut record, mut state) = record_and_state();
        assert!(record.line_items.len() > LINE_ITEM_FLOOR);

        let event = update_with_state(&mut record, &mut state, Message::RemoveItem(0));
        assert_eq!(event, Event::Edited);
    }

    #[test]
    fn removing_the_last_row_is_rejected() {
        let (mut record, mut state) = record_and_state();
        while record.line_items.len() > LINE_ITEM_FLOOR {
            record.remove_line_item(0);
        }

        let event = update_with_state(&mut record, &mut state, Message::RemoveItem(0));

        assert_eq!(event, Event::RemoveRejected);
        assert_eq!(record.line_items.len(), LINE_ITEM_FLOOR);
    }

    #[test]
    fn out_of_range_removal_is_a_no_op() {
        let (mut record, mut state) = record_and_state();
        let before = record.line_items.len();

        let event = update_with_state(&mut record, &mut state, Message::RemoveItem(99));

        assert_eq!(event, Event::None);
        assert_eq!(record.line_items.len(), before);
    }

    #[test]
    fn reset_emits_request_without_touching_the_record() {
        let (mut record, mut state) = record_and_state();
        record.set_field(Field::InvoiceNumber, "7".into());

        let event = update_with_state(&mut record, &mut state, Message::ResetForm);

        assert_eq!(event, Event::ResetRequested);
        assert_eq!(record.field(Field::InvoiceNumber), "7");
    }

    #[test]
    fn generate_emits_export_request() {
        let (mut record, mut state) = record_and_state();
        let event = update_with_state(&mut record, &mut state, Message::GeneratePdf);
        assert_eq!(event, Event::ExportRequested);
    }
}
