// SPDX-License-Identifier: MPL-2.0
//! Validation state for the invoice form.
//!
//! The form itself is backed directly by the [`InvoiceRecord`]; this module
//! only tracks the per-field hints shown under inputs whose text cannot be
//! interpreted. Unparseable dates never block editing, they only raise a hint
//! (and later block export through the export validation).

use crate::invoice::{Field, InvoiceRecord};

/// Inline hints for fields with format requirements.
///
/// `None` means the field is empty or well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationHints {
    pub creation_date: Option<String>,
    pub due_date: Option<String>,
}

impl ValidationHints {
    /// Returns true if any hint is currently shown.
    #[must_use]
    pub fn any(&self) -> bool {
        self.creation_date.is_some() || self.due_date.is_some()
    }
}

/// UI-only state of the form component.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub hints: ValidationHints,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derives all hints from the current record.
    ///
    /// Called after loading a record and after resets, so hints never refer
    /// to values that are no longer in the form.
    pub fn revalidate(&mut self, record: &InvoiceRecord) {
        self.hints.creation_date = validate_date(record.field(Field::CreationDate));
        self.hints.due_date = validate_date(record.field(Field::DueDate));
    }

    /// Updates the hint for a single edited field, if it has one.
    pub fn revalidate_field(&mut self, field: Field, record: &InvoiceRecord) {
        match field {
            Field::CreationDate => {
                self.hints.creation_date = validate_date(record.field(Field::CreationDate));
            }
            Field::DueDate => {
                self.hints.due_date = validate_date(record.field(Field::DueDate));
            }
            _ => {}
        }
    }
}

/// Validates a date input. Empty is fine; otherwise it must parse as an
/// ISO calendar date.
fn validate_date(value: &str) -> Option<String> {
    use chrono::NaiveDate;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
        None
    } else {
        Some("Format: YYYY-MM-DD".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dates_raise_no_hint() {
        assert!(validate_date("").is_none());
        assert!(validate_date("   ").is_none());
    }

    #[test]
    fn iso_dates_raise_no_hint() {
        assert!(validate_date("2026-08-23").is_none());
        assert!(validate_date(" 2026-01-01 ").is_none());
    }

    #[test]
    fn malformed_dates_raise_a_format_hint() {
        assert!(validate_date("23/08/2026").is_some());
        assert!(validate_date("2026-13-01").is_some());
        assert!(validate_date("soon").is_some());
    }

    #[test]
    fn revalidate_tracks_both_date_fields() {
        let mut record = InvoiceRecord::default();
        record.set_field(Field::CreationDate, "not-a-date".into());
        record.set_field(Field::DueDate, "2026-09-01".into());

        let mut state = FormState::new();
        state.revalidate(&record);

        assert!(state.hints.creation_date.is_some());
        assert!(state.hints.due_date.is_none());
        assert!(state.hints.any());
    }

    #[test]
    fn revalidate_field_leaves_other_hints_alone() {
        let mut record = InvoiceRecord::default();
        record.set_field(Field::CreationDate, "nope".into());
        record.set_field(Field::DueDate, "also nope".into());

        let mut state = FormState::new();
        state.revalidate(&record);
        assert!(state.hints.due_date.is_some());

        record.set_field(Field::CreationDate, "2026-08-23".into());
        state.revalidate_field(Field::CreationDate, &record);

        assert!(state.hints.creation_date.is_none());
        assert!(state.hints.due_date.is_some());
    }
}
