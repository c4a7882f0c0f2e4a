// SPDX-License-Identifier: MPL-2.0
//! Export validation and the export request.
//!
//! Validation happens before any dialog opens or any rendering starts.
//! The checks run in a fixed order and each failure carries its own
//! notification key, so the user is told about exactly one missing thing
//! at a time, starting from the top of the form.

use chrono::NaiveDate;

use super::record::InvoiceRecord;
use crate::error::ValidationError;

/// A validated export, carrying the filename offered in the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// `invoice_{number}_{date}.pdf`, e.g. `invoice_42_2026-08-23.pdf`.
    pub suggested_filename: String,
}

/// Validates the record for export against today's date.
///
/// Check order: invoice number, creation date, due date, then at least one
/// line item with a non-empty trimmed description.
pub fn prepare_export(record: &InvoiceRecord) -> Result<ExportRequest, ValidationError> {
    use chrono::Local;

    prepare_export_on(record, Local::now().date_naive())
}

/// Validation with an explicit date, shared by [`prepare_export`] and tests.
pub fn prepare_export_on(
    record: &InvoiceRecord,
    today: NaiveDate,
) -> Result<ExportRequest, ValidationError> {
    if record.invoice_number.trim().is_empty() {
        return Err(ValidationError::MissingInvoiceNumber);
    }
    if record.creation_date.trim().is_empty() {
        return Err(ValidationError::MissingCreationDate);
    }
    if record.due_date.trim().is_empty() {
        return Err(ValidationError::MissingDueDate);
    }
    let has_described_item = record
        .line_items
        .iter()
        .any(|item| !item.description.trim().is_empty());
    if !has_described_item {
        return Err(ValidationError::NoDescribedLineItems);
    }

    Ok(ExportRequest {
        suggested_filename: format!(
            "invoice_{}_{}.pdf",
            record.invoice_number.trim(),
            today.format("%Y-%m-%d")
        ),
    })
}
