// SPDX-License-Identifier: MPL-2.0
//! Pure derivation of the preview model from the invoice record.
//!
//! [`recompute`] is the only way a [`PreviewModel`] comes into existence.
//! It resolves every fallback, translates every label, and formats every
//! amount, so both the on-screen preview pane and the PDF renderer consume
//! finished strings and never touch the catalog themselves. That keeps the
//! renderer free to run on a blocking task without borrowing app state.

use unic_langid::LanguageIdentifier;

use super::record::{parse_amount, InvoiceRecord};
use crate::i18n::catalog::Catalog;
use crate::i18n::{format, TextDirection};

/// Literal placeholder for absent party and bank fields.
const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// Model
// =============================================================================

/// Translated section labels, resolved once per recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewLabels {
    pub invoice: String,
    pub invoice_number: String,
    pub creation_date: String,
    pub due_date: String,
    pub bill_from: String,
    pub bill_to: String,
    pub payment_details: String,
    pub beneficiary_name: String,
    pub beneficiary_account: String,
    pub swift_code: String,
    pub bank_name: String,
    pub bank_address: String,
    pub intermediary_swift: String,
    pub intermediary_bank_name: String,
    pub item_description: String,
    pub item_amount: String,
    pub total: String,
    pub no_items: String,
    pub thank_you: String,
}

/// One display-ready item row.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    pub description: String,
    /// Formatted through the catalog's currency formatter.
    pub amount: String,
}

/// Everything the preview pane and the PDF renderer draw, fully resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewModel {
    pub labels: PreviewLabels,
    pub invoice_number: String,
    pub creation_date: String,
    pub due_date: String,
    pub bill_from_name: String,
    pub bill_from_address1: String,
    pub bill_from_address2: String,
    /// Already-substituted `Zip Code: {zip}` line; `None` when the zip is empty.
    pub bill_from_zip_line: Option<String>,
    pub bill_to_name: String,
    pub bill_to_address1: String,
    pub bill_to_address2: String,
    pub beneficiary_name: String,
    pub beneficiary_account: String,
    pub swift_code: String,
    pub bank_name: String,
    pub bank_address: String,
    pub intermediary_swift: String,
    pub intermediary_bank_name: String,
    /// Included items only; an empty list means the no-items placeholder.
    pub items: Vec<PreviewItem>,
    /// Formatted grand total.
    pub total: String,
    pub direction: TextDirection,
}

// =============================================================================
// Recompute
// =============================================================================

/// Derives the preview model from the record.
///
/// Pure: same record, catalog state, and currency always produce the same
/// model. Fallbacks follow the preview contract: `"1"` for the invoice
/// number, `"-"` for absent or unparseable dates, `"N/A"` for party and
/// bank fields, nothing for empty address lines and zip.
#[must_use]
pub fn recompute(record: &InvoiceRecord, catalog: &Catalog, currency: &str) -> PreviewModel {
    let locale = catalog.current_locale().clone();

    let items: Vec<PreviewItem> = record
        .line_items
        .iter()
        .filter(|item| !item.description.trim().is_empty() || parse_amount(&item.amount) > 0.0)
        .map(|item| PreviewItem {
            description: if item.description.trim().is_empty() {
                catalog.tr("preview.noDescription")
            } else {
                item.description.clone()
            },
            amount: catalog.format_currency(parse_amount(&item.amount), currency),
        })
        .collect();

    let zip = record.bill_from_zip.trim();
    let bill_from_zip_line =
        (!zip.is_empty()).then(|| catalog.tr_with_args("preview.zipCode", &[("zip", zip)]));

    PreviewModel {
        labels: labels(catalog),
        invoice_number: or_fallback(&record.invoice_number, "1"),
        creation_date: display_date(&record.creation_date, &locale),
        due_date: display_date(&record.due_date, &locale),
        bill_from_name: or_fallback(&record.bill_from_name, NOT_AVAILABLE),
        bill_from_address1: record.bill_from_address1.trim().to_string(),
        bill_from_address2: record.bill_from_address2.trim().to_string(),
        bill_from_zip_line,
        bill_to_name: or_fallback(&record.bill_to_name, NOT_AVAILABLE),
        bill_to_address1: record.bill_to_address1.trim().to_string(),
        bill_to_address2: record.bill_to_address2.trim().to_string(),
        beneficiary_name: or_fallback(&record.beneficiary_name, NOT_AVAILABLE),
        beneficiary_account: or_fallback(&record.beneficiary_account, NOT_AVAILABLE),
        swift_code: or_fallback(&record.swift_code, NOT_AVAILABLE),
        bank_name: or_fallback(&record.bank_name, NOT_AVAILABLE),
        bank_address: or_fallback(&record.bank_address, NOT_AVAILABLE),
        intermediary_swift: or_fallback(&record.intermediary_swift, NOT_AVAILABLE),
        intermediary_bank_name: or_fallback(&record.intermediary_bank_name, NOT_AVAILABLE),
        items,
        total: catalog.format_currency(record.total(), currency),
        direction: catalog.text_direction(),
    }
}

fn labels(catalog: &Catalog) -> PreviewLabels {
    PreviewLabels {
        invoice: catalog.tr("preview.invoice"),
        invoice_number: catalog.tr("preview.invoiceNumberLabel"),
        creation_date: catalog.tr("preview.creationDateLabel"),
        due_date: catalog.tr("preview.dueDateLabel"),
        bill_from: catalog.tr("preview.billFrom"),
        bill_to: catalog.tr("preview.billTo"),
        payment_details: catalog.tr("preview.paymentDetails"),
        beneficiary_name: catalog.tr("preview.beneficiaryName"),
        beneficiary_account: catalog.tr("preview.beneficiaryAccount"),
        swift_code: catalog.tr("preview.swiftCode"),
        bank_name: catalog.tr("preview.bankName"),
        bank_address: catalog.tr("preview.bankAddress"),
        intermediary_swift: catalog.tr("preview.intermediarySwift"),
        intermediary_bank_name: catalog.tr("preview.intermediaryBankName"),
        item_description: catalog.tr("form.itemDescription"),
        item_amount: catalog.tr("form.itemAmount"),
        total: catalog.tr("preview.total"),
        no_items: catalog.tr("preview.noItems"),
        thank_you: catalog.tr("preview.thankYou"),
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Renders a stored ISO date for display, `"-"` when empty or unparseable.
fn display_date(stored: &str, locale: &LanguageIdentifier) -> String {
    use chrono::NaiveDate;

    NaiveDate::parse_from_str(stored.trim(), "%Y-%m-%d")
        .map(|date| format::format_date(date, locale))
        .unwrap_or_else(|_| "-".to_string())
}

// =============================================================================
// Tests
// =============================================================================
