// SPDX-License-Identifier: MPL-2.0
//! The invoice record and its field-level editing operations.
//!
//! [`InvoiceRecord`] is the single owned source of truth for everything the
//! form edits. Scalar fields are addressed through the [`Field`] enum so the
//! form view and the update loop route edits without stringly-typed keys.
//! Line items are edited positionally.
//!
//! Amounts are kept as the raw text the user typed; [`parse_amount`] turns
//! them into numbers wherever arithmetic is needed.

use serde::{Deserialize, Serialize};

/// Minimum number of line items a live record holds.
pub const LINE_ITEM_FLOOR: usize = 1;

// =============================================================================
// Field
// =============================================================================

/// Addressable scalar fields of the invoice record.
///
/// Drives both edit routing (one message variant carries a `Field` plus the
/// new text) and the form layout (each input row is declared with its field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InvoiceNumber,
    CreationDate,
    DueDate,
    BillFromName,
    BillFromAddress1,
    BillFromAddress2,
    BillFromZip,
    BillToName,
    BillToAddress1,
    BillToAddress2,
    BeneficiaryName,
    BeneficiaryAccount,
    SwiftCode,
    BankName,
    BankAddress,
    IntermediarySwift,
    IntermediaryBankName,
}

// =============================================================================
// LineItem
// =============================================================================

/// One billable row: free-text description plus the amount as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_amount", deserialize_with = "deserialize_amount")]
    pub amount: String,
}

impl LineItem {
    /// Creates an item with the given description and amount text.
    #[must_use]
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// The blank row appended by the "add item" action.
    #[must_use]
    pub fn blank() -> Self {
        Self::new("", "0")
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

fn default_amount() -> String {
    "0".to_string()
}

/// Accepts both `"1500"` and `1500` in stored records. Earlier snapshots
/// wrote numeric amounts; the form has always edited them as text.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct AmountVisitor;

    impl serde::de::Visitor<'_> for AmountVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: serde::de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

/// Parses an amount string into a non-negative value.
///
/// Unparseable input counts as zero, so a half-typed amount never poisons
/// the total. Negative input clamps to zero.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

// =============================================================================
// InvoiceRecord
// =============================================================================

/// The full invoice as edited by the form.
///
/// Serialized wholesale to JSON on every mutation. Field names follow the
/// storage format (camelCase), which predates this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub creation_date: String,
    pub due_date: String,
    pub bill_from_name: String,
    pub bill_from_address1: String,
    pub bill_from_address2: String,
    pub bill_from_zip: String,
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
    pub line_items: Vec<LineItem>,
}

impl InvoiceRecord {
    /// The prefilled record used at first run and after a reset.
    ///
    /// Dates stay empty here; [`ensure_default_dates`](Self::ensure_default_dates)
    /// fills them relative to the current day.
    #[must_use]
    pub fn template() -> Self {
        Self {
            invoice_number: "1".to_string(),
            creation_date: String::new(),
            due_date: String::new(),
            bill_from_name: "John Doe".to_string(),
            bill_from_address1: "123 Main Street, Suite 100".to_string(),
            bill_from_address2: "New York, NY, USA".to_string(),
            bill_from_zip: "10001".to_string(),
            bill_to_name: "Acme Corporation".to_string(),
            bill_to_address1: "456 Business Ave".to_string(),
            bill_to_address2: "Los Angeles, CA 90001, USA".to_string(),
            beneficiary_name: "John Doe".to_string(),
            beneficiary_account: "US00 1234 5678 9012 3456 78".to_string(),
            swift_code: "BANKUS33XXX".to_string(),
            bank_name: "First National Bank".to_string(),
            bank_address: "789 Financial Plaza, New York, NY 10005".to_string(),
            intermediary_swift: "CHASUS33XXX".to_string(),
            intermediary_bank_name: "Global Transfer Bank, N.A".to_string(),
            line_items: vec![
                LineItem::new("Consulting Services", "1500"),
                LineItem::new("Design Work", "750"),
                LineItem::new("Travel Expenses", "250"),
            ],
        }
    }

    /// Returns the current text of a scalar field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::InvoiceNumber => &self.invoice_number,
            Field::CreationDate => &self.creation_date,
            Field::DueDate => &self.due_date,
            Field::BillFromName => &self.bill_from_name,
            Field::BillFromAddress1 => &self.bill_from_address1,
            Field::BillFromAddress2 => &self.bill_from_address2,
            Field::BillFromZip => &self.bill_from_zip,
            Field::BillToName => &self.bill_to_name,
            Field::BillToAddress1 => &self.bill_to_address1,
            Field::BillToAddress2 => &self.bill_to_address2,
            Field::BeneficiaryName => &self.beneficiary_name,
            Field::BeneficiaryAccount => &self.beneficiary_account,
            Field::SwiftCode => &self.swift_code,
            Field::BankName => &self.bank_name,
            Field::BankAddress => &self.bank_address,
            Field::IntermediarySwift => &self.intermediary_swift,
            Field::IntermediaryBankName => &self.intermediary_bank_name,
        }
    }

    /// Overwrites a scalar field with the given text.
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::InvoiceNumber => &mut self.invoice_number,
            Field::CreationDate => &mut self.creation_date,
            Field::DueDate => &mut self.due_date,
            Field::BillFromName => &mut self.bill_from_name,
            Field::BillFromAddress1 => &mut self.bill_from_address1,
            Field::BillFromAddress2 => &mut self.bill_from_address2,
            Field::BillFromZip => &mut self.bill_from_zip,
            Field::BillToName => &mut self.bill_to_name,
            Field::BillToAddress1 => &mut self.bill_to_address1,
            Field::BillToAddress2 => &mut self.bill_to_address2,
            Field::BeneficiaryName => &mut self.beneficiary_name,
            Field::BeneficiaryAccount => &mut self.beneficiary_account,
            Field::SwiftCode => &mut self.swift_code,
            Field::BankName => &mut self.bank_name,
            Field::BankAddress => &mut self.bank_address,
            Field::IntermediarySwift => &mut self.intermediary_swift,
            Field::IntermediaryBankName => &mut self.intermediary_bank_name,
        };
        *slot = value;
    }

    /// Fills empty dates: creation with today, due with today plus two days.
    pub fn ensure_default_dates(&mut self) {
        use chrono::{Duration, Local};

        let today = Local::now().date_naive();
        if self.creation_date.trim().is_empty() {
            self.creation_date = today.format("%Y-%m-%d").to_string();
        }
        if self.due_date.trim().is_empty() {
            self.due_date = (today + Duration::days(2)).format("%Y-%m-%d").to_string();
        }
    }

    /// Appends a blank line item.
    pub fn add_line_item(&mut self) {
        self.line_items.push(LineItem::blank());
    }

    /// Removes the item at `index`.
    ///
    /// Returns `false` without removing when the record is already at the
    /// one-item floor or the index is out of range.
    pub fn remove_line_item(&mut self, index: usize) -> bool {
        if self.line_items.len() <= LINE_ITEM_FLOOR || index >= self.line_items.len() {
            return false;
        }
        self.line_items.remove(index);
        true
    }

    /// Replaces the description of the item at `index`, if it exists.
    pub fn set_item_description(&mut self, index: usize, value: String) {
        if let Some(item) = self.line_items.get_mut(index) {
            item.description = value;
        }
    }

    /// Replaces the amount text of the item at `index`, if it exists.
    pub fn set_item_amount(&mut self, index: usize, value: String) {
        if let Some(item) = self.line_items.get_mut(index) {
            item.amount = value;
        }
    }

    /// Sum of all parseable item amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.line_items
            .iter()
            .map(|item| parse_amount(&item.amount))
            .sum()
    }

    /// Merges a loaded record onto this one.
    ///
    /// A loaded scalar wins only when non-empty; the loaded item list wins
    /// only when non-empty. Everything else keeps its current value, so a
    /// sparse or truncated storage file restores what it has and leaves the
    /// rest alone.
    pub fn merge_from(&mut self, loaded: Self) {
        merge_scalar(&mut self.invoice_number, loaded.invoice_number);
        merge_scalar(&mut self.creation_date, loaded.creation_date);
        merge_scalar(&mut self.due_date, loaded.due_date);
        merge_scalar(&mut self.bill_from_name, loaded.bill_from_name);
        merge_scalar(&mut self.bill_from_address1, loaded.bill_from_address1);
        merge_scalar(&mut self.bill_from_address2, loaded.bill_from_address2);
        merge_scalar(&mut self.bill_from_zip, loaded.bill_from_zip);
        merge_scalar(&mut self.bill_to_name, loaded.bill_to_name);
        merge_scalar(&mut self.bill_to_address1, loaded.bill_to_address1);
        merge_scalar(&mut self.bill_to_address2, loaded.bill_to_address2);
        merge_scalar(&mut self.beneficiary_name, loaded.beneficiary_name);
        merge_scalar(&mut self.beneficiary_account, loaded.beneficiary_account);
        merge_scalar(&mut self.swift_code, loaded.swift_code);
        merge_scalar(&mut self.bank_name, loaded.bank_name);
        merge_scalar(&mut self.bank_address, loaded.bank_address);
        merge_scalar(&mut self.intermediary_swift, loaded.intermediary_swift);
        merge_scalar(
            &mut self.intermediary_bank_name,
            loaded.intermediary_bank_name,
        );
        if !loaded.line_items.is_empty() {
            self.line_items = loaded.line_items;
        }
    }
}

fn merge_scalar(current: &mut String, loaded: String) {
    if !loaded.is_empty() {
        *current = loaded;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_holds_three_items() {
        let record = InvoiceRecord::template();
        assert_eq!(record.line_items.len(), 3);
        assert_eq!(record.invoice_number, "1");
        assert_eq!(record.bill_to_name, "Acme Corporation");
    }

    #[test]
    fn serialize_then_deserialize_is_identity() {
        let mut record = InvoiceRecord::template();
        record.creation_date = "2026-08-01".to_string();
        record.due_date = "2026-08-03".to_string();

        let json = serde_json::to_string(&record).unwrap();
        let restored: InvoiceRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn storage_format_uses_camel_case_keys() {
        let json = serde_json::to_string(&InvoiceRecord::template()).unwrap();
        assert!(json.contains("\"invoiceNumber\""));
        assert!(json.contains("\"billFromAddress1\""));
        assert!(json.contains("\"lineItems\""));
        assert!(!json.contains("\"invoice_number\""));
    }

    #[test]
    fn sparse_json_merges_onto_current_values() {
        let mut record = InvoiceRecord::template();
        let loaded: InvoiceRecord = serde_json::from_str(r#"{"invoiceNumber": "42"}"#).unwrap();

        record.merge_from(loaded);

        assert_eq!(record.invoice_number, "42");
        assert_eq!(record.bill_from_name, "John Doe");
        assert_eq!(record.line_items.len(), 3);
    }

    #[test]
    fn empty_loaded_items_keep_current_items() {
        let mut record = InvoiceRecord::template();
        let loaded: InvoiceRecord =
            serde_json::from_str(r#"{"invoiceNumber": "7", "lineItems": []}"#).unwrap();

        record.merge_from(loaded);

        assert_eq!(record.line_items.len(), 3);
    }

    #[test]
    fn numeric_amounts_deserialize_as_text() {
        let item: LineItem = serde_json::from_str(r#"{"description": "Hosting", "amount": 12.5}"#)
            .unwrap();
        assert_eq!(item.amount, "12.5");

        let item: LineItem = serde_json::from_str(r#"{"description": "Hosting"}"#).unwrap();
        assert_eq!(item.amount, "0");
    }

    #[test]
    fn removing_the_last_item_is_rejected() {
        let mut record = InvoiceRecord {
            line_items: vec![LineItem::new("Only", "10")],
            ..InvoiceRecord::default()
        };

        assert!(!record.remove_line_item(0));
        assert_eq!(record.line_items.len(), 1);
    }

    #[test]
    fn removing_out_of_range_index_is_rejected() {
        let mut record = InvoiceRecord::template();
        assert!(!record.remove_line_item(9));
        assert_eq!(record.line_items.len(), 3);
    }

    #[test]
    fn remove_then_add_round_trips_the_floor() {
        let mut record = InvoiceRecord::template();
        assert!(record.remove_line_item(1));
        assert_eq!(record.line_items.len(), 2);

        record.add_line_item();
        assert_eq!(record.line_items[2], LineItem::blank());
    }

    #[test]
    fn ensure_default_dates_only_fills_empty_dates() {
        let mut record = InvoiceRecord {
            creation_date: "2026-01-15".to_string(),
            ..InvoiceRecord::default()
        };
        record.ensure_default_dates();

        assert_eq!(record.creation_date, "2026-01-15");
        assert!(!record.due_date.is_empty());
    }

    #[test]
    fn parse_amount_tolerates_garbage_and_negatives() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-3"), 0.0);
    }

    #[test]
    fn total_sums_parseable_amounts() {
        let record = InvoiceRecord {
            line_items: vec![
                LineItem::new("A", "1500"),
                LineItem::new("B", "750"),
                LineItem::new("C", "oops"),
            ],
            ..InvoiceRecord::default()
        };
        assert_eq!(record.total(), 2250.0);
    }

    #[test]
    fn field_routing_covers_set_and_get() {
        let mut record = InvoiceRecord::default();
        record.set_field(Field::SwiftCode, "TESTUS33".to_string());
        assert_eq!(record.field(Field::SwiftCode), "TESTUS33");
        assert_eq!(record.field(Field::BankName), "");
    }
}
