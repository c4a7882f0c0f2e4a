// SPDX-License-Identifier: MPL-2.0
//! Invoice domain: the record, its persistence, preview derivation, and
//! export validation.
//!
//! # Modules
//!
//! - [`record`]: [`InvoiceRecord`](record::InvoiceRecord), [`Field`](record::Field),
//!   and [`LineItem`](record::LineItem) with the field-level edit operations
//! - [`store`]: wholesale JSON snapshot persistence with partial-merge restore
//! - [`preview`]: pure [`PreviewModel`](preview::PreviewModel) derivation
//! - [`export`]: pre-dialog validation producing an [`ExportRequest`](export::ExportRequest)

pub mod export;
pub mod preview;
pub mod record;
pub mod store;

pub use export::{prepare_export, ExportRequest};
pub use preview::{recompute, PreviewModel};
pub use record::{Field, InvoiceRecord, LineItem, LINE_ITEM_FLOOR};
