// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for preview model derivation.
//!
//! [`recompute`] runs on every form edit, so it bounds how closely the
//! preview pane can follow typing.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_invoice::i18n::Catalog;
use iced_invoice::invoice::{recompute, Field, InvoiceRecord, LineItem};
use std::hint::black_box;

/// Builds a record with every scalar field set and `items` line items.
fn filled_record(items: usize) -> InvoiceRecord {
    let mut record = InvoiceRecord::template();
    record.set_field(Field::InvoiceNumber, "2026-031".to_string());
    record.set_field(Field::CreationDate, "2026-08-01".to_string());
    record.set_field(Field::DueDate, "2026-08-31".to_string());
    record.set_field(Field::BillFromName, "Studio Nord".to_string());
    record.set_field(Field::BillFromAddress1, "12 Harbour Lane".to_string());
    record.set_field(Field::BillFromZip, "10115".to_string());
    record.set_field(Field::BillToName, "Acme Corp".to_string());
    record.set_field(Field::BillToAddress1, "1 Main Street".to_string());
    record.set_field(Field::BeneficiaryName, "Studio Nord OU".to_string());
    record.set_field(
        Field::BeneficiaryAccount,
        "EE38 2200 2210 2014 5685".to_string(),
    );
    record.set_field(Field::SwiftCode, "HABAEE2X".to_string());
    record.set_field(Field::BankName, "Swedbank AS".to_string());

    record.line_items = (0..items)
        .map(|index| LineItem::new(format!("Line {index}"), "99.50"))
        .collect();
    record
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");

    let catalog = Catalog::default();

    let record = filled_record(5);
    group.bench_function("recompute_five_items", |b| {
        b.iter(|| {
            black_box(recompute(&record, &catalog, "USD"));
        });
    });

    let long_record = filled_record(50);
    group.bench_function("recompute_fifty_items", |b| {
        b.iter(|| {
            black_box(recompute(&long_record, &catalog, "USD"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
