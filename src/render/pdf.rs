// SPDX-License-Identifier: MPL-2.0
//! PDF rendering with `printpdf` builtin fonts.
//!
//! The layout mirrors the preview pane: title and number block, date block,
//! bill-from/bill-to columns, payment details, a ruled item table with
//! right-aligned amounts, the total row, and the thank-you footer. Long item
//! lists continue on additional pages; everything else fits the first page.
//!
//! Builtin Helvetica covers Latin and Cyrillic-adjacent WinAnsi glyphs only.
//! Text outside that range falls back to the font's notdef glyph; embedding
//! shaped Unicode faces is out of scope for now.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfLayerReference};

use super::{InvoiceRenderer, PageConfig};
use crate::error::RenderError;
use crate::invoice::preview::PreviewModel;

/// Approximate Helvetica advance width, em per character.
///
/// Builtin fonts expose no metrics through `printpdf`; 0.52 em sits between
/// digit (0.556) and punctuation (0.278) widths and keeps right-aligned
/// amounts inside the content edge.
const EM_PER_CHAR: f32 = 0.52;

/// Millimeters per PostScript point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Renders invoices through `printpdf` with builtin Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl InvoiceRenderer for PdfRenderer {
    fn render(&self, model: &PreviewModel, page: &PageConfig) -> Result<Vec<u8>, RenderError> {
        let bytes = render_document(model, page)?;
        Ok(bytes)
    }
}

fn render_document(model: &PreviewModel, page: &PageConfig) -> Result<Vec<u8>, RenderError> {
    use printpdf::PdfDocument;

    let (doc, page1, layer1) = PdfDocument::new(
        &model.labels.invoice,
        Mm(page.width),
        Mm(page.height),
        "Layer 1",
    );
    let mut layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Document(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Document(e.to_string()))?;

    let left = page.margin;
    let right = page.right_edge();
    let mut y = page.height - page.margin - 8.0;

    // Title block: big title left, number and dates right-aligned.
    push_line(&layer, &bold, &model.labels.invoice, 22.0, left, y);
    push_right(
        &layer,
        &bold,
        &format!("{} {}", model.labels.invoice_number, model.invoice_number),
        11.0,
        right,
        y,
    );
    push_right(
        &layer,
        &font,
        &format!("{}: {}", model.labels.creation_date, model.creation_date),
        10.0,
        right,
        y - 6.0,
    );
    push_right(
        &layer,
        &font,
        &format!("{}: {}", model.labels.due_date, model.due_date),
        10.0,
        right,
        y - 11.0,
    );

    y -= 19.0;
    rule(&layer, left, right, y);

    // Bill-from and bill-to columns advance together.
    y -= 8.0;
    let column_x = left + (right - left) / 2.0 + 5.0;
    push_line(&layer, &bold, &model.labels.bill_from, 11.0, left, y);
    push_line(&layer, &bold, &model.labels.bill_to, 11.0, column_x, y);

    let from_block = address_block(
        &model.bill_from_name,
        &model.bill_from_address1,
        &model.bill_from_address2,
        model.bill_from_zip_line.as_deref(),
    );
    let to_block = address_block(
        &model.bill_to_name,
        &model.bill_to_address1,
        &model.bill_to_address2,
        None,
    );
    let rows = from_block.len().max(to_block.len());
    for row in 0..rows {
        let row_y = y - 6.0 - row as f32 * 5.0;
        if let Some(line) = from_block.get(row) {
            push_line(&layer, &font, line, 10.0, left, row_y);
        }
        if let Some(line) = to_block.get(row) {
            push_line(&layer, &font, line, 10.0, column_x, row_y);
        }
    }
    y -= 6.0 + rows as f32 * 5.0 + 6.0;

    // Payment details, one labelled line per bank field.
    push_line(&layer, &bold, &model.labels.payment_details, 11.0, left, y);
    let bank_lines = [
        (&model.labels.beneficiary_name, &model.beneficiary_name),
        (&model.labels.beneficiary_account, &model.beneficiary_account),
        (&model.labels.swift_code, &model.swift_code),
        (&model.labels.bank_name, &model.bank_name),
        (&model.labels.bank_address, &model.bank_address),
        (&model.labels.intermediary_swift, &model.intermediary_swift),
        (
            &model.labels.intermediary_bank_name,
            &model.intermediary_bank_name,
        ),
    ];
    for (row, (label, value)) in bank_lines.iter().enumerate() {
        push_line(
            &layer,
            &font,
            &format!("{}: {}", label, value),
            10.0,
            left,
            y - 6.0 - row as f32 * 5.0,
        );
    }
    y -= 6.0 + bank_lines.len() as f32 * 5.0 + 8.0;

    // Item table: header, rule, rows, rule.
    push_line(&layer, &bold, &model.labels.item_description, 10.0, left, y);
    push_right(&layer, &bold, &model.labels.item_amount, 10.0, right, y);
    y -= 3.0;
    rule(&layer, left, right, y);
    y -= 6.5;

    if model.items.is_empty() {
        push_line(&layer, &font, &model.labels.no_items, 10.0, left, y);
        y -= 6.5;
    }
    for item in &model.items {
        // Continuation page when the row would cross the bottom margin.
        if y < page.margin + 22.0 {
            let (next_page, next_layer) =
                doc.add_page(Mm(page.width), Mm(page.height), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = page.height - page.margin - 8.0;
        }
        push_line(&layer, &font, &item.description, 10.0, left, y);
        push_right(&layer, &font, &item.amount, 10.0, right, y);
        y -= 6.5;
    }

    y -= 1.0;
    rule(&layer, left, right, y);

    // Total row, then the footer centered near the bottom margin.
    y -= 8.0;
    push_line(&layer, &bold, &format!("{}:", model.labels.total), 12.0, left, y);
    push_right(&layer, &bold, &model.total, 12.0, right, y);

    push_centered(
        &layer,
        &font,
        &model.labels.thank_you,
        10.0,
        page.width / 2.0,
        page.margin,
    );

    let mut writer = BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| RenderError::Document(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| RenderError::Document(e.to_string()))
}

/// Non-empty address lines in display order.
fn address_block(
    name: &str,
    address1: &str,
    address2: &str,
    zip_line: Option<&str>,
) -> Vec<String> {
    let mut lines = vec![name.to_string()];
    for part in [address1, address2] {
        if !part.is_empty() {
            lines.push(part.to_string());
        }
    }
    if let Some(zip) = zip_line {
        lines.push(zip.to_string());
    }
    lines
}

fn push_line(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
) {
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn push_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    right_edge: f32,
    y: f32,
) {
    let x = (right_edge - text_width_mm(text, size)).max(0.0);
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn push_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    center_x: f32,
    y: f32,
) {
    let x = (center_x - text_width_mm(text, size) / 2.0).max(0.0);
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * EM_PER_CHAR * MM_PER_PT
}

fn rule(layer: &PdfLayerReference, from_x: f32, to_x: f32, y: f32) {
    layer.add_line(printpdf::Line {
        points: vec![
            (printpdf::Point::new(Mm(from_x), Mm(y)), false),
            (printpdf::Point::new(Mm(to_x), Mm(y)), false),
        ],
        is_closed: false,
    });
}
