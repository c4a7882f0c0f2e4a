// SPDX-License-Identifier: MPL-2.0
//! View rendering for the invoice form.

use super::{FormState, Message};
use crate::i18n::Catalog;
use crate::invoice::{Field, InvoiceRecord, LINE_ITEM_FLOOR};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, scrollable, text, text_input, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub record: &'a InvoiceRecord,
    pub state: &'a FormState,
    /// True while a PDF export task is running; the generate button is
    /// disabled and relabeled for the duration.
    pub exporting: bool,
}

/// Render the whole form column.
pub fn form<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let catalog = ctx.catalog;
    let record = ctx.record;

    let mut sections = Column::new().spacing(spacing::LG).padding(spacing::MD);

    // Invoice details
    sections = sections.push(
        section(catalog.tr("form.invoiceDetails"))
            .push(labeled_input(
                catalog.tr("form.invoiceNumber"),
                record.field(Field::InvoiceNumber),
                Field::InvoiceNumber,
                None,
            ))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(date_column(
                        catalog.tr("form.creationDate"),
                        record.field(Field::CreationDate),
                        Field::CreationDate,
                        ctx.state.hints.creation_date.as_ref(),
                    ))
                    .push(date_column(
                        catalog.tr("form.dueDate"),
                        record.field(Field::DueDate),
                        Field::DueDate,
                        ctx.state.hints.due_date.as_ref(),
                    )),
            ),
    );

    // Bill from
    sections = sections.push(
        section(catalog.tr("form.billFrom"))
            .push(labeled_input(
                catalog.tr("form.name"),
                record.field(Field::BillFromName),
                Field::BillFromName,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.addressLine1"),
                record.field(Field::BillFromAddress1),
                Field::BillFromAddress1,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.addressLine2"),
                record.field(Field::BillFromAddress2),
                Field::BillFromAddress2,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.zipCode"),
                record.field(Field::BillFromZip),
                Field::BillFromZip,
                None,
            )),
    );

    // Bill to
    sections = sections.push(
        section(catalog.tr("form.billTo"))
            .push(labeled_input(
                catalog.tr("form.name"),
                record.field(Field::BillToName),
                Field::BillToName,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.addressLine1"),
                record.field(Field::BillToAddress1),
                Field::BillToAddress1,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.addressLine2"),
                record.field(Field::BillToAddress2),
                Field::BillToAddress2,
                None,
            )),
    );

    // Bank details
    sections = sections.push(
        section(catalog.tr("form.bankDetails"))
            .push(labeled_input(
                catalog.tr("form.beneficiaryName"),
                record.field(Field::BeneficiaryName),
                Field::BeneficiaryName,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.beneficiaryAccount"),
                record.field(Field::BeneficiaryAccount),
                Field::BeneficiaryAccount,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.swiftCode"),
                record.field(Field::SwiftCode),
                Field::SwiftCode,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.bankName"),
                record.field(Field::BankName),
                Field::BankName,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.bankAddress"),
                record.field(Field::BankAddress),
                Field::BankAddress,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.intermediarySwift"),
                record.field(Field::IntermediarySwift),
                Field::IntermediarySwift,
                None,
            ))
            .push(labeled_input(
                catalog.tr("form.intermediaryBankName"),
                record.field(Field::IntermediaryBankName),
                Field::IntermediaryBankName,
                None,
            )),
    );

    // Line items
    sections = sections.push(build_items_section(&ctx));

    // Footer actions
    sections = sections.push(build_footer(&ctx));

    scrollable(sections).width(Length::Fill).into()
}

/// Build the line items section with one editable row per item.
fn build_items_section<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let catalog = ctx.catalog;
    let record = ctx.record;
    let at_floor = record.line_items.len() <= LINE_ITEM_FLOOR;

    let mut items = section(catalog.tr("form.lineItems"));

    // Column headers
    items = items.push(
        Row::new()
            .spacing(spacing::SM)
            .push(
                text(catalog.tr("form.itemDescription"))
                    .size(typography::BODY_SM)
                    .width(Length::Fill),
            )
            .push(
                text(catalog.tr("form.itemAmount"))
                    .size(typography::BODY_SM)
                    .width(Length::Fixed(sizing::AMOUNT_INPUT_WIDTH)),
            )
            .push(iced::widget::Space::new().width(Length::Fixed(sizing::BUTTON_HEIGHT))),
    );

    for (index, item) in record.line_items.iter().enumerate() {
        let description = text_input("", &item.description)
            .on_input(move |v| Message::ItemDescriptionChanged(index, v))
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        let amount = text_input("0", &item.amount)
            .on_input(move |v| Message::ItemAmountChanged(index, v))
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::AMOUNT_INPUT_WIDTH));

        let remove = button(text("✕").size(typography::BODY_SM))
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::BUTTON_HEIGHT));
        let remove = if at_floor {
            remove.style(button_styles::disabled())
        } else {
            remove
                .on_press(Message::RemoveItem(index))
                .style(button_styles::danger)
        };

        items = items.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(description)
                .push(amount)
                .push(remove),
        );
    }

    items.push(
        button(text(catalog.tr("form.addItem")).size(typography::BODY))
            .on_press(Message::AddItem)
            .padding(spacing::XS)
            .style(button_styles::secondary),
    )
}

/// Build the reset / generate row at the bottom of the form.
fn build_footer<'a>(ctx: &ViewContext<'a>) -> Row<'a, Message> {
    let catalog = ctx.catalog;

    let reset = button(text(catalog.tr("form.reset")).size(typography::BODY))
        .on_press(Message::ResetForm)
        .padding(spacing::SM)
        .style(button_styles::danger);

    let generate_label = if ctx.exporting {
        catalog.tr("form.generating")
    } else {
        catalog.tr("form.generatePdf")
    };
    let generate = button(text(generate_label).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill);
    let generate = if ctx.exporting {
        generate.style(button_styles::disabled())
    } else {
        generate
            .on_press(Message::GeneratePdf)
            .style(button_styles::primary)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(reset)
        .push(generate)
}

/// Start a titled section column.
fn section<'a>(title: String) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
}

/// Build an editable field with label and input.
fn labeled_input<'a>(
    label: String,
    value: &str,
    field: Field,
    placeholder: Option<String>,
) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS);

    col = col.push(text(format!("{label}:")).size(typography::BODY_SM));

    let placeholder_str = placeholder.unwrap_or_default();
    let input = text_input(&placeholder_str, value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .padding(spacing::XS)
        .size(typography::BODY);
    col = col.push(input);

    col.into()
}

/// Build a date field with label, input, and optional format hint.
fn date_column<'a>(
    label: String,
    value: &str,
    field: Field,
    hint: Option<&String>,
) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS).width(Length::Fill);

    col = col.push(text(format!("{label}:")).size(typography::BODY_SM));

    let input = text_input("YYYY-MM-DD", value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .padding(spacing::XS)
        .size(typography::BODY);
    col = col.push(input);

    if let Some(hint) = hint {
        col = col.push(
            text(hint.clone())
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    col.into()
}
