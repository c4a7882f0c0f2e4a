// SPDX-License-Identifier: MPL-2.0
//! Live invoice preview pane.
//!
//! Renders a [`PreviewModel`] as a paper-white sheet mirroring the PDF
//! layout. The pane is read-only and produces no messages of its own, so it
//! is generic over the caller's message type.

use crate::invoice::preview::{PreviewItem, PreviewModel};
use crate::i18n::TextDirection;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::alignment::Horizontal;
use iced::widget::{container, rule, scrollable, text, Column, Row};
use iced::{Element, Length};

/// Render the preview sheet.
pub fn pane<'a, Message: 'a>(model: &'a PreviewModel) -> Element<'a, Message> {
    let align = match model.direction {
        TextDirection::RightToLeft => Horizontal::Right,
        TextDirection::LeftToRight => Horizontal::Left,
    };

    let mut sheet = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(align);

    // Document header
    sheet = sheet.push(text(&model.labels.invoice).size(typography::TITLE_LG));
    sheet = sheet.push(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(align)
            .push(detail_line(&model.labels.invoice_number, &model.invoice_number))
            .push(detail_line(&model.labels.creation_date, &model.creation_date))
            .push(detail_line(&model.labels.due_date, &model.due_date)),
    );
    sheet = sheet.push(rule::horizontal(1));

    // Addresses
    let addresses = Row::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(address_block(
            &model.labels.bill_from,
            &model.bill_from_name,
            &model.bill_from_address1,
            &model.bill_from_address2,
            model.bill_from_zip_line.as_deref(),
            align,
        ))
        .push(address_block(
            &model.labels.bill_to,
            &model.bill_to_name,
            &model.bill_to_address1,
            &model.bill_to_address2,
            None,
            align,
        ));
    sheet = sheet.push(addresses);

    // Payment details
    sheet = sheet.push(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(align)
            .push(text(&model.labels.payment_details).size(typography::TITLE_SM))
            .push(detail_line(&model.labels.beneficiary_name, &model.beneficiary_name))
            .push(detail_line(
                &model.labels.beneficiary_account,
                &model.beneficiary_account,
            ))
            .push(detail_line(&model.labels.swift_code, &model.swift_code))
            .push(detail_line(&model.labels.bank_name, &model.bank_name))
            .push(detail_line(&model.labels.bank_address, &model.bank_address))
            .push(detail_line(
                &model.labels.intermediary_swift,
                &model.intermediary_swift,
            ))
            .push(detail_line(
                &model.labels.intermediary_bank_name,
                &model.intermediary_bank_name,
            )),
    );

    // Item table
    sheet = sheet.push(items_table(model));

    // Closing line
    sheet = sheet.push(
        container(text(&model.labels.thank_you).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::SM),
    );

    scrollable(
        container(sheet)
            .style(container_styles::preview_paper)
            .padding(spacing::XL)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .into()
}

/// One `label: value` line in the paper's secondary tone.
fn detail_line<'a, Message: 'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    text(format!("{label}: {value}"))
        .size(typography::BODY)
        .color(palette::GRAY_700)
        .into()
}

/// Address block with the empty lines dropped.
fn address_block<'a, Message: 'a>(
    title: &'a str,
    name: &'a str,
    address1: &'a str,
    address2: &'a str,
    zip_line: Option<&'a str>,
    align: Horizontal,
) -> Element<'a, Message> {
    let mut block = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(align)
        .push(text(title).size(typography::TITLE_SM))
        .push(text(name).size(typography::BODY));

    for line in [address1, address2]
        .into_iter()
        .chain(zip_line)
        .filter(|line| !line.is_empty())
    {
        block = block.push(text(line).size(typography::BODY).color(palette::GRAY_700));
    }

    block.into()
}

/// Item table with header, rows, and total. Falls back to the placeholder
/// line when nothing is included.
fn items_table<'a, Message: 'a>(model: &'a PreviewModel) -> Element<'a, Message> {
    let mut table = Column::new().spacing(spacing::XS).width(Length::Fill);

    table = table.push(
        Row::new()
            .push(
                text(&model.labels.item_description)
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_700)
                    .width(Length::Fill),
            )
            .push(
                text(&model.labels.item_amount)
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_700),
            ),
    );
    table = table.push(rule::horizontal(1));

    if model.items.is_empty() {
        table = table.push(
            text(&model.labels.no_items)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    } else {
        for item in &model.items {
            table = table.push(item_row(item));
        }
    }

    table = table.push(rule::horizontal(1));
    table = table.push(
        Row::new()
            .push(
                text(&model.labels.total)
                    .size(typography::BODY_LG)
                    .width(Length::Fill),
            )
            .push(text(&model.total).size(typography::BODY_LG)),
    );

    table.into()
}

fn item_row<'a, Message: 'a>(item: &'a PreviewItem) -> Element<'a, Message> {
    Row::new()
        .push(text(&item.description).size(typography::BODY).width(Length::Fill))
        .push(text(&item.amount).size(typography::BODY))
        .into()
}
