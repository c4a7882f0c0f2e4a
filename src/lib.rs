// SPDX-License-Identifier: MPL-2.0
//! `iced_invoice` is an invoice builder built with the Iced GUI framework.
//!
//! Fill in the form, watch the preview pane mirror it live, and export the
//! result as a PDF. It demonstrates JSON dictionary localization, auto-saved
//! form state, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_invoice/0.2.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod invoice;
pub mod render;
pub mod ui;
