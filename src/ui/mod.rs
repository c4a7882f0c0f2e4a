// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`header`] - Title bar with save status, language and currency pickers
//! - [`form`] - Editable invoice form (details, addresses, bank, line items)
//! - [`preview`] - Read-only paper-white preview sheet
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod form;
pub mod header;
pub mod notifications;
pub mod preview;
pub mod styles;
pub mod theming;
