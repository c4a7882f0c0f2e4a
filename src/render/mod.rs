// SPDX-License-Identifier: MPL-2.0
//! Document rendering port.
//!
//! [`InvoiceRenderer`] is the seam between the update loop and the concrete
//! PDF backend: it consumes only the display-ready
//! [`PreviewModel`](crate::invoice::preview::PreviewModel) plus a page
//! configuration and produces bytes. The trait is `Send + Sync` so a
//! renderer can move onto the blocking task that runs the export.
//!
//! - [`pdf`]: the `printpdf` adapter with builtin Helvetica faces

use std::path::Path;

use crate::error::RenderError;
use crate::invoice::preview::PreviewModel;

pub mod pdf;

pub use pdf::PdfRenderer;

// =============================================================================
// PageConfig
// =============================================================================

/// Page geometry in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    /// Uniform margin on all four sides.
    pub margin: f32,
}

impl PageConfig {
    /// US Letter portrait with a 15 mm margin.
    #[must_use]
    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
            margin: 15.0,
        }
    }

    /// X coordinate of the right content edge.
    #[must_use]
    pub fn right_edge(&self) -> f32 {
        self.width - self.margin
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::letter()
    }
}

// =============================================================================
// InvoiceRenderer
// =============================================================================

/// Renders a preview model into document bytes.
pub trait InvoiceRenderer: Send + Sync {
    fn render(&self, model: &PreviewModel, page: &PageConfig) -> Result<Vec<u8>, RenderError>;
}

/// Renders and writes the document to `path` in one step.
///
/// Used by the export task after the save dialog resolved; rendering errors
/// and write errors keep their distinct notification keys.
pub fn render_to_file(
    renderer: &impl InvoiceRenderer,
    model: &PreviewModel,
    page: &PageConfig,
    path: &Path,
) -> Result<(), RenderError> {
    let bytes = renderer.render(model, page)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
