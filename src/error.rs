// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Specific error types for locale dictionary loading.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The requested code is not in the supported-locale registry
    Unsupported(String),

    /// No embedded dictionary asset exists for the locale
    MissingAsset(String),

    /// The embedded dictionary asset is not valid JSON
    Parse(String),
}

impl LocaleError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LocaleError::Unsupported(_) => "notification.localeUnsupported",
            LocaleError::MissingAsset(_) | LocaleError::Parse(_) => {
                "notification.localeLoadFailed"
            }
        }
    }

    /// Returns the locale code the failure refers to.
    pub fn locale(&self) -> &str {
        match self {
            LocaleError::Unsupported(code)
            | LocaleError::MissingAsset(code)
            | LocaleError::Parse(code) => code,
        }
    }
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Unsupported(code) => write!(f, "Unsupported locale: {}", code),
            LocaleError::MissingAsset(code) => {
                write!(f, "No dictionary asset for locale: {}", code)
            }
            LocaleError::Parse(code) => write!(f, "Malformed dictionary for locale: {}", code),
        }
    }
}

/// Reasons an invoice record is rejected for export.
///
/// Checked in a fixed order so the user is told about one missing
/// requirement at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingInvoiceNumber,
    MissingCreationDate,
    MissingDueDate,
    /// No line item carries a non-empty description
    NoDescribedLineItems,
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingInvoiceNumber => "notification.missingInvoiceNumber",
            ValidationError::MissingCreationDate => "notification.missingCreationDate",
            ValidationError::MissingDueDate => "notification.missingDueDate",
            ValidationError::NoDescribedLineItems => "notification.missingLineItems",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingInvoiceNumber => write!(f, "Invoice number is missing"),
            ValidationError::MissingCreationDate => write!(f, "Creation date is missing"),
            ValidationError::MissingDueDate => write!(f, "Due date is missing"),
            ValidationError::NoDescribedLineItems => {
                write!(f, "No line item has a description")
            }
        }
    }
}

/// Specific error types for PDF rendering failures.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Building the document failed (fonts, page content)
    Document(String),

    /// Writing the file failed (permissions, disk full)
    Io(String),

    /// The background render task did not complete
    TaskFailed(String),
}

impl RenderError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RenderError::Document(_) | RenderError::TaskFailed(_) => {
                "notification.exportRenderFailed"
            }
            RenderError::Io(_) => "notification.exportWriteFailed",
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Document(msg) => write!(f, "PDF rendering failed: {}", msg),
            RenderError::Io(msg) => write!(f, "PDF write failed: {}", msg),
            RenderError::TaskFailed(msg) => write!(f, "Render task failed: {}", msg),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
