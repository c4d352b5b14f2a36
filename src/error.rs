//! Error types for quick view placement
//!
//! The placement calculators themselves are total and never fail. These
//! errors cover the edges around them: live layout reads, configuration
//! loading and the WASM-owned quick view state.

use thiserror::Error;

/// Failure to read a live layout measurement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// No global `window` (not running in a browser)
    #[error("No window available")]
    NoWindow,

    /// The window has no document
    #[error("No document available")]
    NoDocument,

    /// No element matched the selector
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The selector could not be parsed by the DOM
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// The DOM threw while reading a property
    #[error("Failed to read {0}")]
    ReadFailed(&'static str),

    /// A property held something other than a number
    #[error("{0} is not a number")]
    NotANumber(&'static str),

    /// A measurement came back as NaN or infinite
    #[error("Non-finite measurement: {0}")]
    NonFinite(&'static str),
}

/// Failure to load or validate a placement configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Failure in the quick view host layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuickViewError {
    #[error("Layout read failed: {0}")]
    Layout(#[from] LayoutError),

    /// An operation needed a mounted quick view
    #[error("Quick view is not mounted")]
    NotMounted,

    /// The WASM-owned state lock was poisoned by an earlier panic
    #[error("Quick view state lock poisoned")]
    StatePoisoned,
}
