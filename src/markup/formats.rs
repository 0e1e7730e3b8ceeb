//! Output formats for parsed components
//!
//!     - treeviz: one line per node, for eyeballing tree shape and styles
//!     - json: the serde representation of the tree
//!     - plain: the visible text with all styling dropped
//!
//!     Formatters are looked up by name through a [FormatRegistry].

pub mod plain;
pub mod treeviz;

pub use plain::{to_plain_str, PlainFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_styles, TreevizFormatter};

use crate::markup::component::Component;
use crate::markup::config::OutputFormat;
use std::fmt;

/// Errors that can occur when formatting a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a component tree to a string.
pub trait Formatter: Send + Sync {
    /// The output format this formatter produces
    fn format(&self) -> OutputFormat;

    fn serialize(&self, component: &Component) -> Result<String, FormatError>;
}

/// Pretty-printed JSON through serde.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn serialize(&self, component: &Component) -> Result<String, FormatError> {
        serde_json::to_string_pretty(component)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }
}

/// One formatter per [OutputFormat].
pub struct FormatRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: Vec::new(),
        }
    }

    /// Registers a formatter, replacing the one for the same format.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let format = formatter.format();
        self.formatters.retain(|existing| existing.format() != format);
        self.formatters.push(Box::new(formatter));
    }

    pub fn serialize(
        &self,
        component: &Component,
        format: OutputFormat,
    ) -> Result<String, FormatError> {
        self.formatters
            .iter()
            .find(|formatter| formatter.format() == format)
            .ok_or_else(|| FormatError::FormatNotFound(format.name().to_string()))?
            .serialize(component)
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TreevizFormatter::default());
        registry.register(JsonFormatter);
        registry.register(PlainFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
