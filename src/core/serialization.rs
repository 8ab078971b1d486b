//! Serialization module for fleet_encoder
//!
//! This module provides the format-agnostic builder contract and its two
//! output formats:
//! - XML
//! - JSON
//!
//! Serializers are use-once builders: `build` consumes the instance after
//! auto-closing any blocks left open.

use crate::core::error::{EncoderError, Result};
use crate::core::models::FieldValue;

/// Trait for stateful output format builders
///
/// A serializer accumulates named blocks and scalar fields and renders the
/// finished document once via [`build`](Serializer::build). All
/// accumulation operations are total: `end_block` with no open block is
/// silently ignored rather than an error.
pub trait Serializer: Send + Sync {
    /// Append a labeled scalar at the current nesting level
    fn add_field(&mut self, name: &str, value: FieldValue);

    /// Open a named nesting level; subsequent fields and blocks land
    /// inside it until the matching `end_block`
    fn add_block(&mut self, name: &str);

    /// Close the innermost open block; no-op when nothing is open
    fn end_block(&mut self);

    /// Auto-close any remaining open blocks (innermost first) and return
    /// the rendered document
    fn build(self: Box<Self>) -> String;
}

// A minimal Debug projection for the trait object so that
// `Result<Box<dyn Serializer>, _>` combinators (e.g. `unwrap_err`) are
// usable. Serializers carry no externally meaningful state to print.
impl std::fmt::Debug for dyn Serializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Serializer")
    }
}

/// Capability for domain objects that can describe themselves to any
/// serializer
///
/// Implementations must drive the same block/field sequence regardless of
/// which serializer implementation is active.
pub trait Serializable {
    /// Describe this object through the serializer contract
    fn serialize(&self, serializer: &mut dyn Serializer);
}

/// XML format serializer
///
/// Emits one element per line, two spaces of indent per nesting level, no
/// surrounding document wrapper.
pub struct XmlSerializer {
    blocks: Vec<String>,
    content: String,
    indent_level: usize,
}

impl XmlSerializer {
    /// Create a new XmlSerializer
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            content: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }
}

impl Default for XmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer for XmlSerializer {
    fn add_field(&mut self, name: &str, value: FieldValue) {
        // Values are emitted verbatim; no entity escaping
        self.content
            .push_str(&format!("{}<{}>{}</{}>\n", self.indent(), name, value, name));
    }

    fn add_block(&mut self, name: &str) {
        self.content
            .push_str(&format!("{}<{}>\n", self.indent(), name));
        self.blocks.push(name.to_string());
        self.indent_level += 1;
    }

    fn end_block(&mut self) {
        if let Some(name) = self.blocks.pop() {
            self.indent_level -= 1;
            self.content
                .push_str(&format!("{}</{}>\n", self.indent(), name));
        }
    }

    fn build(mut self: Box<Self>) -> String {
        while !self.blocks.is_empty() {
            self.end_block();
        }
        self.content
    }
}

/// JSON format serializer
///
/// The document is always a single implicit top-level object wrapping the
/// accumulated items.
pub struct JsonSerializer {
    blocks: Vec<String>,
    content: String,
    indent_level: usize,
    needs_comma: bool,
}

impl JsonSerializer {
    /// Create a new JsonSerializer
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            content: String::new(),
            indent_level: 0,
            needs_comma: false,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    /// Write the separator preceding an item: a comma when one is pending,
    /// and a newline for everything but the document's first item
    fn begin_item(&mut self) {
        if self.needs_comma {
            self.content.push(',');
        }
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.needs_comma = true;
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer for JsonSerializer {
    fn add_field(&mut self, name: &str, value: FieldValue) {
        self.begin_item();
        self.content.push_str(&format!(
            "{}\"{}\": {}",
            self.indent(),
            name,
            value.json_literal()
        ));
    }

    fn add_block(&mut self, name: &str) {
        self.begin_item();
        self.content
            .push_str(&format!("{}\"{}\": {{", self.indent(), name));
        self.blocks.push(name.to_string());
        self.indent_level += 1;
        // First item inside the new block needs no leading comma
        self.needs_comma = false;
    }

    fn end_block(&mut self) {
        if self.blocks.pop().is_some() {
            self.indent_level -= 1;
            self.content.push_str(&format!("\n{}}}", self.indent()));
            // A closed block counts as an emitted item for its parent
            self.needs_comma = true;
        }
    }

    fn build(mut self: Box<Self>) -> String {
        while !self.blocks.is_empty() {
            self.end_block();
        }
        format!("{{\n{}\n}}", self.content)
    }
}

/// Create a serializer for a format identifier
///
/// Recognized identifiers are `"xml"` and `"json"`; anything else is an
/// [`EncoderError::UnsupportedFormat`]. Identifiers are matched as-is:
/// normalizing case is the caller's responsibility.
pub fn create_serializer(format: &str) -> Result<Box<dyn Serializer>> {
    match format {
        "xml" => Ok(Box::new(XmlSerializer::new())),
        "json" => Ok(Box::new(JsonSerializer::new())),
        _ => Err(EncoderError::unsupported_format(format)),
    }
}
