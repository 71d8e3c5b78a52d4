//! Renderer contract and the Python serializer behind it.

mod python;

pub use python::PythonSerializer;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ast::{Expr, Module, Node, Stmt};
use crate::Result;

pub const INDENT_SIZE_ENV: &str = "FLUENTCST_INDENT_SIZE";
pub const QUOTE_STYLE_ENV: &str = "FLUENTCST_QUOTE_STYLE";

/// Turns a finished tree into source text.
pub trait AstSerializer {
    fn serialize_node(&self, node: &Node) -> Result<String> {
        match node {
            Node::Module(module) => self.serialize_module(module),
            Node::Stmt(stmt) => self.serialize_stmt(stmt),
            Node::Expr(expr) => self.serialize_expr(expr),
        }
    }
    fn serialize_module(&self, node: &Module) -> Result<String>;
    fn serialize_stmt(&self, node: &Stmt) -> Result<String>;
    fn serialize_expr(&self, node: &Expr) -> Result<String>;
}

/// Delimiter used for string literals, the one in use is escaped inside them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub fn delimiter(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "double" => Some(QuoteStyle::Double),
            "single" => Some(QuoteStyle::Single),
            _ => None,
        }
    }
}

/// Configuration for rendering source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Number of spaces to indent per nesting level.
    pub indent_size: usize,
    pub quote: QuoteStyle,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            quote: QuoteStyle::Double,
        }
    }
}

impl PrintOptions {
    /// Defaults overlaid with `FLUENTCST_INDENT_SIZE` and `FLUENTCST_QUOTE_STYLE`.
    pub fn from_env() -> Self {
        Self::default().overlay(
            std::env::var(INDENT_SIZE_ENV).ok().as_deref(),
            std::env::var(QUOTE_STYLE_ENV).ok().as_deref(),
        )
    }

    fn overlay(mut self, indent_size: Option<&str>, quote: Option<&str>) -> Self {
        if let Some(raw) = indent_size {
            match raw.trim().parse() {
                Ok(size) => self.indent_size = size,
                Err(_) => warn!(value = raw, "ignoring invalid {}", INDENT_SIZE_ENV),
            }
        }
        if let Some(raw) = quote {
            match QuoteStyle::parse(raw) {
                Some(style) => self.quote = style,
                None => warn!(value = raw, "ignoring invalid {}", QUOTE_STYLE_ENV),
            }
        }
        self
    }
}
