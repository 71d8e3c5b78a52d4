//! Fluent builders that assemble Python syntax trees and render them to source.
//!
//! ```
//! use fluentcst::{Attribute, ClassDef, FluentNode, Module};
//!
//! let code = Module::new()
//!     .require_import("Error", "lib.types.exceptions")?
//!     .add(
//!         ClassDef::new("Cls1")?
//!             .field("data", Attribute::new("BaseCls.data")?.bitor([("a", "b")]))?,
//!     )
//!     .to_code()?;
//! assert_eq!(
//!     code,
//!     "from lib.types.exceptions import Error\nclass Cls1:\n    data = BaseCls.data | {\"a\": \"b\"}\n"
//! );
//! # Ok::<(), fluentcst::Error>(())
//! ```

#[macro_use]
mod macros;

pub mod ast;
pub mod builder;
pub mod error;
pub mod printer;
pub mod value;

pub use builder::*;
pub use error::{Error, Result};
pub use printer::{AstSerializer, PrintOptions, PythonSerializer, QuoteStyle};
pub use value::{resolve, Value};

use tracing::debug;

/// Render `node` with the default Python serializer, wrapping bare list
/// expressions into statements first.
pub fn render(node: &ast::Node) -> Result<String> {
    let node = node.clone().normalized();
    let kind = match &node {
        ast::Node::Module(_) => "module",
        ast::Node::Stmt(_) => "stmt",
        ast::Node::Expr(_) => "expr",
    };
    debug!(kind, "serializing tree");
    PythonSerializer::default().serialize_node(&node)
}
