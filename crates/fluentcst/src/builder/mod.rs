//! Fluent builders. Each builder owns its accumulated state, chainable methods
//! take and return `self`, and `to_code` renders the current state without
//! consuming it.

mod annotation;
mod assign;
mod attribute;
mod call;
mod class_def;
mod collection;
mod import;
mod literal;
mod module;

pub use annotation::*;
pub use assign::*;
pub use attribute::*;
pub use call::*;
pub use class_def::*;
pub use collection::*;
pub use import::*;
pub use literal::*;
pub use module::*;

use crate::ast::{Expr, Ident, Node, Stmt};
use crate::error::Error;
use crate::printer::{AstSerializer, PrintOptions, PythonSerializer};
use crate::Result;

/// Class, field, variable and imported names must be Python identifiers.
pub(crate) fn identifier(name: impl Into<String>) -> Result<Ident> {
    let name = name.into();
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_alphanumeric());
    if !valid {
        return Err(Error::InvalidIdentifier { name });
    }
    Ok(Ident::new(name))
}

/// Anything that can be handed to the serializer.
pub trait FluentNode {
    fn to_node(&self) -> Node;

    fn to_code(&self) -> Result<String> {
        crate::render(&self.to_node())
    }

    fn to_code_with(&self, options: &PrintOptions) -> Result<String> {
        PythonSerializer::new(options.clone()).serialize_node(&self.to_node().normalized())
    }
}

pub trait FluentExpr {
    fn to_expr(&self) -> Expr;
}

pub trait FluentStmt {
    fn to_stmt(&self) -> Stmt;
}

macro_rules! expr_node {
    ($($ty:ty),* $(,)?) => {$(
        impl FluentNode for $ty {
            fn to_node(&self) -> Node {
                Node::Expr(self.to_expr())
            }
        }
    )*};
}

macro_rules! stmt_node {
    ($($ty:ty),* $(,)?) => {$(
        impl FluentNode for $ty {
            fn to_node(&self) -> Node {
                Node::Stmt(self.to_stmt())
            }
        }
    )*};
}

expr_node!(SimpleString, Integer, Boolean, Name, RawNode, Attribute, List, Dict, Call);
stmt_node!(ClassDef, ImportFrom, Assign);
