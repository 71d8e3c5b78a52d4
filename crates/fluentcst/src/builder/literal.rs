use crate::ast::{Expr, Ident};
use crate::builder::FluentExpr;

/// Plain string literal, rendered between the configured quote delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleString {
    value: String,
}

impl SimpleString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl FluentExpr for SimpleString {
    fn to_expr(&self) -> Expr {
        Expr::string(self.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer(pub i64);

impl FluentExpr for Integer {
    fn to_expr(&self) -> Expr {
        Expr::int(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean(pub bool);

impl FluentExpr for Boolean {
    fn to_expr(&self) -> Expr {
        Expr::bool(self.0)
    }
}

/// A bare identifier such as `int` or `obj`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    ident: Ident,
}

impl Name {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self { ident: name.into() }
    }
}

impl FluentExpr for Name {
    fn to_expr(&self) -> Expr {
        Expr::Name(self.ident.clone())
    }
}

/// Carries an already built tree fragment through the builders untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode {
    expr: Expr,
}

impl RawNode {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

impl FluentExpr for RawNode {
    fn to_expr(&self) -> Expr {
        self.expr.clone()
    }
}
