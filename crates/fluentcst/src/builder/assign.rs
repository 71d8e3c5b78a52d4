use crate::ast::{Ident, Stmt, StmtAssign};
use crate::builder::{identifier, FluentStmt};
use crate::value::Value;
use crate::Result;

/// Module level `target = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    target: Ident,
    value: crate::ast::Expr,
}

impl Assign {
    pub fn new(target: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            target: identifier(target)?,
            value: value.into().resolve(),
        })
    }
}

impl FluentStmt for Assign {
    fn to_stmt(&self) -> Stmt {
        StmtAssign {
            target: self.target.clone(),
            value: self.value.clone(),
        }
        .into()
    }
}
