use std::hash::{Hash, Hasher};

use crate::ast::{Expr, Ident, Stmt, StmtImportFrom};
use crate::builder::attribute::module_path;
use crate::builder::{identifier, FluentStmt};
use crate::Result;

/// `from mylib.types import MyType`
///
/// Equality and hashing go by `(path, symbol)`, which is what lets a module
/// collapse repeated import requests.
#[derive(Debug, Clone)]
pub struct ImportFrom {
    path: String,
    symbol: Ident,
    module: Expr,
}

impl ImportFrom {
    pub fn new(path: impl Into<String>, symbol: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let module = module_path(&path)?;
        Ok(Self {
            path,
            symbol: identifier(symbol)?,
            module,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn symbol(&self) -> &str {
        self.symbol.as_str()
    }
}

impl PartialEq for ImportFrom {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.symbol == other.symbol
    }
}

impl Eq for ImportFrom {}

impl Hash for ImportFrom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.symbol.hash(state);
    }
}

impl FluentStmt for ImportFrom {
    fn to_stmt(&self) -> Stmt {
        StmtImportFrom {
            module: self.module.clone(),
            names: vec![self.symbol.clone()],
        }
        .into()
    }
}
