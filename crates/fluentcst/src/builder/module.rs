use indexmap::IndexSet;
use tracing::debug;

use crate::ast::{self, Node, Stmt};
use crate::builder::{FluentNode, FluentStmt, ImportFrom};
use crate::Result;

/// Top-level module: required imports first, then statements in the order
/// they were added. Imports are deduplicated by `(path, symbol)` and keep the
/// order of their first request.
#[derive(Debug, Clone, Default)]
pub struct Module {
    statements: Vec<Stmt>,
    imports: IndexSet<ImportFrom>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, node: impl FluentStmt) -> Self {
        self.statements.push(node.to_stmt());
        self
    }

    /// `from <from> import <symbol>`, emitted once no matter how often it is
    /// requested.
    pub fn require_import(self, symbol: &str, from: &str) -> Result<Self> {
        Ok(self.import(ImportFrom::new(from, symbol)?))
    }

    pub fn import(mut self, import: ImportFrom) -> Self {
        let (index, inserted) = self.imports.insert_full(import);
        if !inserted {
            let existing = &self.imports[index];
            debug!(
                path = existing.path(),
                symbol = existing.symbol(),
                "duplicate import request collapsed"
            );
        }
        self
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportFrom> {
        self.imports.iter()
    }

    pub fn to_module(&self) -> ast::Module {
        let body = self
            .imports
            .iter()
            .map(FluentStmt::to_stmt)
            .chain(self.statements.iter().cloned())
            .collect();
        ast::Module::new(body)
    }
}

impl FluentNode for Module {
    fn to_node(&self) -> Node {
        Node::Module(self.to_module())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_keep_first_request_order() {
        let module = Module::new()
            .require_import("B", "lib.b")
            .and_then(|m| m.require_import("A", "lib.a"))
            .and_then(|m| m.require_import("B", "lib.b"))
            .unwrap();
        let symbols: Vec<_> = module.imports().map(ImportFrom::symbol).collect();
        assert_eq!(symbols, ["B", "A"]);
    }
}
