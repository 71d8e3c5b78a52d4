//! Python syntax tree produced by the builders. Trees are owned, so Box<T> is fine

mod expr;
mod ident;
mod json;
mod stmt;

pub use expr::*;
pub use ident::*;
pub use stmt::*;

ast_node! {
    pub struct Module {
        pub body: Vec<Stmt>,
    }
}

ast_node! {
    /// Node is any tree element the serializer accepts at the top level.
    #[derive(derive_more::From)]
    pub enum Node {
        Module(Module),
        Stmt(Stmt),
        Expr(Expr),
    }
}

impl Module {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}

impl Node {
    /// Wrap a bare list expression into an expression statement, the only
    /// expression shape that renders as a standalone line.
    pub fn normalized(self) -> Node {
        match self {
            Node::Expr(expr) if expr.is_list() => Node::Stmt(Stmt::Expr(expr)),
            other => other,
        }
    }
}
