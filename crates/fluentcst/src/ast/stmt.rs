use crate::ast::{Expr, Ident};

ast_node! {
    /// Type annotation wrapper, the value is a name, a subscripted generic or a
    /// `|` chain of those.
    pub struct Annotation {
        pub value: Expr,
    }
}

ast_node! {
    pub enum Stmt {
        ImportFrom(StmtImportFrom),
        ClassDef(StmtClassDef),
        Assign(StmtAssign),
        AnnAssign(StmtAnnAssign),
        /// An expression standing on its own line
        Expr(Expr),
        Pass,
    }
}

ast_node! {
    /// `from module import names`
    pub struct StmtImportFrom {
        pub module: Expr,
        pub names: Vec<Ident>,
    }
}

ast_node! {
    pub struct StmtClassDef {
        pub name: Ident,
        pub bases: Vec<Expr>,
        pub body: Vec<Stmt>,
    }
}

ast_node! {
    /// `target = value`
    pub struct StmtAssign {
        pub target: Ident,
        pub value: Expr,
    }
}

ast_node! {
    /// `target: annotation`
    pub struct StmtAnnAssign {
        pub target: Ident,
        pub annotation: Annotation,
    }
}

impl From<StmtImportFrom> for Stmt {
    fn from(value: StmtImportFrom) -> Self {
        Stmt::ImportFrom(value)
    }
}

impl From<StmtClassDef> for Stmt {
    fn from(value: StmtClassDef) -> Self {
        Stmt::ClassDef(value)
    }
}

impl From<StmtAssign> for Stmt {
    fn from(value: StmtAssign) -> Self {
        Stmt::Assign(value)
    }
}

impl From<StmtAnnAssign> for Stmt {
    fn from(value: StmtAnnAssign) -> Self {
        Stmt::AnnAssign(value)
    }
}

impl From<Expr> for Stmt {
    fn from(value: Expr) -> Self {
        Stmt::Expr(value)
    }
}
