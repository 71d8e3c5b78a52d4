use crate::ast::Ident;

pub type BExpr = Box<Expr>;

ast_node! {
    /// Literal values the builders can emit directly.
    pub enum Literal {
        String(String),
        Int(i64),
        Bool(bool),
    }
}

ast_node! {
    /// Expr is any expression that produces a value
    #[derive(derive_more::From)]
    pub enum Expr {
        Literal(Literal),
        Name(Ident),
        Attribute(ExprAttribute),
        Subscript(ExprSubscript),
        BinOr(ExprBinOr),
        List(ExprList),
        Dict(ExprDict),
        Call(ExprCall),
    }
}

ast_node! {
    /// `value.attr`
    pub struct ExprAttribute {
        pub value: BExpr,
        pub attr: Ident,
    }
}

ast_node! {
    /// `value[index]`
    pub struct ExprSubscript {
        pub value: BExpr,
        pub index: BExpr,
    }
}

ast_node! {
    /// `lhs | rhs`
    pub struct ExprBinOr {
        pub lhs: BExpr,
        pub rhs: BExpr,
    }
}

ast_node! {
    pub struct ExprList {
        pub elements: Vec<Expr>,
    }
}

ast_node! {
    pub struct DictElement {
        pub key: Expr,
        pub value: Expr,
    }
}

ast_node! {
    /// Entries keep insertion order and are never merged by key.
    pub struct ExprDict {
        pub elements: Vec<DictElement>,
    }
}

ast_node! {
    /// A call argument, keyword arguments carry their name.
    pub struct Arg {
        pub keyword: Option<Ident>,
        pub value: Expr,
    }
}

ast_node! {
    pub struct ExprCall {
        pub func: BExpr,
        pub args: Vec<Arg>,
    }
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Expr {
        Literal::String(value.into()).into()
    }
    pub fn int(value: i64) -> Expr {
        Literal::Int(value).into()
    }
    pub fn bool(value: bool) -> Expr {
        Literal::Bool(value).into()
    }
    pub fn name(name: impl Into<Ident>) -> Expr {
        Expr::Name(name.into())
    }
    pub fn attribute(value: Expr, attr: impl Into<Ident>) -> Expr {
        ExprAttribute {
            value: value.into(),
            attr: attr.into(),
        }
        .into()
    }
    pub fn subscript(value: Expr, index: Expr) -> Expr {
        ExprSubscript {
            value: value.into(),
            index: index.into(),
        }
        .into()
    }
    pub fn bin_or(lhs: Expr, rhs: Expr) -> Expr {
        ExprBinOr {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
        .into()
    }
    pub fn list(elements: Vec<Expr>) -> Expr {
        ExprList { elements }.into()
    }
    pub fn dict(elements: Vec<DictElement>) -> Expr {
        ExprDict { elements }.into()
    }
    pub fn call(func: Expr, args: Vec<Arg>) -> Expr {
        ExprCall {
            func: func.into(),
            args,
        }
        .into()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List(_))
    }
}

impl Arg {
    pub fn positional(value: Expr) -> Self {
        Self {
            keyword: None,
            value,
        }
    }

    pub fn keyword(name: impl Into<Ident>, value: Expr) -> Self {
        Self {
            keyword: Some(name.into()),
            value,
        }
    }
}
