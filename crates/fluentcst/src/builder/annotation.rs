use crate::ast::{self, Expr, Node};
use crate::builder::FluentNode;

const LIST: &str = "list";

/// One member of a type union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    /// `int`, `MyClass`
    Name(String),
    /// `list[inner]`, or bare `list` when the element type is not declared
    List(Option<String>),
}

impl TypeToken {
    pub fn list(inner: impl Into<String>) -> Self {
        TypeToken::List(Some(inner.into()))
    }

    pub fn untyped_list() -> Self {
        TypeToken::List(None)
    }

    fn to_expr(&self) -> Expr {
        match self {
            TypeToken::Name(name) => Expr::name(name.as_str()),
            TypeToken::List(Some(inner)) => {
                Expr::subscript(Expr::name(LIST), Expr::name(inner.as_str()))
            }
            TypeToken::List(None) => Expr::name(LIST),
        }
    }
}

impl From<&str> for TypeToken {
    fn from(name: &str) -> Self {
        TypeToken::Name(name.to_string())
    }
}

impl From<String> for TypeToken {
    fn from(name: String) -> Self {
        TypeToken::Name(name)
    }
}

/// Union of type tokens, `A | B | C`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    first: TypeToken,
    rest: Vec<TypeToken>,
}

impl Annotation {
    pub fn new(token: impl Into<TypeToken>) -> Self {
        Self {
            first: token.into(),
            rest: Vec::new(),
        }
    }

    pub fn or(mut self, token: impl Into<TypeToken>) -> Self {
        self.rest.push(token.into());
        self
    }

    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = &TypeToken> {
        std::iter::once(&self.first).chain(&self.rest)
    }

    /// Right-associated chain: `A | (B | C)`, which prints as `A | B | C`.
    pub fn to_annotation(&self) -> ast::Annotation {
        let mut tokens = self.tokens().rev();
        let last = tokens.next().unwrap_or(&self.first).to_expr();
        let value = tokens.fold(last, |acc, token| Expr::bin_or(token.to_expr(), acc));
        ast::Annotation { value }
    }
}

impl From<TypeToken> for Annotation {
    fn from(token: TypeToken) -> Self {
        Annotation::new(token)
    }
}

impl From<&str> for Annotation {
    fn from(name: &str) -> Self {
        Annotation::new(name)
    }
}

impl From<String> for Annotation {
    fn from(name: String) -> Self {
        Annotation::new(name)
    }
}

impl FluentNode for Annotation {
    fn to_node(&self) -> Node {
        Node::Expr(self.to_annotation().value)
    }
}
