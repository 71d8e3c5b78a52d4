use crate::ast::{DictElement, Expr};
use crate::builder::FluentExpr;
use crate::value::Value;

/// Ordered dict literal. Keys always render as string literals and repeated
/// keys stay as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict {
    elements: Vec<(String, Expr)>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mapping<K, V>(mapping: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        mapping
            .into_iter()
            .fold(Self::new(), |dict, (key, value)| dict.element(key, value))
    }

    pub fn element(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.elements.push((key.into(), value.into().resolve()));
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FluentExpr for Dict {
    fn to_expr(&self) -> Expr {
        Expr::dict(
            self.elements
                .iter()
                .map(|(key, value)| DictElement {
                    key: Expr::string(key.as_str()),
                    value: value.clone(),
                })
                .collect(),
        )
    }
}

/// Ordered list literal, elements may mix kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    elements: Vec<Expr>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        values
            .into_iter()
            .fold(Self::new(), |list, value| list.element(value))
    }

    pub fn element(mut self, value: impl Into<Value>) -> Self {
        self.elements.push(value.into().resolve());
        self
    }
}

impl FluentExpr for List {
    fn to_expr(&self) -> Expr {
        Expr::list(self.elements.clone())
    }
}
