use indexmap::IndexMap;

use crate::ast::{Arg, Expr};
use crate::builder::attribute::name_or_attribute;
use crate::builder::FluentExpr;
use crate::value::Value;
use crate::Result;

/// Function call. Positional arguments render first, then keyword arguments,
/// each group in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    func: Expr,
    args: Vec<Expr>,
    kwargs: IndexMap<String, Expr>,
}

impl Call {
    /// `callee` may be dotted, e.g. `logging.getLogger`.
    pub fn new(callee: &str) -> Result<Self> {
        Ok(Self {
            func: name_or_attribute(callee)?,
            args: Vec::new(),
            kwargs: IndexMap::new(),
        })
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into().resolve());
        self
    }

    pub fn args<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Self {
        values.into_iter().fold(self, |call, value| call.arg(value))
    }

    /// Setting the same keyword twice keeps its first position and the last value.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into().resolve());
        self
    }

    pub fn kwargs<K, V>(self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .fold(self, |call, (name, value)| call.kwarg(name, value))
    }
}

impl FluentExpr for Call {
    fn to_expr(&self) -> Expr {
        let positional = self.args.iter().cloned().map(Arg::positional);
        let keyword = self
            .kwargs
            .iter()
            .map(|(name, value)| Arg::keyword(name.as_str(), value.clone()));
        Expr::call(self.func.clone(), positional.chain(keyword).collect())
    }
}
