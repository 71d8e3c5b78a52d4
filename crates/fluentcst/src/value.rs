//! Host values accepted wherever the builders take a literal or composite value,
//! and the resolver that turns them into expression nodes.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::trace;

use crate::ast::{DictElement, Expr};
use crate::builder::{Attribute, Call, Dict, FluentExpr, Name, RawNode};
use crate::error::{Error, Result};

/// Every kind of value a builder accepts. Mappings and sequences keep their
/// order; mappings nest to any depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Map(Vec<(String, Value)>),
    Seq(Vec<Value>),
    Call(Call),
    Dict(Dict),
    Attribute(Attribute),
    Name(Name),
    Raw(RawNode),
}

impl Value {
    /// Ordered mapping from `(key, value)` pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn seq<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Map(_) => "mapping",
            Value::Seq(_) => "sequence",
            Value::Call(_) => "call",
            Value::Dict(_) => "dict",
            Value::Attribute(_) => "attribute",
            Value::Name(_) => "name",
            Value::Raw(_) => "raw",
        }
    }

    /// Resolve into the canonical expression node.
    pub fn resolve(&self) -> Expr {
        trace!(kind = self.kind(), "resolving value");
        match self {
            Value::String(s) => Expr::string(s.as_str()),
            Value::Int(i) => Expr::int(*i),
            Value::Bool(b) => Expr::bool(*b),
            Value::Map(entries) => resolve_map(entries),
            Value::Seq(items) => Expr::list(items.iter().map(Value::resolve).collect()),
            Value::Call(call) => call.to_expr(),
            Value::Dict(dict) => dict.to_expr(),
            Value::Attribute(attr) => attr.to_expr(),
            Value::Name(name) => name.to_expr(),
            Value::Raw(raw) => raw.to_expr(),
        }
    }
}

/// The single funnel through which values enter the tree.
pub fn resolve(value: impl Into<Value>) -> Expr {
    value.into().resolve()
}

fn resolve_map(entries: &[(String, Value)]) -> Expr {
    Expr::dict(
        entries
            .iter()
            .map(|(key, value)| DictElement {
                key: Expr::string(key.as_str()),
                value: value.resolve(),
            })
            .collect(),
    )
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::seq(items)
    }
}

impl<K: Into<String>, V: Into<Value>> From<IndexMap<K, V>> for Value {
    fn from(map: IndexMap<K, V>) -> Self {
        Value::map(map)
    }
}

/// Sorted by key, since that is the map's own iteration order.
impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::map(map)
    }
}

impl From<Call> for Value {
    fn from(value: Call) -> Self {
        Value::Call(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

impl From<Attribute> for Value {
    fn from(value: Attribute) -> Self {
        Value::Attribute(value)
    }
}

impl From<Name> for Value {
    fn from(value: Name) -> Self {
        Value::Name(value)
    }
}

impl From<RawNode> for Value {
    fn from(value: RawNode) -> Self {
        Value::Raw(value)
    }
}

/// JSON is the one host representation whose kind is only known at runtime.
impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match value {
            Json::String(s) => Ok(Value::String(s)),
            Json::Bool(b) => Ok(Value::Bool(b)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Int(i)),
                None if n.is_f64() => Err(Error::unsupported_value(n, "float")),
                None => Err(Error::unsupported_value(n, "integer out of range")),
            },
            Json::Array(items) => Ok(Value::Seq(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_>>()?,
            )),
            Json::Object(map) => Ok(Value::Map(
                map.into_iter()
                    .map(|(k, v)| -> Result<(String, Value)> { Ok((k, Value::try_from(v)?)) })
                    .collect::<Result<_>>()?,
            )),
            Json::Null => Err(Error::unsupported_value("null", "null")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;
    use serde_json::json;

    #[test]
    fn scalars_become_literals() {
        assert_eq!(resolve("v"), Expr::Literal(Literal::String("v".into())));
        assert_eq!(resolve(7), Expr::Literal(Literal::Int(7)));
        assert_eq!(resolve(false), Expr::Literal(Literal::Bool(false)));
    }

    #[test]
    fn nested_mapping_becomes_nested_dict() {
        let value = Value::map([("a", Value::from("b")), ("c", Value::map([("d", 1)]))]);
        let Expr::Dict(dict) = value.resolve() else {
            panic!("expected dict");
        };
        assert_eq!(dict.elements.len(), 2);
        assert_eq!(dict.elements[0].key, Expr::string("a"));
        assert!(matches!(dict.elements[1].value, Expr::Dict(_)));
    }

    #[test]
    fn sequence_elements_resolve_independently() {
        let value = Value::seq([Value::from("a"), Value::map([("k", "v")]), Value::from(3)]);
        let Expr::List(list) = value.resolve() else {
            panic!("expected list");
        };
        assert!(matches!(list.elements[0], Expr::Literal(Literal::String(_))));
        assert!(matches!(list.elements[1], Expr::Dict(_)));
        assert!(matches!(list.elements[2], Expr::Literal(Literal::Int(3))));
    }

    #[test]
    fn built_nodes_pass_through() {
        let name = Name::new("obj");
        assert_eq!(resolve(name.clone()), name.to_expr());
    }

    #[test]
    fn json_objects_keep_key_order() {
        let value = Value::try_from(json!({"z": 1, "a": [true, "x"]})).unwrap();
        let Value::Map(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn json_null_and_float_are_rejected() {
        let err = Value::try_from(json!(null)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue { kind: "null", .. }));

        let err = Value::try_from(json!({"k": [1.5]})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue { kind: "float", .. }));

        let err = Value::try_from(json!(u64::MAX)).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedValue {
                kind: "integer out of range",
                ..
            }
        ));
    }
}
