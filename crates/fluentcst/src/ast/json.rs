use crate::ast::Node;
use crate::Result;

impl Node {
    /// Snapshot of the tree as JSON, for debugging and golden tests.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use serde_json::json;

    #[test]
    fn snapshot_keeps_variant_names() {
        let node = Node::from(Expr::attribute(Expr::name("a"), "b"));
        let snapshot = node.to_json().unwrap();
        assert_eq!(
            snapshot,
            json!({
                "Expr": {
                    "Attribute": {
                        "value": { "Name": { "name": "a" } },
                        "attr": { "name": "b" }
                    }
                }
            })
        );
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let node = Node::from(Expr::list(vec![Expr::int(1), Expr::bool(true)]));
        let text = node.to_json_string_pretty().unwrap();
        let back: Node = serde_json::from_str(&text).unwrap();
        assert_eq!(back, node);
    }
}
