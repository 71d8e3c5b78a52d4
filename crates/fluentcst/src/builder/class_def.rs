use crate::ast::{Expr, Ident, Stmt, StmtAnnAssign, StmtAssign, StmtClassDef};
use crate::builder::attribute::name_or_attribute;
use crate::builder::{identifier, Annotation, FluentStmt};
use crate::error::{Error, Result};
use crate::value::Value;

/// ```
/// use fluentcst::{ClassDef, FluentNode};
///
/// let code = ClassDef::new("Cls1")?
///     .base("pydantic.BaseModel")?
///     .field("f1", "v1")?
///     .to_code()?;
/// assert_eq!(code, "class Cls1(pydantic.BaseModel):\n    f1 = \"v1\"\n");
/// # Ok::<(), fluentcst::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    name: Ident,
    bases: Vec<Expr>,
    fields: Vec<Stmt>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: identifier(name)?,
            bases: Vec::new(),
            fields: Vec::new(),
        })
    }

    pub fn base(mut self, class_name: &str) -> Result<Self> {
        self.bases.push(name_or_attribute(class_name)?);
        Ok(self)
    }

    /// `name = value`
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        self.fields.push(
            StmtAssign {
                target: identifier(name)?,
                value: value.into().resolve(),
            }
            .into(),
        );
        Ok(self)
    }

    /// `name: type`
    pub fn typed_field(
        mut self,
        name: impl Into<String>,
        ty: impl Into<Annotation>,
    ) -> Result<Self> {
        self.fields.push(
            StmtAnnAssign {
                target: identifier(name)?,
                annotation: ty.into().to_annotation(),
            }
            .into(),
        );
        Ok(self)
    }

    /// Exactly one of `value` and `ty` selects the field form.
    pub fn declare(
        self,
        name: impl Into<String>,
        value: Option<Value>,
        ty: Option<Annotation>,
    ) -> Result<Self> {
        let name = name.into();
        match (value, ty) {
            (Some(value), None) => self.field(name, value),
            (None, Some(ty)) => self.typed_field(name, ty),
            (None, None) => Err(Error::UnimplementedFeature(format!(
                "field `{name}` without a value or a type"
            ))),
            (Some(_), Some(_)) => Err(Error::UnimplementedFeature(format!(
                "field `{name}` with both a value and a type"
            ))),
        }
    }
}

impl FluentStmt for ClassDef {
    fn to_stmt(&self) -> Stmt {
        let body = if self.fields.is_empty() {
            vec![Stmt::Pass]
        } else {
            self.fields.clone()
        };
        StmtClassDef {
            name: self.name.clone(),
            bases: self.bases.clone(),
            body,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_gets_pass() {
        let Stmt::ClassDef(def) = ClassDef::new("C").unwrap().to_stmt() else {
            panic!("expected class");
        };
        assert_eq!(def.body, vec![Stmt::Pass]);
        assert!(def.bases.is_empty());
    }

    #[test]
    fn declare_needs_exactly_one_form() {
        let class = ClassDef::new("C").unwrap();
        let err = class.clone().declare("f", None, None).unwrap_err();
        assert!(matches!(err, Error::UnimplementedFeature(_)));

        let err = class
            .clone()
            .declare("f", Some("v".into()), Some("int".into()))
            .unwrap_err();
        assert!(matches!(err, Error::UnimplementedFeature(_)));

        let def = class.declare("f", None, Some("int".into())).unwrap();
        assert!(matches!(def.fields[0], Stmt::AnnAssign(_)));
    }

    #[test]
    fn names_are_checked_when_building() {
        let err = ClassDef::new("").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));

        let class = ClassDef::new("C").unwrap();
        let err = class.clone().field("", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
        let err = class.typed_field("bad name", "int").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn malformed_base_path_is_rejected() {
        let err = ClassDef::new("C").unwrap().base("a..b").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }
}
