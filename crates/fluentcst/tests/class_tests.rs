use fluentcst::{Annotation, Attribute, ClassDef, Dict, Error, FluentNode, Result, TypeToken, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_field_can_be_fluent_dict() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .field("f1", Dict::new().element("d1", "v1"))?
        .to_code()?;
    assert_eq!(code, "class Cls1:\n    f1 = {\"d1\": \"v1\"}\n");
    Ok(())
}

#[test]
fn test_field_can_be_nested_dicts() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .field(
            "f1",
            Value::map([
                ("d1", Value::from("v1")),
                ("d2", Value::map([("d2.1", "v1")])),
            ]),
        )?
        .to_code()?;
    assert_eq!(
        code,
        "class Cls1:\n    f1 = {\"d1\": \"v1\", \"d2\": {\"d2.1\": \"v1\"}}\n"
    );
    Ok(())
}

#[test]
fn test_field_can_be_attribute_with_bitor() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .field("data", Attribute::new("BaseCls.data")?.bitor([("a", "b")]))?
        .to_code()?;
    assert_eq!(code, "class Cls1:\n    data = BaseCls.data | {\"a\": \"b\"}\n");
    Ok(())
}

#[test]
fn test_field_with_only_type_declaration() -> Result<()> {
    let code = ClassDef::new("Cls1")?.typed_field("f1", "int")?.to_code()?;
    assert_eq!(code, "class Cls1:\n    f1: int\n");
    Ok(())
}

#[test]
fn test_field_with_list_type() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .typed_field("f1", TypeToken::list("int"))?
        .to_code()?;
    assert_eq!(code, "class Cls1:\n    f1: list[int]\n");
    Ok(())
}

#[test]
fn test_field_with_untyped_list() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .typed_field("f1", TypeToken::untyped_list())?
        .to_code()?;
    assert_eq!(code, "class Cls1:\n    f1: list\n");
    Ok(())
}

#[test]
fn test_field_with_union_type() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .typed_field("f1", Annotation::new("str").or(TypeToken::list("str")).or("None"))?
        .to_code()?;
    assert_eq!(code, "class Cls1:\n    f1: str | list[str] | None\n");
    Ok(())
}

#[test]
fn test_empty_class_has_pass() -> Result<()> {
    assert_eq!(ClassDef::new("Cls1")?.to_code()?, "class Cls1:\n    pass\n");
    Ok(())
}

#[test]
fn test_bases_and_mixed_fields() -> Result<()> {
    let code = ClassDef::new("User")?
        .base("pydantic.BaseModel")?
        .base("Mixin")?
        .field("table", "users")?
        .typed_field("id", "int")?
        .field("active", true)?
        .field("retries", 3)?
        .to_code()?;
    assert_eq!(
        code,
        "class User(pydantic.BaseModel, Mixin):\n    table = \"users\"\n    id: int\n    active = True\n    retries = 3\n"
    );
    Ok(())
}

#[test]
fn test_declare_without_value_or_type() -> Result<()> {
    let err = ClassDef::new("Cls1")?.declare("f1", None, None).unwrap_err();
    assert!(matches!(err, Error::UnimplementedFeature(_)));
    Ok(())
}

#[test]
fn test_base_with_empty_segment() -> Result<()> {
    let err = ClassDef::new("Cls1")?.base("pydantic..BaseModel").unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }));
    Ok(())
}

#[test]
fn test_empty_names_fail_when_building() -> Result<()> {
    assert!(matches!(
        ClassDef::new("").unwrap_err(),
        Error::InvalidIdentifier { .. }
    ));
    assert!(matches!(
        ClassDef::new("Cls1")?.field("", "v1").unwrap_err(),
        Error::InvalidIdentifier { .. }
    ));
    Ok(())
}

#[test]
fn test_declare_selects_form() -> Result<()> {
    let code = ClassDef::new("Cls1")?
        .declare("f1", Some(Value::from("v1")), None)?
        .declare("f2", None, Some(Annotation::new("int")))?
        .to_code()?;
    assert_eq!(code, "class Cls1:\n    f1 = \"v1\"\n    f2: int\n");
    Ok(())
}
