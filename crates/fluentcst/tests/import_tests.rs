use fluentcst::{Error, FluentNode, ImportFrom, Result};
use pretty_assertions::assert_eq;

#[test]
fn test_import_from() -> Result<()> {
    let node = ImportFrom::new("lib.module.inner", "Type")?;
    assert_eq!(node.to_code()?, "from lib.module.inner import Type\n");

    let node = ImportFrom::new("lib", "Type")?;
    assert_eq!(node.to_code()?, "from lib import Type\n");
    Ok(())
}

#[test]
fn test_subscripted_module_is_rejected() {
    let err = ImportFrom::new("lib.mods[0]", "Type").unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }));
}
