use fluentcst::{Assign, ClassDef, FluentNode, ImportFrom, Module, Result};
use pretty_assertions::assert_eq;

#[test]
fn test_multiple_classes() -> Result<()> {
    let module = Module::new()
        .add(ClassDef::new("Cls1")?.field("f1", "v1")?)
        .add(ClassDef::new("Cls2")?.field("f1", "v1")?);

    assert_eq!(
        module.to_code()?,
        "class Cls1:\n    f1 = \"v1\"\nclass Cls2:\n    f1 = \"v1\"\n"
    );
    Ok(())
}

#[test]
fn test_require_import() -> Result<()> {
    let module = Module::new()
        .require_import("Error", "lib.types.exceptions")?
        .add(ClassDef::new("Cls1")?);

    assert_eq!(
        module.to_code()?,
        "from lib.types.exceptions import Error\nclass Cls1:\n    pass\n"
    );
    Ok(())
}

#[test]
fn test_duplicate_imports_collapse() -> Result<()> {
    let module = Module::new()
        .require_import("Error", "lib.types")?
        .require_import("Warning", "lib.types")?
        .import(ImportFrom::new("lib.types", "Error")?)
        .add(Assign::new("LEVEL", 3)?);

    assert_eq!(
        module.to_code()?,
        "from lib.types import Error\nfrom lib.types import Warning\nLEVEL = 3\n"
    );
    Ok(())
}

#[test]
fn test_imports_render_before_statements() -> Result<()> {
    let module = Module::new()
        .add(ClassDef::new("Cls1")?)
        .require_import("Base", "models")?;

    assert_eq!(module.to_code()?, "from models import Base\nclass Cls1:\n    pass\n");
    Ok(())
}

#[test]
fn test_render_is_repeatable() -> Result<()> {
    let module = Module::new()
        .require_import("B", "b")?
        .require_import("A", "a")?;
    let first = module.to_code()?;
    assert_eq!(first, module.to_code()?);
    assert_eq!(first, "from b import B\nfrom a import A\n");
    Ok(())
}

#[test]
fn test_empty_module() -> Result<()> {
    assert_eq!(Module::new().to_code()?, "");
    Ok(())
}
