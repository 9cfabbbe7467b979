//! Catalog loading from YAML fixture files, and filling a widget from them.

use std::{io::Write, path::PathBuf};

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use trolley::prelude::*;

fn demo_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalog")
        .join("demo.yml")
}

#[test]
fn demo_catalog_loads() -> TestResult {
    let catalog = Catalog::from_path(demo_catalog_path())?;

    assert_eq!(catalog.currency(), GBP);
    assert_eq!(catalog.len(), 6);
    assert!(catalog.keys().contains(&"apple"));

    Ok(())
}

#[test]
fn catalog_from_temp_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    writeln!(
        file,
        "products:\n  tea:\n    name: Green Tea\n    price: 3.49 GBP"
    )?;

    let catalog = Catalog::from_path(file.path())?;
    let tea = catalog.product("tea").ok_or("missing tea")?;

    assert_eq!(tea.price, Money::from_minor(349, GBP));

    Ok(())
}

#[test]
fn missing_catalog_file_is_io_error() -> TestResult {
    let dir = tempfile::tempdir()?;

    let result = Catalog::from_path(dir.path().join("missing.yml"));

    assert!(matches!(result, Err(CatalogError::Io(_))));

    Ok(())
}

#[test]
fn catalog_descriptors_fill_a_widget() -> TestResult {
    let catalog = Catalog::from_path(demo_catalog_path())?;
    let mut widget = CartWidget::attach(catalog.currency());

    widget.handle(CartEvent::Add(catalog.descriptor("apple")?))?;
    widget.handle(CartEvent::Add(catalog.descriptor("apple")?))?;
    let view = widget.handle(CartEvent::Add(catalog.descriptor("bread")?))?;

    let names: Vec<&str> = view.lines.iter().map(|line| line.name.as_str()).collect();

    assert_eq!(names, vec!["Apple", "Sourdough Loaf"]);
    assert_eq!(view.total, Money::from_minor(370, GBP).to_string());

    Ok(())
}
