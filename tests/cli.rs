mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use common::write_orders_xlsx;

#[test]
fn creates_the_split_workbook() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("orders.xlsx");
    write_orders_xlsx(&input)?;

    Command::cargo_bin("excel-segregate")?
        .arg(&input)
        .args(["--header-rows", "2", "--column", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("orders_segregated.xlsx"));

    assert!(dir.path().join("orders_segregated.xlsx").exists());
    Ok(())
}

#[test]
fn dry_run_prints_json_and_writes_nothing() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("orders.xlsx");
    write_orders_xlsx(&input)?;

    Command::cargo_bin("excel-segregate")?
        .arg(&input)
        .args(["-r", "2", "-c", "customer code", "--dry-run", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sheet_name\": \"1001\""))
        .stdout(predicate::str::contains("\"skipped_blank\": 2"));

    assert!(!dir.path().join("orders_segregated.xlsx").exists());
    Ok(())
}

#[test]
fn unresolvable_column_fails_with_a_message() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("orders.xlsx");
    write_orders_xlsx(&input)?;

    Command::cargo_bin("excel-segregate")?
        .arg(&input)
        .args(["-r", "2", "-c", "Region"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not resolve column 'Region'"));

    assert!(!dir.path().join("orders_segregated.xlsx").exists());
    Ok(())
}
