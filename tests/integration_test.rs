use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

fn run_job(source: &Path, dataset: &Path) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-transform");

    let output = Command::new(binary_path)
        .env("SOURCE_CSV_PATH", source)
        .env("DEST_DATASET_DIR", dataset)
        .env("DEST_TABLE_NAME", "transactions_clean")
        .env("DEST_ERROR_TABLE_NAME", "transactions_error")
        .output()?;

    Ok(output)
}

fn write_source(dir: &TempDir, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join("transactions.csv");
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_cli_transforms_and_loads_mixed_input() -> Result<()> {
    let workdir = TempDir::new()?;
    let source = write_source(
        &workdir,
        "account_id,transaction_date,amount\n\
         2,2023-01-01,200\n\
         1,2023-01-01,100\n\
         1,2023-01-02 10:30:00,-50\n\
         3,not-a-date,10\n\
         2,2023-01-02,abc\n",
    )?;
    let dataset = workdir.path().join("warehouse");

    let output = run_job(&source, &dataset)?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("2 error rows routed to table [transactions_error]."));
    assert!(stdout.contains("Transformation and load completed."));

    let clean = fs::read_to_string(dataset.join("transactions_clean.csv"))?;
    let mut lines = clean.lines();
    assert_eq!(lines.next(), Some("account_id,transaction_date,amount,balance"));
    assert_eq!(lines.next(), Some("1,2023-01-01 00:00:00,100,100"));
    assert_eq!(lines.next(), Some("1,2023-01-02 10:30:00,-50,50"));
    assert_eq!(lines.next(), Some("2,2023-01-01 00:00:00,200,200"));
    assert_eq!(lines.next(), None);

    let errors = fs::read_to_string(dataset.join("transactions_error.csv"))?;
    let mut lines = errors.lines();
    assert_eq!(lines.next(), Some("account_id,transaction_date,amount"));
    assert_eq!(lines.next(), Some("2,2023-01-02,"));
    assert_eq!(lines.next(), Some("3,not-a-date,10"));
    assert_eq!(lines.next(), None);

    Ok(())
}

#[test]
fn test_cli_skips_error_table_when_all_rows_are_valid() -> Result<()> {
    let workdir = TempDir::new()?;
    let source = write_source(
        &workdir,
        "account_id,transaction_date,amount\n\
         1,2023-01-01,100.21\n\
         1,2023-01-02,error\n\
         2,2023-01-01,75.2\n",
    )?;
    let dataset = workdir.path().join("warehouse");

    let output = run_job(&source, &dataset)?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("All rows processed successfully."));
    assert!(stdout.contains("Transformation and load completed."));

    let clean = fs::read_to_string(dataset.join("transactions_clean.csv"))?;
    assert!(clean.contains("1,2023-01-02 00:00:00,0,100.21"));

    assert!(!dataset.join("transactions_error.csv").exists());

    Ok(())
}

#[test]
fn test_cli_fails_without_writing_when_source_is_missing() -> Result<()> {
    let workdir = TempDir::new()?;
    let dataset = workdir.path().join("warehouse");

    let output = run_job(&workdir.path().join("missing.csv"), &dataset)?;

    assert!(!output.status.success());
    assert!(!dataset.exists());

    Ok(())
}

#[test]
fn test_cli_source_argument_overrides_environment() -> Result<()> {
    let workdir = TempDir::new()?;
    let source = write_source(
        &workdir,
        "account_id,transaction_date,amount\n\
         1,2023-01-01,100\n",
    )?;
    let dataset = workdir.path().join("warehouse");

    let binary_path = env!("CARGO_BIN_EXE_transaction-transform");
    let output = Command::new(binary_path)
        .arg(&source)
        .env("SOURCE_CSV_PATH", workdir.path().join("nonexistent.csv"))
        .env("DEST_DATASET_DIR", &dataset)
        .env("DEST_TABLE_NAME", "transactions_clean")
        .env("DEST_ERROR_TABLE_NAME", "transactions_error")
        .output()?;

    assert!(output.status.success());
    assert!(dataset.join("transactions_clean.csv").exists());

    Ok(())
}
