use std::path::PathBuf;

use super::*;

fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[test]
fn test_all_variables_are_read() {
    let config = JobConfig::from_lookup(lookup_from(&[
        ("SOURCE_CSV_PATH", "/data/transactions.csv"),
        ("DEST_DATASET_DIR", "/data/warehouse"),
        ("DEST_TABLE_NAME", "txns"),
        ("DEST_ERROR_TABLE_NAME", "txn_errors"),
    ]))
    .expect("config should parse");

    assert_eq!(config.source_path, PathBuf::from("/data/transactions.csv"));
    assert_eq!(config.dataset_dir, PathBuf::from("/data/warehouse"));
    assert_eq!(config.table_name, "txns");
    assert_eq!(config.error_table_name, "txn_errors");
}

#[test]
fn test_table_names_fall_back_to_defaults() {
    let config = JobConfig::from_lookup(lookup_from(&[
        ("SOURCE_CSV_PATH", "/data/transactions.csv"),
        ("DEST_DATASET_DIR", "/data/warehouse"),
    ]))
    .expect("config should parse");

    assert_eq!(config.table_name, "transactions");
    assert_eq!(config.error_table_name, "transaction_errors");
}

#[test]
fn test_missing_source_path_is_an_error() {
    let result = JobConfig::from_lookup(lookup_from(&[("DEST_DATASET_DIR", "/data/warehouse")]));

    assert!(matches!(result, Err(ConfigError::MissingVar("SOURCE_CSV_PATH"))));
}

#[test]
fn test_missing_dataset_dir_is_an_error() {
    let result = JobConfig::from_lookup(lookup_from(&[("SOURCE_CSV_PATH", "/data/transactions.csv")]));

    assert!(matches!(result, Err(ConfigError::MissingVar("DEST_DATASET_DIR"))));
}
