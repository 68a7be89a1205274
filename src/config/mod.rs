#[cfg(test)]
mod tests;

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const SOURCE_CSV_PATH: &str = "SOURCE_CSV_PATH";
const DEST_DATASET_DIR: &str = "DEST_DATASET_DIR";
const DEST_TABLE_NAME: &str = "DEST_TABLE_NAME";
const DEST_ERROR_TABLE_NAME: &str = "DEST_ERROR_TABLE_NAME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: missing required environment variable [{0}]")]
    MissingVar(&'static str),
}

/// Everything one job invocation needs to know: where the source CSV lives,
/// which dataset directory to load into, and the names of the cleaned and
/// error tables.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub source_path: PathBuf,
    pub dataset_dir: PathBuf,
    pub table_name: String,
    pub error_table_name: String,
}

impl JobConfig {
    /// Builds the configuration from the process environment. The source
    /// path and dataset directory are required; the table names fall back to
    /// defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        Ok(Self {
            source_path: PathBuf::from(require(SOURCE_CSV_PATH)?),
            dataset_dir: PathBuf::from(require(DEST_DATASET_DIR)?),
            table_name: lookup(DEST_TABLE_NAME)
                .unwrap_or_else(|| "transactions".to_string()),
            error_table_name: lookup(DEST_ERROR_TABLE_NAME)
                .unwrap_or_else(|| "transaction_errors".to_string()),
        })
    }
}
