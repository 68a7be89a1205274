use std::fs;
use std::path::PathBuf;

use csv::Writer;
use tracing::debug;

use crate::sink::{Sink, SinkError};

/// File-backed sink: every table is one CSV file inside the dataset
/// directory, truncated and fully rewritten on each load.
pub struct CsvFileSink {
    dataset_dir: PathBuf,
}

impl CsvFileSink {
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
        }
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dataset_dir.join(format!("{table}.csv"))
    }
}

impl Sink for CsvFileSink {
    fn replace_table(
        &self,
        table: &str,
        header: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dataset_dir)?;

        let path = self.table_path(table);
        let mut writer = Writer::from_path(&path)?;

        writer.write_record(header)?;

        for row in rows {
            writer.write_record(row)?;
        }

        writer.flush()?;

        debug!("wrote {} rows to table [{}] at {}", rows.len(), table, path.display());

        Ok(())
    }
}
