use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::config::JobConfig;
use crate::models::{BalancedTransaction, ErrorRecord, RawTransaction};
use crate::pipeline::{compute_running_balance, sanitize_amounts, sanitize_dates};
use crate::sink::Sink;

/// Outcome of one batch run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub total_rows: usize,
    pub clean_rows: usize,
    pub error_rows: usize,
}

/// Batch transformation engine: reads the source CSV, runs the two sanitizer
/// stages and the balance derivation, and loads the results into the sink.
pub struct BatchEngine<S: Sink> {
    sink: S,
}

impl<S: Sink> BatchEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Runs the full transform-and-load job described by `config`.
    ///
    /// A source failure aborts before anything is written. The cleaned table
    /// is always loaded; the error table only when at least one row was
    /// rejected.
    pub fn run(&self, config: &JobConfig) -> Result<RunSummary> {
        let rows = read_transactions(&config.source_path)?;
        let total_rows = rows.len();
        info!("read {} rows from {}", total_rows, config.source_path.display());

        let (numeric, amount_errors) = sanitize_amounts(rows);
        let (clean, date_errors) = sanitize_dates(numeric);
        let balanced = compute_running_balance(clean);

        self.load_clean_table(&config.table_name, &balanced)?;

        // Amount rejects come first in the error table, then date rejects.
        let mut errors = amount_errors;
        errors.extend(date_errors);

        if !errors.is_empty() {
            self.load_error_table(&config.error_table_name, &errors)?;
        }

        Ok(RunSummary {
            total_rows,
            clean_rows: balanced.len(),
            error_rows: errors.len(),
        })
    }

    fn load_clean_table(&self, table: &str, rows: &[BalancedTransaction]) -> Result<()> {
        let header = BalancedTransaction::csv_header(rows);
        let records: Vec<Vec<String>> = rows.iter().map(BalancedTransaction::csv_record).collect();

        self.sink
            .replace_table(table, &header, &records)
            .with_context(|| format!("loading cleaned rows into table [{table}]"))?;

        info!("loaded {} cleaned rows into table [{}]", rows.len(), table);

        Ok(())
    }

    fn load_error_table(&self, table: &str, rows: &[ErrorRecord]) -> Result<()> {
        let header = ErrorRecord::csv_header(rows);
        let records: Vec<Vec<String>> = rows.iter().map(ErrorRecord::csv_record).collect();

        self.sink
            .replace_table(table, &header, &records)
            .with_context(|| format!("loading error rows into table [{table}]"))?;

        info!("loaded {} error rows into table [{}]", rows.len(), table);

        Ok(())
    }
}

fn read_transactions(path: &Path) -> Result<Vec<RawTransaction>> {
    let file = File::open(path)
        .with_context(|| format!("opening source CSV at {}", path.display()))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();

    for result in reader.deserialize::<RawTransaction>() {
        let row = result.with_context(|| format!("reading source CSV at {}", path.display()))?;
        rows.push(row);
    }

    Ok(rows)
}
