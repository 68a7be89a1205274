mod csv_sink;
mod errors;

pub use csv_sink::CsvFileSink;
pub use errors::SinkError;

/// Destination that durably persists a dataset under a table name, replacing
/// the table's prior contents on every load. The header is the schema,
/// derived from the dataset at write time.
pub trait Sink {
    fn replace_table(
        &self,
        table: &str,
        header: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), SinkError>;
}
