use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Sink error: {0}")]
    Io(#[from] io::Error),
    #[error("Sink error: {0}")]
    Csv(#[from] csv::Error),
}
