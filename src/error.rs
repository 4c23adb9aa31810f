use std::path::PathBuf;

use thiserror::Error;

/// Errors the pipeline can abort with.
///
/// No stage recovers from any of these; the first one aborts the whole run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no such input file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed input: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        // Unwrap I/O failures so they land in the Io variant; everything
        // else the csv crate reports is a malformed-input problem.
        let msg = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            _ => Error::Parse(msg),
        }
    }
}
