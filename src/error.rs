use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Dataset or result file could not be opened.
    #[error("unable to read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A transaction line held something other than integer item labels.
    #[error("line {line}: invalid item {token:?}")]
    Format { line: usize, token: String },
    #[error("minimum frequency must be greater than 0, got {0}")]
    InvalidMinFrequency(f64),
    /// A line of a result listing didn't match `[a, b, ...] (support)`.
    #[error("line {line}: malformed itemset line {text:?}")]
    MalformedResultLine { line: usize, text: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// The miner executable used for benchmarking could not be started.
    #[error("unable to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Open {
            path: path.into(),
            source,
        }
    }
}
