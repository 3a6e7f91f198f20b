use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO Error: {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    #[error("Missing statistic `{statistic}` for document: {label}")]
    MissingStatistic { statistic: String, label: String },

    #[error("The corpus does not contain any documents")]
    EmptyCorpus,

    #[error("Render Error: {0}")]
    RenderError(String),

    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization Error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::IoError {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
