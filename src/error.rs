use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

/// Failure of the transport layer itself, before a statistic exists.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("transport i/o: {0}")]
    Io(#[from] io::Error),
    #[error("worker task failed: {0}")]
    Task(#[from] JoinError),
}

/// A single fetch failed. Carries enough context to report the row.
#[derive(Debug, Error)]
#[error("fetch #{index} ({url}) failed: {source}")]
pub struct FetchError {
    pub index: usize,
    pub url: String,
    #[source]
    pub source: TransportError,
}

#[derive(Debug, Error)]
#[error("cannot aggregate an empty batch")]
pub struct EmptyBatchError;

#[derive(Debug, Error)]
#[error("failed to load url list from {}: {kind}", path.display())]
pub struct SourceLoadError {
    pub path: PathBuf,
    #[source]
    pub kind: SourceLoadKind,
}

#[derive(Debug, Error)]
pub enum SourceLoadKind {
    #[error("read error: {0}")]
    Read(#[from] io::Error),
    #[error("line {line}: record has no url field")]
    MissingField { line: usize },
    #[error("line {line}: invalid host {host:?}: {source}")]
    InvalidHost {
        line: usize,
        host: String,
        source: url::ParseError,
    },
}
