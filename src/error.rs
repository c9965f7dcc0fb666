//! Error types for cidr-converter.
//!
//! [`BlockError`] covers a single bad record or query and is recovered from;
//! [`PipelineError`] means the input source itself is unusable and ends the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid octet: {0}")]
    InvalidOctet(String),

    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Non-contiguous wildcard: {0}")]
    NonContiguousWildcard(String),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding JSON {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },

    #[error("Error encoding JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Unsupported input source: {0}")]
    UnsupportedSource(String),

    #[error("Parse worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("No valid CIDR records in input")]
    NoValidRecords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_error_display() {
        assert_eq!(
            BlockError::InvalidOctet("300".to_string()).to_string(),
            "Invalid octet: 300"
        );
        assert_eq!(
            BlockError::NonContiguousWildcard("192.*.1.*".to_string()).to_string(),
            "Non-contiguous wildcard: 192.*.1.*"
        );
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Error reading missing.csv: not found");
        assert_eq!(
            PipelineError::UnsupportedSource("list.txt".to_string()).to_string(),
            "Unsupported input source: list.txt"
        );
    }

    #[test]
    fn test_encode_error_converts() {
        // JSON object keys must be strings, so a tuple key cannot be encoded.
        let mut bad = std::collections::BTreeMap::new();
        bad.insert((1u8, 2u8), 3u8);
        let err: PipelineError = serde_json::to_string(&bad).unwrap_err().into();
        assert!(matches!(err, PipelineError::Encode(_)));
        assert!(err.to_string().starts_with("Error encoding JSON: "));
    }
}
