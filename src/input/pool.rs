//! Parse worker pool.
//!
//! Records are split into one chunk per worker. Every worker parses its own
//! chunk into a local [`ParseOutcome`]; the outcomes are joined in chunk order
//! once all workers finish. Nothing is shared between workers, and nothing
//! downstream runs before the join, because dedup, merge and aggregate need
//! the complete batch.

use super::Record;
use crate::error::{BlockError, PipelineError};
use crate::models::Block;
use crate::parser::parse_block;
use futures::future::join_all;

/// A record that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub line: usize,
    pub text: String,
    pub error: BlockError,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: '{}' -> {}", self.line, self.text, self.error)
    }
}

/// Parsed blocks plus the records that were skipped.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub blocks: Vec<Block>,
    pub failures: Vec<RecordError>,
}

impl ParseOutcome {
    fn extend(&mut self, other: ParseOutcome) {
        self.blocks.extend(other.blocks);
        self.failures.extend(other.failures);
    }
}

/// Fans record parsing out over a fixed number of blocking tasks.
#[derive(Debug, Clone, Copy)]
pub struct ParsePool {
    workers: usize,
}

impl ParsePool {
    pub fn new(workers: usize) -> ParsePool {
        ParsePool {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Parse all records. Only a crashed worker is an error; bad records end
    /// up in [`ParseOutcome::failures`], ordered by line.
    pub async fn parse_all(&self, records: Vec<Record>) -> Result<ParseOutcome, PipelineError> {
        if records.is_empty() {
            return Ok(ParseOutcome::default());
        }
        let chunk_size = records.len().div_ceil(self.workers);
        log::debug!(
            "ParsePool: {} record(s), {} worker(s), chunk size {}",
            records.len(),
            self.workers,
            chunk_size
        );

        let mut chunks: Vec<Vec<Record>> = Vec::with_capacity(self.workers);
        let mut rest = records.into_iter().peekable();
        while rest.peek().is_some() {
            chunks.push(rest.by_ref().take(chunk_size).collect());
        }

        let handles = chunks
            .into_iter()
            .map(|chunk| tokio::task::spawn_blocking(move || parse_chunk(chunk)));

        let mut outcome = ParseOutcome::default();
        for joined in join_all(handles).await {
            outcome.extend(joined?);
        }
        outcome.failures.sort_by_key(|failure| failure.line);

        log::info!(
            "Parsed {} block(s), {} record(s) rejected",
            outcome.blocks.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }
}

impl Default for ParsePool {
    fn default() -> Self {
        ParsePool::new(1)
    }
}

/// Parse one chunk; runs inside a worker.
pub fn parse_chunk(chunk: Vec<Record>) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for record in chunk {
        match parse_block(&record.text) {
            Ok(blocks) => outcome.blocks.extend(blocks),
            Err(error) => {
                log::warn!("Skipping line {} '{}': {}", record.line, record.text, error);
                outcome.failures.push(RecordError {
                    line: record.line,
                    text: record.text,
                    error,
                });
            }
        }
    }
    outcome
}
