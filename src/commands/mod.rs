//! Command implementations.

pub mod check;
pub mod merge;

use crate::config::Config;
use crate::error::PipelineError;
use crate::input::{ParsePool, Source};
use crate::models::BlockSet;
use crate::output::print_failures;
use crate::processing::normalize;

/// Read, parse and normalise every record of `source`.
///
/// Rejected records are reported on stderr and skipped. Fails when the source
/// cannot be read or when no record parses.
pub async fn load_normalized(source: &Source, config: &Config) -> Result<BlockSet, PipelineError> {
    log::info!("Reading records from {source}");
    let records = source.read_records()?;
    let total = records.len();

    let outcome = ParsePool::new(config.workers).parse_all(records).await?;
    print_failures(&outcome.failures, total);

    if outcome.blocks.is_empty() {
        log::error!("No valid records in {source}");
        return Err(PipelineError::NoValidRecords);
    }
    Ok(normalize(outcome.blocks))
}
