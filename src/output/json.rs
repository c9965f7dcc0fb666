//! JSON output of a normalised block set.

use crate::error::PipelineError;
use crate::models::BlockSet;
use std::path::Path;

/// Pretty-printed JSON array of canonical blocks, two-space indent,
/// trailing newline.
pub fn to_json_string(set: &BlockSet) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(set)?;
    json.push('\n');
    Ok(json)
}

/// Write the set to `path` as JSON.
pub fn save_to_json(path: &Path, set: &BlockSet) -> Result<(), PipelineError> {
    log::info!("Writing {} block(s) to {}", set.len(), path.display());
    let json = to_json_string(set)?;
    std::fs::write(path, json).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}
