//! Input sources: stdin, delimited (CSV) files and JSON documents.
//!
//! Readers only split the source into [`Record`]s; parsing happens in the
//! [`super::ParsePool`]. A source that cannot be read at all is a
//! [`PipelineError`], a bad record is not.

use crate::error::PipelineError;
use serde::Deserialize;
use std::io::{BufRead, IsTerminal};
use std::path::{Path, PathBuf};

/// One candidate notation and where it came from (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub text: String,
}

impl Record {
    pub fn new(line: usize, text: impl Into<String>) -> Record {
        Record {
            line,
            text: text.into(),
        }
    }
}

/// Where records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Csv(PathBuf),
    Json(PathBuf),
}

impl Source {
    /// Pick a source from the optional input argument.
    ///
    /// No argument or `-` reads stdin; otherwise the file suffix decides.
    pub fn from_arg(arg: Option<&str>) -> Result<Source, PipelineError> {
        match arg {
            None | Some("-") | Some("stdin") => Ok(Source::Stdin),
            Some(path) if has_extension(path, "csv") => Ok(Source::Csv(PathBuf::from(path))),
            Some(path) if has_extension(path, "json") => Ok(Source::Json(PathBuf::from(path))),
            Some(other) => Err(PipelineError::UnsupportedSource(other.to_string())),
        }
    }

    /// Read every record from this source.
    pub fn read_records(&self) -> Result<Vec<Record>, PipelineError> {
        match self {
            Source::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    eprintln!(
                        "Enter CIDR blocks, one per line. Press Ctrl+D (Linux/Mac) or Ctrl+Z (Windows) to end input:"
                    );
                }
                read_lines(stdin.lock(), Path::new("<stdin>"))
            }
            Source::Csv(path) => {
                let file = open(path)?;
                read_csv(std::io::BufReader::new(file), path)
            }
            Source::Json(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_json_records(&json, path)
            }
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "stdin"),
            Source::Csv(path) => write!(f, "csv:{}", path.display()),
            Source::Json(path) => write!(f, "json:{}", path.display()),
        }
    }
}

fn has_extension(path: &str, ext: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn open(path: &Path) -> Result<std::fs::File, PipelineError> {
    std::fs::File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One record per non-blank line.
pub fn read_lines<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Record>, PipelineError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = line.trim();
        if !text.is_empty() {
            records.push(Record::new(i + 1, text));
        }
    }
    log::info!("Read {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// One record per line, taken from the first comma-separated field.
pub fn read_csv<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Record>, PipelineError> {
    let records: Vec<Record> = read_lines(reader, path)?
        .into_iter()
        .filter_map(|record| {
            let field = first_field(&record.text);
            (!field.is_empty()).then(|| Record::new(record.line, field))
        })
        .collect();
    log::debug!("Kept {} CSV record(s) with a first field", records.len());
    Ok(records)
}

fn first_field(line: &str) -> &str {
    line.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"')
        .trim()
}

/// The `{"cidrs": [..]}` layout.
#[derive(Deserialize)]
struct JsonObject {
    cidrs: Vec<String>,
}

type JsonError = serde_path_to_error::Error<serde_json::Error>;

/// Records from a JSON document; array positions become 1-based line numbers.
///
/// Accepted layouts: `["10.0.0.0/8", ..]` or `{"cidrs": [..]}`. The layout is
/// picked from the document's shape, so decode errors keep their JSON path
/// (e.g. `cidrs[1]`).
pub fn parse_json_records(json: &str, path: &Path) -> Result<Vec<Record>, PipelineError> {
    let json_error = |source: JsonError| PipelineError::Json {
        path: path.to_path_buf(),
        source,
    };
    let de = &mut serde_json::Deserializer::from_str(json);
    let value: serde_json::Value = serde_path_to_error::deserialize(de).map_err(json_error)?;
    let entries: Vec<String> = if value.is_object() {
        let object: JsonObject = serde_path_to_error::deserialize(value).map_err(json_error)?;
        object.cidrs
    } else {
        serde_path_to_error::deserialize(value).map_err(json_error)?
    };
    let records: Vec<Record> = entries
        .into_iter()
        .enumerate()
        .map(|(i, text)| Record::new(i + 1, text.trim()))
        .collect();
    log::info!("Read {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
