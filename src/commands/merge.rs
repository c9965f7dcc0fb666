//! `merge`: normalise the input and write the result as JSON.

use super::load_normalized;
use crate::config::Config;
use crate::input::Source;
use crate::output::{print_block_table, save_to_json, to_json_string};
use std::error::Error;

pub async fn run(
    input: Option<&str>,
    config: &Config,
    to_stdout: bool,
    table: bool,
) -> Result<(), Box<dyn Error>> {
    let source = Source::from_arg(input)?;
    let set = load_normalized(&source, config).await?;

    if table {
        print_block_table(&set);
    }

    if to_stdout {
        print!("{}", to_json_string(&set)?);
    } else {
        save_to_json(&config.output_file, &set)?;
        println!(
            "Merged CIDR blocks saved to {}",
            config.output_file.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_merge_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            workers: 2,
            output_file: dir.path().join("merged.json"),
        };
        run(
            Some("src/tests/test_data/cidrs_01.json"),
            &config,
            false,
            false,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(&config.output_file).unwrap();
        let blocks: Vec<String> = serde_json::from_str(&written).unwrap();
        assert_eq!(blocks, vec!["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/22"]);
    }

    #[tokio::test]
    async fn test_merge_unsupported_source() {
        let config = Config::default();
        let err = run(Some("ranges.txt"), &config, true, false).await.unwrap_err();
        assert_eq!(err.to_string(), "Unsupported input source: ranges.txt");
    }
}
