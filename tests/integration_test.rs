//! Integration tests for cidr-converter
//!
//! These tests run the complete workflow from reading an input source to the
//! normalised, rendered block set.

use cidr_converter::{
    aggregate, contains, dedup,
    input::{ParsePool, Source},
    merge, normalize, output, parse_block, render, Block, BlockError, PipelineError,
};
use std::path::PathBuf;

fn blocks(items: &[&str]) -> Vec<Block> {
    items
        .iter()
        .flat_map(|s| parse_block(s).expect("valid test block"))
        .collect()
}

#[tokio::test]
async fn test_full_workflow_with_json() {
    let source = Source::from_arg(Some("src/tests/test_data/cidrs_01.json")).unwrap();
    let records = source.read_records().expect("Failed to read JSON input");
    assert_eq!(records.len(), 9, "Expected 9 records in test data");

    let outcome = ParsePool::new(3).parse_all(records).await.unwrap();
    assert_eq!(outcome.blocks.len(), 7);
    let rejected: Vec<(usize, BlockError)> = outcome
        .failures
        .iter()
        .map(|f| (f.line, f.error.clone()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            (8, BlockError::NonContiguousWildcard("192.*.1.*".to_string())),
            (9, BlockError::InvalidFormat("not-a-cidr".to_string())),
        ]
    );

    let set = normalize(outcome.blocks);
    assert_eq!(
        render(&set),
        vec!["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/22"]
    );
}

#[tokio::test]
async fn test_full_workflow_with_csv() {
    let source = Source::from_arg(Some("src/tests/test_data/cidrs_02.csv")).unwrap();
    let records = source.read_records().expect("Failed to read CSV input");
    let outcome = ParsePool::new(2).parse_all(records).await.unwrap();

    let lines: Vec<usize> = outcome.failures.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![1, 8, 9], "header and two broken rows rejected");

    let set = normalize(outcome.blocks);
    assert_eq!(
        render(&set),
        vec!["8.8.8.8/32", "10.10.0.0/23", "10.10.3.0/24", "192.168.0.0/23"]
    );
}

#[tokio::test]
async fn test_plain_json_array_to_file() {
    let source = Source::Json(PathBuf::from("src/tests/test_data/cidrs_03.json"));
    let outcome = ParsePool::default()
        .parse_all(source.read_records().unwrap())
        .await
        .unwrap();
    let set = normalize(outcome.blocks);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("merged_cidrs.json");
    output::save_to_json(&path, &set).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[\n  \"192.168.0.0/23\"\n]\n"
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let source = Source::from_arg(Some("src/tests/test_data/nope.json")).unwrap();
    assert!(matches!(
        source.read_records(),
        Err(PipelineError::Io { .. })
    ));
}

#[test]
fn test_stage_by_stage() {
    let raw = blocks(&[
        "192.168.1.0/24",
        "192.168.2.0/24",
        "192.168.1.128/25",
        "192.168.1.0/24",
        "192.168.3.0/24",
    ]);

    let deduped = dedup(raw);
    assert_eq!(deduped.len(), 4);

    let merged = merge(deduped);
    assert_eq!(
        render(&merged),
        vec!["192.168.1.0/24", "192.168.2.0/24", "192.168.3.0/24"]
    );

    // 1.0/24 and 2.0/24 touch but are not siblings; 2.0/24 and 3.0/24 are.
    let aggregated = aggregate(merged);
    assert_eq!(render(&aggregated), vec!["192.168.1.0/24", "192.168.2.0/23"]);
}

#[test]
fn test_membership_after_normalize() {
    let set = normalize(blocks(&["192.168.0.0/24", "10.0.0.0/8", "10.20.0.0/16"]));
    assert_eq!(
        contains(&set, "192.168.0.5").unwrap(),
        blocks(&["192.168.0.0/24"])
    );
    assert_eq!(contains(&set, "10.20.1.1").unwrap(), blocks(&["10.0.0.0/8"]));
    assert!(contains(&set, "172.16.0.1").unwrap().is_empty());
    assert_eq!(
        contains(&set, "172.16.0"),
        Err(BlockError::InvalidAddress("172.16.0".to_string()))
    );
}

#[test]
fn test_sorted_order() {
    let set = normalize(blocks(&[
        "203.0.113.0/24",
        "8.8.8.8",
        "10.0.0.0/8",
        "10.*.*.*",
        "100.64.0.0/10",
    ]));
    let rendered = render(&set);
    assert_eq!(
        rendered,
        vec!["8.8.8.8/32", "10.0.0.0/8", "100.64.0.0/10", "203.0.113.0/24"]
    );
    for pair in set.as_slice().windows(2) {
        assert!(pair[0] < pair[1], "Blocks should be sorted: {:?}", pair);
    }
}
