//! `check`: look an address up in the normalised input.

use super::load_normalized;
use crate::config::Config;
use crate::input::Source;
use crate::models::Block;
use crate::processing::{contains_addr, parse_address};
use itertools::Itertools;
use std::error::Error;
use std::net::Ipv4Addr;

pub async fn run(address: &str, input: Option<&str>, config: &Config) -> Result<(), Box<dyn Error>> {
    // Validate the query before reading any input.
    let addr = parse_address(address)?;
    let source = Source::from_arg(input)?;
    let set = load_normalized(&source, config).await?;

    let matches = contains_addr(&set, addr);
    log::debug!("check {addr}: {} match(es) in {} block(s)", matches.len(), set.len());
    println!("{}", describe(addr, &matches));
    Ok(())
}

fn describe(addr: Ipv4Addr, matches: &[Block]) -> String {
    if matches.is_empty() {
        format!("{addr} not found")
    } else {
        format!("{addr} is in {}", matches.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let addr = Ipv4Addr::new(192, 168, 0, 5);
        assert_eq!(describe(addr, &[]), "192.168.0.5 not found");
        let block: Block = "192.168.0.0/24".parse().unwrap();
        assert_eq!(describe(addr, &[block]), "192.168.0.5 is in 192.168.0.0/24");
    }

    #[tokio::test]
    async fn test_check_invalid_address() {
        let err = run("10.0.0", None, &Config::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid address: 10.0.0");
    }

    #[tokio::test]
    async fn test_check_against_file() {
        run(
            "172.16.5.1",
            Some("src/tests/test_data/cidrs_01.json"),
            &Config::default(),
        )
        .await
        .unwrap();
    }
}
