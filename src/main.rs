//! Citegrade CLI entrypoint.
//!
//! `citegrade <payload-file> <config-file>` grades one sample and prints the
//! float. `-` as the payload path reads the producer output from stdin.
//! `--explain` additionally prints the first violated rule to stderr, for
//! debugging failing samples outside the harness.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use citegrade::{diagnose_row, grade_row};

const USAGE: &str = "usage: citegrade [--explain] <payload-file|-> <config-file>";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let explain = args.iter().any(|a| a == "--explain");
    args.retain(|a| a != "--explain");

    let [payload_path, config_path] = args.as_slice() else {
        anyhow::bail!("{USAGE}");
    };

    let raw = read_payload(payload_path)?;
    let row = read_config_row(config_path)?;

    if explain {
        if let Err(failure) = diagnose_row(&raw, &row) {
            eprintln!("fail: {failure}");
        }
    }

    println!("{:.1}", grade_row(&raw, &row));
    Ok(())
}

fn read_payload(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read payload from stdin")?;
        return Ok(raw);
    }

    fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read payload file '{path}'"))
}

fn read_config_row(path: &str) -> anyhow::Result<Value> {
    let text = fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read config file '{path}'"))?;

    // An unreadable or non-JSON config file is a harness invocation error,
    // not a graded condition; a well-formed JSON row that fails the config
    // contract still grades 0.0 downstream.
    serde_json::from_str(&text).with_context(|| format!("config file '{path}' is not valid JSON"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use serde_json::json;

    #[test]
    fn test_read_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"takeaways": []}}"#).unwrap();

        let raw = read_payload(file.path().to_str().unwrap()).unwrap();
        assert_eq!(raw, r#"{"takeaways": []}"#);
    }

    #[test]
    fn test_read_payload_missing_file() {
        let err = read_payload("/nonexistent/payload.json").unwrap_err();
        assert!(err.to_string().contains("payload file"));
    }

    #[test]
    fn test_read_config_row_parses_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"expected_takeaway_count": 4}}"#).unwrap();

        let row = read_config_row(file.path().to_str().unwrap()).unwrap();
        assert_eq!(row, json!({"expected_takeaway_count": 4}));
    }

    #[test]
    fn test_read_config_row_rejects_non_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "expected_takeaway_count: 4").unwrap();

        let err = read_config_row(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
