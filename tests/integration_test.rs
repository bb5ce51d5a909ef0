use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{anyhow, Result};

fn run(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_digital-payments-dashboard");

    Ok(Command::new(binary_path).args(args).output()?)
}

fn sample(name: &str) -> String {
    Path::new("samples").join(name).to_string_lossy().into_owned()
}

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let output = run(&[&sample("sample.csv"), "fraud-risk"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(
        lines.next(),
        Some("region,transaction_count,total_value,fraud_count,value_scaled,fraud_per_million,share_percent,avg_value_per_txn")
    );

    let mut share_total = 0.0;
    let mut row_count = 0;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 8);

        let count: u64 = fields[1].parse()?;
        let _: f64 = fields[2].parse()?;
        let fraud: u64 = fields[3].parse()?;
        share_total += fields[6].parse::<f64>()?;
        row_count += 1;

        assert!(fraud <= count);
    }

    assert_eq!(row_count, 12);
    assert!((share_total - 100.0).abs() < 1e-6);

    Ok(())
}

#[test]
fn test_cli_outputs_correct_regional_aggregates() -> Result<()> {
    let output = run(&[&sample("fixed.csv"), "formalisation"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut results = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();
        results.insert(fields[0].clone(), fields);
    }

    let region_a = results.get("A").ok_or_else(|| anyhow!("region A missing from output"))?;

    assert_eq!(region_a[1], "2");
    assert_eq!(region_a[2], "300");
    assert_eq!(region_a[3], "1");
    assert_eq!(region_a[5].parse::<f64>()?, 500_000.0);
    assert_eq!(region_a[6].parse::<f64>()?, 50.0);

    let region_b = results.get("B").ok_or_else(|| anyhow!("region B missing from output"))?;

    assert_eq!(region_b[1], "2");
    assert_eq!(region_b[2], "100");
    assert_eq!(region_b[3], "0");
    assert_eq!(region_b[5].parse::<f64>()?, 0.0);
    assert_eq!(region_b[6].parse::<f64>()?, 50.0);

    Ok(())
}

#[test]
fn test_cli_reports_overview_kpis() -> Result<()> {
    let output = run(&[&sample("fixed.csv"), "overview"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.lines().any(|line| line == "total_transactions,4"));
    assert!(stdout.lines().any(|line| line == "fraud_cases,1"));

    Ok(())
}

#[test]
fn test_cli_projects_outlook_with_growth_argument() -> Result<()> {
    let output = run(&[&sample("fixed.csv"), "outlook", "10"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 25);
    assert_eq!(lines[1], "2024,4000000");

    Ok(())
}

#[test]
fn test_cli_answers_policy_questions() -> Result<()> {
    let output = run(&[&sample("fixed.csv"), "assistant", "Will fraud grow by 2047?"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.starts_with("Fraud increases during rapid adoption"));

    Ok(())
}

#[test]
fn test_cli_reports_unmatched_boundaries_without_failing() -> Result<()> {
    let output = run(&[&sample("fixed.csv"), "spatial", "value_scaled", "--boundaries", &sample("fixed_states.geojson"), "--log-level", "warn"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.starts_with("region,value_scaled"));
    assert!(String::from_utf8(output.stderr)?.contains("No boundary found for regions: B"));

    Ok(())
}

#[test]
fn test_cli_rejects_unknown_spatial_metric() -> Result<()> {
    let output = run(&[&sample("fixed.csv"), "spatial", "bogus"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("fraud_per_million"));

    Ok(())
}

#[test]
fn test_cli_fails_on_schema_errors() -> Result<()> {
    let output = run(&[&sample("no_amount.csv"), "overview"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("amount"));

    Ok(())
}

#[test]
fn test_cli_requires_a_view() -> Result<()> {
    let output = run(&[&sample("fixed.csv")])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));

    Ok(())
}
