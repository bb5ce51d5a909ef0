
use std::io::Write;

use anyhow::Result;
use csv::Writer;
use serde::Serialize;

use crate::models::RegionalAggregate;
use crate::views::ViewOutput;

#[derive(Serialize)]
struct MetricRow<'a> {
    metric: &'a str,
    value: &'a str
}

#[derive(Serialize)]
struct ConcentrationRow<'a> {
    rank: usize,
    region: &'a str,
    share_percent: f64
}

/// Writes a rendered view as CSV, or as a single line of text for the assistant.
pub fn write_view<W: Write>(output: &ViewOutput<'_>, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);

    match output {
        ViewOutput::Overview(kpis) => {
            write_metrics(&mut csv, &[
                ("regions", kpis.region_count.to_string()),
                ("total_transactions", kpis.total_transactions.to_string()),
                ("total_transactions_display", kpis.transactions_display()),
                ("total_value_crore", kpis.total_value_scaled.to_string()),
                ("total_value_display", kpis.value_display()),
                ("fraud_cases", kpis.total_fraud.to_string()),
            ])?;
        }
        ViewOutput::Spatial(slice) => {
            csv.write_record(["region", slice.metric.name()])?;

            for point in &slice.points {
                csv.write_record([point.region, point.value.to_string().as_str()])?;
            }
        }
        ViewOutput::Concentration(slice) => {
            for (index, aggregate) in slice.top.iter().enumerate() {
                csv.serialize(ConcentrationRow {
                    rank: index + 1,
                    region: aggregate.region.as_str(),
                    share_percent: aggregate.share_percent
                })?;
            }

            if slice.top.is_empty() {
                csv.write_record(["rank", "region", "share_percent"])?;
            }

            csv.write_record(["", "top_5_share_percent", slice.headline_share_percent.to_string().as_str()])?;
        }
        ViewOutput::Formalisation(aggregates) | ViewOutput::FraudRisk(aggregates) => {
            write_aggregates(&mut csv, aggregates)?;
        }
        ViewOutput::Outlook(summary) => {
            csv.write_record(["year", "projected_transactions"])?;

            for point in summary.series.points() {
                csv.write_record([point.year.to_string(), point.value.to_string()])?;
            }
        }
        ViewOutput::Assistant(response) => {
            let mut writer = csv.into_inner().map_err(|error| error.into_error())?;
            writeln!(writer, "{response}")?;
            writer.flush()?;
            return Ok(());
        }
    }

    csv.flush()?;

    Ok(())
}

fn write_metrics<W: Write>(csv: &mut Writer<W>, metrics: &[(&str, String)]) -> Result<()> {
    for (metric, value) in metrics {
        csv.serialize(MetricRow { metric: *metric, value: value.as_str() })?;
    }

    Ok(())
}

fn write_aggregates<W: Write>(csv: &mut Writer<W>, aggregates: &[RegionalAggregate]) -> Result<()> {
    if aggregates.is_empty() {
        csv.write_record([
            "region",
            "transaction_count",
            "total_value",
            "fraud_count",
            "value_scaled",
            "fraud_per_million",
            "share_percent",
            "avg_value_per_txn",
        ])?;
    }

    for aggregate in aggregates {
        csv.serialize(aggregate)?;
    }

    Ok(())
}
