use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{info, warn};

use crate::aggregator::aggregate;
use crate::loader::errors::LoadError;
use crate::loader::schema::{normalize_headers, ColumnLayout};
use crate::loader::DatasetLoader;
use crate::models::{LoadReport, RawTransactionRow, RecordError, RegionalDataset};

/// Loads delimited transaction exports.
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    delimiter: u8
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvDatasetLoader {
    pub fn new() -> Self {
        Self {
            delimiter: b','
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads every row from `source`, excluding malformed rows, and aggregates
    /// the rest by region.
    ///
    /// # Errors
    /// Returns `LoadError` if the headers are not UTF-8 or fail schema
    /// resolution, or the source cannot be read. Individual bad rows, including
    /// rows whose region, id, amount or flag is not UTF-8, are logged and
    /// counted in the `LoadReport` instead.
    pub fn load_reader<R: Read>(&self, source: R) -> Result<RegionalDataset, LoadError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(source);

        let headers = normalize_headers(reader.headers()?.iter());
        let layout = ColumnLayout::resolve(&headers)?;
        let canonical_headers = ColumnLayout::canonical_headers();

        let mut report = LoadReport::default();
        let mut records = Vec::new();

        for result in reader.byte_records() {
            let row = result?;
            report.rows_read += 1;

            //NOTE: Header is line 1, so the fallback keeps numbering aligned with the file
            let line = row.position().map(|position| position.line()).unwrap_or(report.rows_read + 1);

            let parsed = layout.project(&row)
                .map_err(|column| RecordError::invalid_encoding(line, column).to_string())
                .and_then(|projected| {
                    projected.deserialize::<RawTransactionRow>(Some(&canonical_headers))
                        .map_err(|error| error.to_string())
                })
                .and_then(|raw| raw.into_record(line).map_err(|error| error.to_string()));

            match parsed {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!("Excluding row: {error}");
                    report.rows_excluded += 1;
                }
            }
        }

        report.rows_accepted = records.len() as u64;

        let aggregates = aggregate(&records)?;

        if report.rows_excluded > 0 {
            warn!("Excluded {} of {} rows", report.rows_excluded, report.rows_read);
        }

        Ok(RegionalDataset::new(aggregates, report))
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load(&self, path: &Path) -> Result<RegionalDataset, LoadError> {
        let file = File::open(path)?;
        let dataset = self.load_reader(BufReader::new(file))?;

        info!("Loaded {} regions from [{}] ({} rows accepted, {} excluded)",
            dataset.len(), path.display(), dataset.report().rows_accepted, dataset.report().rows_excluded);

        Ok(dataset)
    }
}
