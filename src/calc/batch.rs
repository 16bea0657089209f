use super::basis::PayBasis;
use super::form::{SalaryForm, SalarySummary};
use salc_derive::CsvSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("row {row}: unknown pay basis '{value}'")]
    UnknownBasis { row: usize, value: String },
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Description of one CSV input column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// JSON input root
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchInput {
    pub records: Vec<JsonRecord>,
}

/// One salary to calculate, as a JSON object
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JsonRecord {
    /// Amount as a string or a number; numbers keep their literal text
    pub amount: Value,
    /// Whether the amount is net of tax (default: true)
    #[serde(default)]
    pub tax_included: Option<bool>,
    /// monthly-salary, minimum-wage, daily-rate or hourly-rate (default: monthly-salary)
    #[serde(default)]
    pub basis: Option<String>,
    /// Free-text label, e.g. a position or employee name
    #[serde(default)]
    pub label: Option<String>,
}

/// One salary to calculate, as a CSV row
#[derive(Debug, Clone, Serialize, Deserialize, CsvSchema)]
pub struct BatchRecord {
    /// Amount as entered; spaces and currency symbols are ignored
    pub amount: String,
    /// Whether the amount is net of tax (default: true)
    #[serde(default)]
    pub tax_included: Option<bool>,
    /// monthly-salary, minimum-wage, daily-rate or hourly-rate (default: monthly-salary)
    #[serde(default)]
    pub basis: Option<String>,
    /// Free-text label, e.g. a position or employee name
    #[serde(default)]
    pub label: Option<String>,
}

/// A validated record with its 1-based row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub row: usize,
    pub label: Option<String>,
    pub form: SalaryForm,
}

impl BatchEntry {
    pub fn summary(&self) -> Option<SalarySummary> {
        self.form.summary()
    }
}

impl BatchRecord {
    fn into_entry(self, row: usize) -> Result<BatchEntry, BatchError> {
        let basis = match self.basis.as_deref().map(str::trim) {
            None | Some("") => PayBasis::default(),
            Some(value) => PayBasis::from_str(value).ok_or_else(|| BatchError::UnknownBasis {
                row,
                value: value.to_string(),
            })?,
        };
        Ok(BatchEntry {
            row,
            label: self.label.filter(|l| !l.is_empty()),
            form: SalaryForm::new(basis, self.tax_included.unwrap_or(true), self.amount),
        })
    }
}

fn into_entries(records: Vec<BatchRecord>) -> Result<Vec<BatchEntry>, BatchError> {
    let entries = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| record.into_entry(i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Read {} salary records", entries.len());
    Ok(entries)
}

/// Read salary records from CSV
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<BatchEntry>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = rdr
        .deserialize::<BatchRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    into_entries(records)
}

/// Read salary records from JSON
pub fn read_json<R: Read>(reader: R) -> Result<Vec<BatchEntry>, BatchError> {
    let input: BatchInput = serde_json::from_reader(reader)?;
    into_entries(input.records.into_iter().map(Into::into).collect())
}

impl From<JsonRecord> for BatchRecord {
    fn from(record: JsonRecord) -> Self {
        BatchRecord {
            amount: amount_text(record.amount),
            tax_included: record.tax_included,
            basis: record.basis,
            label: record.label,
        }
    }
}

/// Numbers keep the text they were written with (serde_json `arbitrary_precision`),
/// so `1.50` and `1e30` reach the amount parser unchanged.
fn amount_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => {
            log::debug!("non-numeric amount {}, reading its text", other);
            other.to_string()
        }
    }
}
