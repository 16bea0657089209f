//! Batch command - net pay, tax and total for many salaries at once

use crate::calc::{BatchEntry, SalarySummary};
use crate::cmd::read_entries;
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV or JSON file containing salary records ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let entries = read_entries(&self.input)?;
        let rows: Vec<BatchRow> = entries.iter().map(BatchRow::from).collect();

        if self.csv {
            self.write_csv(&rows)
        } else if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[BatchRow]) {
        if rows.is_empty() {
            println!("No salary records found");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(4..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[BatchRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Row for the batch table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BatchRow {
    #[tabled(rename = "#")]
    pub row: usize,

    #[tabled(rename = "Label")]
    pub label: String,

    #[tabled(rename = "Basis")]
    pub basis: String,

    #[tabled(rename = "Amount")]
    pub amount: String,

    #[tabled(rename = "Net")]
    pub net: String,

    #[tabled(rename = "NDFL")]
    pub tax: String,

    #[tabled(rename = "Total")]
    pub total: String,
}

impl From<&BatchEntry> for BatchRow {
    fn from(entry: &BatchEntry) -> Self {
        let form = &entry.form;
        let SalarySummary { net, tax, total } = entry.summary().unwrap_or(SalarySummary {
            net: String::new(),
            tax: String::new(),
            total: String::new(),
        });
        let amount = match form.amount_display() {
            Some(amount) if form.tax_included => amount,
            Some(amount) => format!("{} (gross)", amount),
            None => String::new(),
        };

        BatchRow {
            row: entry.row,
            label: entry.label.clone().unwrap_or_default(),
            basis: form.basis.name().to_string(),
            amount,
            net,
            tax,
            total,
        }
    }
}
