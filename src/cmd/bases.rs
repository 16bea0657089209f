//! Bases command - list the pay bases

use crate::calc::PayBasis;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct BasesCommand {}

#[derive(Debug, Tabled)]
struct BasisRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    /// Empty for a plain amount, the period suffix, or "-" when there is no amount
    #[tabled(rename = "Amount")]
    amount: &'static str,
    #[tabled(rename = "Summary")]
    summary: &'static str,
    #[tabled(rename = "Note")]
    note: &'static str,
}

impl From<PayBasis> for BasisRow {
    fn from(basis: PayBasis) -> Self {
        BasisRow {
            name: basis.name(),
            label: basis.label(),
            amount: if basis.shows_amount() {
                basis.amount_suffix().unwrap_or("")
            } else {
                "-"
            },
            summary: if basis.has_summary() { "yes" } else { "no" },
            note: basis.help().unwrap_or(""),
        }
    }
}

impl BasesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<BasisRow> = PayBasis::all().into_iter().map(BasisRow::from).collect();

        println!("{}", Table::new(rows).with(Style::rounded()));
        Ok(())
    }
}
