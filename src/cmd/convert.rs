//! Convert command - a single amount to net pay, tax or total

use crate::calc::{convert_value, format_grouped, Mode};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// Amount to convert (spaces and currency symbols are ignored)
    amount: String,

    /// The amount is gross, i.e. tax has not been deducted yet
    #[arg(long)]
    gross: bool,

    /// Output the tax instead of net pay
    #[arg(long, conflicts_with = "combine_with")]
    tax_only: bool,

    /// Add a second amount (e.g. the tax) to net pay
    #[arg(long, value_name = "AMOUNT")]
    combine_with: Option<String>,

    /// Output as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    amount: String,
    tax_included: bool,
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    combine_with: Option<String>,
    result: String,
}

impl ConvertCommand {
    fn mode(&self) -> Mode {
        match &self.combine_with {
            Some(other) => Mode::CombineWith(other.clone()),
            None if self.tax_only => Mode::TaxOnly,
            None => Mode::Base,
        }
    }

    pub fn exec(&self) -> anyhow::Result<()> {
        let tax_included = !self.gross;
        let mode = self.mode();
        let result = format_grouped(convert_value(&self.amount, tax_included, &mode));

        if self.json {
            let output = ConvertOutput {
                amount: self.amount.clone(),
                tax_included,
                mode: match mode {
                    Mode::Base => "base",
                    Mode::TaxOnly => "tax-only",
                    Mode::CombineWith(_) => "combine",
                },
                combine_with: self.combine_with.clone(),
                result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", result);
        }
        Ok(())
    }
}
