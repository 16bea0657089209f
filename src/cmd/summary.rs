//! Summary command - the salary form for a single amount

use crate::calc::form::{DEFAULT_AMOUNT, DEFAULT_CURRENCY};
use crate::calc::{PayBasis, SalaryForm, SalarySummary};
use clap::{Args, ValueEnum};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// How the amount is paid
    #[arg(short, long, value_enum, default_value_t = BasisArg::MonthlySalary)]
    basis: BasisArg,

    /// Amount as entered (spaces and currency symbols are ignored)
    #[arg(short, long, default_value = DEFAULT_AMOUNT)]
    amount: String,

    /// The amount is gross, i.e. tax has not been deducted yet
    #[arg(long)]
    gross: bool,

    /// Currency symbol to display
    #[arg(short, long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum BasisArg {
    #[default]
    MonthlySalary,
    MinimumWage,
    DailyRate,
    HourlyRate,
}

impl From<BasisArg> for PayBasis {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::MonthlySalary => PayBasis::MonthlySalary,
            BasisArg::MinimumWage => PayBasis::MinimumWage,
            BasisArg::DailyRate => PayBasis::DailyRate,
            BasisArg::HourlyRate => PayBasis::HourlyRate,
        }
    }
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    basis: PayBasis,
    basis_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<String>,
    currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SalarySummary>,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let form = SalaryForm::new(self.basis.into(), !self.gross, self.amount.as_str())
            .with_currency(self.currency.as_str());
        log::debug!("Form: {:?}", form);

        if self.json {
            self.print_json(&form)
        } else {
            self.print_summary(&form);
            Ok(())
        }
    }

    fn print_summary(&self, form: &SalaryForm) {
        println!();
        println!("SALARY ({})", form.basis.label());
        if let Some(help) = form.basis.help() {
            println!("  {}", help);
        }
        if form.basis.shows_tax_toggle() {
            println!("  {}", tax_toggle_label(form.tax_included));
        }
        if let Some(amount) = form.amount_display() {
            println!("  Amount: {}", amount);
        }
        println!();

        if let Some(summary) = form.summary() {
            for line in summary.lines(&form.currency) {
                println!("  {}", line);
            }
            println!();
        }
    }

    fn print_json(&self, form: &SalaryForm) -> anyhow::Result<()> {
        let data = SummaryData {
            basis: form.basis,
            basis_label: form.basis.label(),
            help: form.basis.help(),
            tax_included: form.basis.shows_tax_toggle().then_some(form.tax_included),
            amount: form.amount_display(),
            currency: form.currency.clone(),
            summary: form.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

/// Caption of the active side of the NDFL switch
fn tax_toggle_label(tax_included: bool) -> &'static str {
    if tax_included {
        "Без НДФЛ"
    } else {
        "Указать с НДФЛ"
    }
}
