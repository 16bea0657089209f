use super::amount::{format_grouped, parse_amount};
use super::basis::PayBasis;
use super::convert::{convert, Mode};
use serde::Serialize;

pub const DEFAULT_AMOUNT: &str = "40000";
pub const DEFAULT_CURRENCY: &str = "₽";

/// State of the salary form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryForm {
    pub basis: PayBasis,
    /// Entered amount is net of tax
    pub tax_included: bool,
    /// Amount as typed
    pub amount: String,
    pub currency: String,
}

impl Default for SalaryForm {
    fn default() -> Self {
        SalaryForm {
            basis: PayBasis::default(),
            tax_included: true,
            amount: DEFAULT_AMOUNT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Derived figures for a monthly salary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySummary {
    /// Take-home pay
    pub net: String,
    /// Income tax
    pub tax: String,
    /// Total employer cost per month
    pub total: String,
}

impl SalaryForm {
    pub fn new(basis: PayBasis, tax_included: bool, amount: impl Into<String>) -> Self {
        SalaryForm {
            basis,
            tax_included,
            amount: amount.into(),
            ..SalaryForm::default()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// The amount field as displayed, e.g. `"1 500 ₽ в день"`
    pub fn amount_display(&self) -> Option<String> {
        if !self.basis.shows_amount() {
            return None;
        }
        let mut out = format!(
            "{} {}",
            format_grouped(parse_amount(&self.amount)),
            self.currency
        );
        if let Some(suffix) = self.basis.amount_suffix() {
            out.push(' ');
            out.push_str(suffix);
        }
        Some(out)
    }

    /// Net pay, tax and total cost; only a monthly salary has one.
    ///
    /// The total is computed from the displayed tax figure rather than the
    /// exact value, so it always matches the two lines above it.
    pub fn summary(&self) -> Option<SalarySummary> {
        if !self.basis.has_summary() {
            return None;
        }
        let net = convert(&self.amount, self.tax_included, &Mode::Base);
        let tax = convert(&self.amount, self.tax_included, &Mode::TaxOnly);
        let total = convert(
            &self.amount,
            self.tax_included,
            &Mode::CombineWith(tax.clone()),
        );
        Some(SalarySummary { net, tax, total })
    }
}

impl SalarySummary {
    pub fn lines(&self, currency: &str) -> [String; 3] {
        [
            format!("{} {} сотрудник будет получать на руки", self.net, currency),
            format!("{} {} НДФЛ, 13% от оклада", self.tax, currency),
            format!("{} {} за сотрудника в месяц", self.total, currency),
        ]
    }
}
