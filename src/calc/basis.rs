use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the entered amount is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PayBasis {
    /// Fixed monthly salary ("Оклад за месяц")
    #[default]
    MonthlySalary,
    /// Regional minimum wage ("МРОТ"); there is no amount to enter
    MinimumWage,
    /// Pay per working day ("Оплата за день")
    DailyRate,
    /// Pay per working hour ("Оплата за час")
    HourlyRate,
}

impl PayBasis {
    pub fn all() -> [PayBasis; 4] {
        [
            PayBasis::MonthlySalary,
            PayBasis::MinimumWage,
            PayBasis::DailyRate,
            PayBasis::HourlyRate,
        ]
    }

    /// Accepts the Russian label or the kebab-case name (any case)
    pub fn from_str(s: &str) -> Option<PayBasis> {
        let s = s.trim();
        if let Some(basis) = PayBasis::all().into_iter().find(|b| b.label() == s) {
            return Some(basis);
        }
        match s.to_lowercase().as_str() {
            "monthly-salary" | "monthly" => Some(PayBasis::MonthlySalary),
            "minimum-wage" | "mrot" => Some(PayBasis::MinimumWage),
            "daily-rate" | "daily" => Some(PayBasis::DailyRate),
            "hourly-rate" | "hourly" => Some(PayBasis::HourlyRate),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PayBasis::MonthlySalary => "monthly-salary",
            PayBasis::MinimumWage => "minimum-wage",
            PayBasis::DailyRate => "daily-rate",
            PayBasis::HourlyRate => "hourly-rate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayBasis::MonthlySalary => "Оклад за месяц",
            PayBasis::MinimumWage => "МРОТ",
            PayBasis::DailyRate => "Оплата за день",
            PayBasis::HourlyRate => "Оплата за час",
        }
    }

    /// Explanatory note shown next to the option, if any
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PayBasis::MinimumWage => {
                Some("МРОТ - минимальный размер оплаты труда. Разный для разных регионов.")
            }
            _ => None,
        }
    }

    /// Period suffix shown after the amount
    pub fn amount_suffix(&self) -> Option<&'static str> {
        match self {
            PayBasis::DailyRate => Some("в день"),
            PayBasis::HourlyRate => Some("в час"),
            PayBasis::MonthlySalary | PayBasis::MinimumWage => None,
        }
    }

    /// Minimum wage is set regionally, so no amount is entered for it
    pub fn shows_amount(&self) -> bool {
        !matches!(self, PayBasis::MinimumWage)
    }

    pub fn shows_tax_toggle(&self) -> bool {
        self.shows_amount()
    }

    /// Only a monthly salary gets the net / tax / total breakdown
    pub fn has_summary(&self) -> bool {
        matches!(self, PayBasis::MonthlySalary)
    }
}

impl std::fmt::Display for PayBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
