use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::YearMonth;

/// One calendar month's total allocation. A source collection is expected
/// to hold at most one budget per distinct year-month.
#[derive(Debug, Clone)]
pub struct Budget {
    pub month: YearMonth,
    pub total_amount: Decimal,
}

impl Budget {
    pub fn new(month: YearMonth, total_amount: Decimal) -> Self {
        Self {
            month,
            total_amount,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.month.first_day()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.month.last_day()
    }

    /// The month's total spread evenly across its days, as exact decimal
    /// division (no integer truncation).
    pub fn daily_amount(&self) -> Decimal {
        self.total_amount / Decimal::from(self.month.days())
    }
}
