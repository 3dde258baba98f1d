use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Error;
use crate::models::{Budget, Period, YearMonth};

/// Provider of every known monthly budget. Returned records are unordered
/// and treated as a frozen snapshot for one calculation. At most one budget
/// per year-month is expected; when duplicates occur, the first record in
/// the returned collection wins.
pub trait BudgetSource {
    fn get_all(&self) -> Vec<Budget>;
}

impl BudgetSource for [Budget] {
    fn get_all(&self) -> Vec<Budget> {
        self.to_vec()
    }
}

impl BudgetSource for Vec<Budget> {
    fn get_all(&self) -> Vec<Budget> {
        self.clone()
    }
}

pub struct BudgetCalculator<'a, S: BudgetSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: BudgetSource + ?Sized> BudgetCalculator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Total amount budgeted across the inclusive `start..=end` range,
    /// prorating each overlapping month by its daily rate. Months without
    /// a budget contribute zero; an empty source yields zero.
    pub fn total_amount(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal, Error> {
        let period = Period::new(start, end)?;

        let budgets = self.source.get_all();
        if budgets.is_empty() {
            return Ok(Decimal::ZERO);
        }
        let by_month = index_by_month(budgets);

        if period.is_single_month() {
            let amount = by_month
                .get(&YearMonth::from_date(period.start()))
                .map(|b| b.daily_amount() * inclusive_days(period.start(), period.end()))
                .unwrap_or(Decimal::ZERO);
            return Ok(amount);
        }

        let first = YearMonth::from_date(period.start());
        let last = YearMonth::from_date(period.end());

        let mut total = Decimal::ZERO;
        let mut month = first;
        loop {
            if let Some(budget) = by_month.get(&month) {
                let window_start = if month == first {
                    period.start()
                } else {
                    budget.first_day()
                };
                let window_end = if month == last {
                    period.end()
                } else {
                    budget.last_day()
                };
                total += budget.daily_amount() * inclusive_days(window_start, window_end);
            }
            if month == last {
                break;
            }
            month = month.next();
        }

        Ok(total)
    }
}

/// First budget per month wins, preserving the source's duplicate semantics.
fn index_by_month(budgets: Vec<Budget>) -> HashMap<YearMonth, Budget> {
    let mut by_month = HashMap::with_capacity(budgets.len());
    for budget in budgets {
        by_month.entry(budget.month).or_insert(budget);
    }
    by_month
}

fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Decimal {
    Decimal::from((end - start).num_days() + 1)
}
