mod calc;
mod error;
mod models;

pub use calc::{BudgetCalculator, BudgetSource};
pub use error::Error;
pub use models::{Budget, Period, YearMonth};
