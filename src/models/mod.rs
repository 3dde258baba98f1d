mod budget;
mod period;
mod year_month;

pub use budget::Budget;
pub use period::Period;
pub use year_month::YearMonth;
