use chrono::NaiveDate;

use super::YearMonth;
use crate::error::Error;

/// A validated inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True iff both endpoints fall in the same calendar month.
    pub fn is_single_month(&self) -> bool {
        YearMonth::from_date(self.start) == YearMonth::from_date(self.end)
    }
}
