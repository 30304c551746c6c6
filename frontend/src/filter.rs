use chrono::{Datelike, Local, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. `month` is always in `1..=12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthFilter {
    month: u32,
    year: i32,
}

impl MonthFilter {
    /// Returns `None` if `month` is outside `1..=12`.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn current() -> Self {
        Self::containing(today())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn with_month(self, month: u32) -> Self {
        Self::new(month, self.year).unwrap_or(self)
    }

    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                month: 12,
                year: self.year - 1,
            }
        } else {
            Self {
                month: self.month - 1,
                ..self
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                month: 1,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

pub fn month_options() -> impl Iterator<Item = (u32, &'static str)> {
    (1..=12).zip(MONTH_NAMES)
}

/// Years offered by the year selector: `span` either side of `around`.
pub fn year_options(around: i32, span: i32) -> Vec<i32> {
    ((around - span)..=(around + span)).collect()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_months() {
        assert!(MonthFilter::new(0, 2024).is_none());
        assert!(MonthFilter::new(13, 2024).is_none());
        assert!(MonthFilter::new(12, 2024).is_some());
    }

    #[test]
    fn previous_rolls_back_into_december() {
        let january = MonthFilter::new(1, 2024).unwrap();

        assert_eq!(january.previous(), MonthFilter::new(12, 2023).unwrap());
    }

    #[test]
    fn next_rolls_over_into_january() {
        let december = MonthFilter::new(12, 2024).unwrap();

        assert_eq!(december.next(), MonthFilter::new(1, 2025).unwrap());
    }

    #[test]
    fn with_month_ignores_invalid_values() {
        let filter = MonthFilter::new(5, 2024).unwrap();

        assert_eq!(filter.with_month(14), filter);
        assert_eq!(filter.with_month(2).month(), 2);
    }

    #[test]
    fn names_months() {
        assert_eq!(MonthFilter::new(9, 2024).unwrap().month_name(), "September");
        assert_eq!(month_options().count(), 12);
    }

    #[test]
    fn year_options_are_centred() {
        assert_eq!(year_options(2024, 2), vec![2022, 2023, 2024, 2025, 2026]);
    }
}
