//! Clock, greeting and month calendar projections.
//!
//! Pure functions of a date/time; the caller supplies "now".

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// Time-of-day greeting.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// 24-hour `HH:MM`.
pub fn clock_text(now: &NaiveDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Long date, e.g. `Friday, October 16`.
pub fn date_text(date: &NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// One month laid out Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st.
    pub leading_blanks: u32,
    pub days_in_month: u32,
    /// Day of month to highlight, if `today` falls in this month.
    pub today: Option<u32>,
}

impl MonthGrid {
    /// Grid for the month `offset` months away from `today`'s month.
    pub fn around(today: NaiveDate, offset: i32) -> Option<Self> {
        let first = today.with_day(1)?;
        let shifted = if offset >= 0 {
            first.checked_add_months(Months::new(offset.unsigned_abs()))?
        } else {
            first.checked_sub_months(Months::new(offset.unsigned_abs()))?
        };
        Self::new(shifted.year(), shifted.month(), today)
    }

    /// Grid for `year`/`month`. Returns `None` for an invalid month.
    pub fn new(year: i32, month: u32, today: NaiveDate) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = first.checked_add_months(Months::new(1))?;
        let days_in_month = u32::try_from((next - first).num_days()).ok()?;
        let today = (today.year() == year && today.month() == month).then(|| today.day());
        Some(Self {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days_in_month,
            today,
        })
    }

    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for MonthGrid {
    /// Plain-text calendar; today is wrapped in brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, " Su  Mo  Tu  We  Th  Fr  Sa")?;
        let mut column = 0;
        for _ in 0..self.leading_blanks {
            write!(f, "    ")?;
            column += 1;
        }
        for day in 1..=self.days_in_month {
            if self.today == Some(day) {
                write!(f, "[{day:>2}]")?;
            } else {
                write!(f, " {day:>2} ")?;
            }
            column += 1;
            if column % 7 == 0 {
                writeln!(f)?;
            }
        }
        if column % 7 != 0 {
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(17), "Good Afternoon");
        assert_eq!(greeting(18), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }

    #[test]
    fn clock_and_date_text() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 59)
            .unwrap();
        assert_eq!(clock_text(&now), "09:05");
        assert_eq!(date_text(&now.date()), "Friday, October 16");
    }

    #[test]
    fn october_2026_grid() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let grid = MonthGrid::around(today, 0).unwrap();
        // 1 October 2026 is a Thursday.
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days_in_month, 31);
        assert_eq!(grid.today, Some(16));
        assert_eq!(grid.title(), "October 2026");
        assert!(grid.to_string().contains("[16]"));
    }

    #[test]
    fn offsets_cross_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let prev = MonthGrid::around(today, -1).unwrap();
        assert_eq!((prev.year, prev.month), (2025, 12));
        assert_eq!(prev.today, None);

        let feb = MonthGrid::around(today, 1).unwrap();
        assert_eq!(feb.days_in_month, 28);

        let leap = MonthGrid::new(2028, 2, today).unwrap();
        assert_eq!(leap.days_in_month, 29);
    }

    #[test]
    fn invalid_month_is_none() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert!(MonthGrid::new(2026, 13, today).is_none());
    }
}
