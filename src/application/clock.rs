//! Source of the current calendar year.

use time::OffsetDateTime;

use crate::domain::error::DomainError;

pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads the system clock in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        OffsetDateTime::now_utc().year()
    }
}

/// Always reports the same year. Used for static exports and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    pub fn new(year: i32) -> Result<Self, DomainError> {
        if !(1..=9999).contains(&year) {
            return Err(DomainError::validation(format!(
                "year {year} is outside 1..=9999"
            )));
        }
        Ok(Self { year })
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        let clock = FixedClock::new(2031).expect("valid year");
        assert_eq!(clock.current_year(), 2031);
    }

    #[test]
    fn fixed_clock_rejects_out_of_range_years() {
        assert!(FixedClock::new(0).is_err());
        assert!(FixedClock::new(10_000).is_err());
    }

    #[test]
    fn system_clock_matches_time_crate() {
        let before = OffsetDateTime::now_utc().year();
        let year = SystemClock.current_year();
        let after = OffsetDateTime::now_utc().year();
        assert!(year == before || year == after);
    }
}
