use chrono::{NaiveTime, Timelike as _};
use serde::{Serialize, Serializer};

use crate::{consts, error::PolicyError};

/// Office hours and salary basis every calculation is run against
///
/// Passed explicitly into the calculator so several policies can live side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfficePolicy {
    #[serde(serialize_with = "serialize_clock")]
    office_start: NaiveTime,
    #[serde(serialize_with = "serialize_clock")]
    office_end: NaiveTime,
    working_hours_per_day: u32,
    days_per_month: u32,
}

impl OfficePolicy {
    pub fn new(
        office_start: NaiveTime,
        office_end: NaiveTime,
        working_hours_per_day: u32,
        days_per_month: u32,
    ) -> Result<Self, PolicyError> {
        if office_end <= office_start {
            return Err(PolicyError::EmptyOfficeHours);
        }

        if working_hours_per_day == 0 {
            return Err(PolicyError::ZeroWorkingHours);
        }

        if days_per_month == 0 {
            return Err(PolicyError::ZeroDaysPerMonth);
        }

        Ok(Self {
            office_start,
            office_end,
            working_hours_per_day,
            days_per_month,
        })
    }

    pub fn office_start(&self) -> NaiveTime {
        self.office_start
    }

    pub fn office_end(&self) -> NaiveTime {
        self.office_end
    }

    pub fn working_hours_per_day(&self) -> u32 {
        self.working_hours_per_day
    }

    pub fn days_per_month(&self) -> u32 {
        self.days_per_month
    }

    /// Minutes since midnight at which a check-in starts counting as late
    pub fn start_minutes(&self) -> i64 {
        minutes_of(self.office_start)
    }

    /// Minutes since midnight after which a check-out counts as overtime
    pub fn end_minutes(&self) -> i64 {
        minutes_of(self.office_end)
    }

    /// Shared basis of late fines and overtime rewards
    pub fn per_hour_rate(&self, basic_salary: i64) -> f64 {
        self.per_day_rate(basic_salary) / self.working_hours_per_day as f64
    }

    pub fn per_day_rate(&self, basic_salary: i64) -> f64 {
        clamp_salary(basic_salary) as f64 / self.days_per_month as f64
    }

    /// Money owed for `minutes` at the per-hour rate, rounded to whole currency units
    pub fn amount_for_minutes(&self, basic_salary: i64, minutes: i64) -> i64 {
        (self.per_hour_rate(basic_salary) * (minutes.max(0) as f64 / 60.0)).round() as i64
    }
}

impl Default for OfficePolicy {
    fn default() -> Self {
        Self {
            office_start: consts::OFFICE_START_TIME,
            office_end: consts::OFFICE_END_TIME,
            working_hours_per_day: consts::WORKING_HOURS_PER_DAY,
            days_per_month: consts::DAYS_PER_MONTH,
        }
    }
}

/// Negative salaries are treated as no salary at all
pub fn clamp_salary(basic_salary: i64) -> i64 {
    basic_salary.max(0)
}

fn minutes_of(time: NaiveTime) -> i64 {
    (time.hour() * 60 + time.minute()) as i64
}

fn serialize_clock<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}
