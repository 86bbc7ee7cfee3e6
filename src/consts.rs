use chrono::NaiveTime;

pub const OFFICE_START_TIME: NaiveTime = clock(9, 0);

pub const OFFICE_END_TIME: NaiveTime = clock(20, 0);

pub const WORKING_HOURS_PER_DAY: u32 = 11;

/// Daily rates are always derived from a flat month, regardless of the calendar
pub const DAYS_PER_MONTH: u32 = 30;

/// Latest hour and minute a recorded clock string may carry
pub const MAX_CLOCK_TIME: (i64, i64) = (23, 59);

const fn clock(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(time) => time,
        None => panic!("office hours constant is not a valid time of day"),
    }
}
