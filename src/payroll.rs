use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    calculator::{self, AttendanceInput, AttendanceStatus},
    policy::{self, OfficePolicy},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    /// Status recorded by an operator, if any
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub basic_salary: i64,
    pub present_days: u32,
    pub late_days: u32,
    pub absent_days: u32,
    pub leave_days: u32,
    pub late_minutes: i64,
    pub overtime_minutes: i64,
    pub fine_total: i64,
    pub overtime_total: i64,
    pub absence_deduction: i64,
    pub net_salary: i64,
}

pub fn per_day_salary(policy: &OfficePolicy, basic_salary: i64) -> i64 {
    policy.per_day_rate(basic_salary).round() as i64
}

/// Aggregates a month of attendance records into one payroll line
///
/// Money totals saturate at the `i64` bounds.
pub fn summarize_month(policy: &OfficePolicy, basic_salary: i64, records: &[AttendanceRecord]) -> PayrollSummary {
    let basic_salary = policy::clamp_salary(basic_salary);

    let mut summary = PayrollSummary {
        basic_salary,
        ..Default::default()
    };

    for record in records {
        match record.status {
            Some(AttendanceStatus::Absent) => {
                summary.absent_days += 1;
                continue;
            },
            Some(AttendanceStatus::Leave) => {
                summary.leave_days += 1;
                continue;
            },
            _ => {},
        }

        let derived = calculator::evaluate_day(policy, &AttendanceInput {
            check_in: record.check_in.clone(),
            check_out: record.check_out.clone(),
            basic_salary,
        });

        match record.status.unwrap_or(derived.auto_status) {
            AttendanceStatus::Late => summary.late_days += 1,
            _ => summary.present_days += 1,
        }

        summary.late_minutes = summary.late_minutes.saturating_add(derived.late_minutes);
        summary.overtime_minutes = summary.overtime_minutes.saturating_add(derived.overtime_minutes);
        summary.fine_total = summary.fine_total.saturating_add(derived.fine_amount);
        summary.overtime_total = summary.overtime_total.saturating_add(derived.overtime_reward);
    }

    summary.absence_deduction = (policy.per_day_rate(basic_salary) * summary.absent_days as f64).round() as i64;
    summary.net_salary = basic_salary
        .saturating_sub(summary.fine_total)
        .saturating_sub(summary.absence_deduction)
        .saturating_add(summary.overtime_total);

    summary
}
