//! Late fines and overtime rewards derived from a day's clock times.
//!
//! Every operation here is total: missing or malformed clock strings resolve to a
//! zero-effect result instead of an error, so one bad row never aborts a batch.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{policy::OfficePolicy, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Leave,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceInput {
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub basic_salary: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFine {
    pub late_minutes: i64,
    pub fine_amount: i64,
    /// Suggested only, a recorded status always wins
    pub auto_status: AttendanceStatus,
}

impl LateFine {
    const ON_TIME: Self = Self {
        late_minutes: 0,
        fine_amount: 0,
        auto_status: AttendanceStatus::Present,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overtime {
    pub overtime_minutes: i64,
    pub overtime_reward: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDerived {
    pub late_minutes: i64,
    pub fine_amount: i64,
    pub auto_status: AttendanceStatus,
    pub overtime_minutes: i64,
    pub overtime_reward: i64,
}

pub fn compute_late_fine(policy: &OfficePolicy, check_in: Option<&str>, basic_salary: i64) -> LateFine {
    let Some(check_in) = check_in.filter(|c| !c.trim().is_empty()) else {
        return LateFine::ON_TIME;
    };

    let Some(check_in_minutes) = utils::parse_clock_minutes(check_in) else {
        trace!(check_in, "unparseable check-in, treating as on time");
        return LateFine::ON_TIME;
    };

    let late_minutes = (check_in_minutes - policy.start_minutes()).max(0);
    if late_minutes == 0 {
        return LateFine::ON_TIME;
    }

    LateFine {
        late_minutes,
        fine_amount: policy.amount_for_minutes(basic_salary, late_minutes),
        auto_status: AttendanceStatus::Late,
    }
}

pub fn compute_overtime(policy: &OfficePolicy, check_out: Option<&str>, basic_salary: i64) -> Overtime {
    let Some(check_out) = check_out.filter(|c| !c.trim().is_empty()) else {
        return Overtime::default();
    };

    let Some(check_out_minutes) = utils::parse_clock_minutes(check_out) else {
        trace!(check_out, "unparseable check-out, treating as no overtime");
        return Overtime::default();
    };

    let end_minutes = policy.end_minutes();
    if check_out_minutes <= end_minutes {
        return Overtime::default();
    }

    let overtime_minutes = check_out_minutes - end_minutes;

    Overtime {
        overtime_minutes,
        overtime_reward: policy.amount_for_minutes(basic_salary, overtime_minutes),
    }
}

pub fn evaluate_day(policy: &OfficePolicy, input: &AttendanceInput) -> AttendanceDerived {
    let late = compute_late_fine(policy, input.check_in.as_deref(), input.basic_salary);
    let overtime = compute_overtime(policy, input.check_out.as_deref(), input.basic_salary);

    AttendanceDerived {
        late_minutes: late.late_minutes,
        fine_amount: late.fine_amount,
        auto_status: late.auto_status,
        overtime_minutes: overtime.overtime_minutes,
        overtime_reward: overtime.overtime_reward,
    }
}
