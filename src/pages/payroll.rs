use actix_web::{post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::ApiError, payroll::{self, AttendanceRecord, PayrollSummary}, policy::OfficePolicy, utils};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(summary);
}

#[derive(Debug, Serialize, Deserialize)]
struct SummaryRequest {
    #[serde(default)]
    employee_id: Option<Uuid>,
    /// Any day within the month being summarized
    month: NaiveDate,
    #[serde(default)]
    basic_salary: i64,
    #[serde(default)]
    records: Vec<AttendanceRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SummaryResponse {
    employee_id: Option<Uuid>,
    month: NaiveDate,
    #[serde(flatten)]
    summary: PayrollSummary,
    late_duration: String,
    overtime_duration: String,
}

#[post("/summary")]
async fn summary(policy: web::Data<OfficePolicy>, payload: web::Json<SummaryRequest>) -> Result<web::Json<SummaryResponse>, ApiError> {
    let SummaryRequest { employee_id, month, basic_salary, records } = payload.into_inner();

    if let Some(record) = records.iter().find(|r| !utils::is_same_month(&r.date, &month)) {
        return Err(ApiError::RecordOutsideMonth { date: record.date });
    }

    debug!(?employee_id, %month, records = records.len(), "summarizing payroll");

    let summary = payroll::summarize_month(&policy, basic_salary, &records);

    Ok(web::Json(SummaryResponse {
        employee_id,
        month,
        late_duration: utils::format_minutes(summary.late_minutes),
        overtime_duration: utils::format_minutes(summary.overtime_minutes),
        summary,
    }))
}
