use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{calculator::{self, AttendanceInput}, policy::OfficePolicy};

use model::*;

mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(late_fine)
        .service(overtime)
        .service(evaluate);
}

#[post("/late-fine")]
async fn late_fine(policy: web::Data<OfficePolicy>, payload: web::Json<LateFineRequest>) -> impl Responder {
    debug!(check_in = ?payload.check_in, "computing late fine");

    web::Json(calculator::compute_late_fine(&policy, payload.check_in.as_deref(), payload.basic_salary))
}

#[post("/overtime")]
async fn overtime(policy: web::Data<OfficePolicy>, payload: web::Json<OvertimeRequest>) -> impl Responder {
    debug!(check_out = ?payload.check_out, "computing overtime");

    web::Json(calculator::compute_overtime(&policy, payload.check_out.as_deref(), payload.basic_salary))
}

#[post("/evaluate")]
async fn evaluate(policy: web::Data<OfficePolicy>, payload: web::Json<AttendanceInput>) -> impl Responder {
    debug!(check_in = ?payload.check_in, check_out = ?payload.check_out, "evaluating attendance day");

    web::Json(calculator::evaluate_day(&policy, &payload))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::{Method, StatusCode}, test, App};

    use crate::calculator::{AttendanceDerived, AttendanceStatus, LateFine, Overtime};

    use super::*;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(OfficePolicy::default()))
                    .service(web::scope("/attendance").configure(config))
            ).await
        };
    }

    #[actix_web::test]
    async fn test_late_fine() {
        let app = app!();

        let req = test::TestRequest::default()
            .uri("/attendance/late-fine")
            .method(Method::POST)
            .set_json(LateFineRequest {
                check_in: Some("09:15".to_owned()),
                basic_salary: 33_000,
            })
            .to_request();

        let late: LateFine = test::call_and_read_body_json(&app, req).await;
        assert_eq!(late.late_minutes, 15);
        assert_eq!(late.fine_amount, 25);
        assert_eq!(late.auto_status, AttendanceStatus::Late);
    }

    #[actix_web::test]
    async fn test_overtime_with_malformed_check_out() {
        let app = app!();

        let req = test::TestRequest::default()
            .uri("/attendance/overtime")
            .method(Method::POST)
            .set_json(OvertimeRequest {
                check_out: Some("bad-input".to_owned()),
                basic_salary: 33_000,
            })
            .to_request();

        let overtime_body: Overtime = test::call_and_read_body_json(&app, req).await;
        assert_eq!(overtime_body, Overtime::default());
    }

    #[actix_web::test]
    async fn test_evaluate() {
        let app = app!();

        let req = test::TestRequest::default()
            .uri("/attendance/evaluate")
            .method(Method::POST)
            .set_json(AttendanceInput {
                check_in: Some("08:50".to_owned()),
                check_out: Some("21:30".to_owned()),
                basic_salary: 33_000,
            })
            .to_request();

        let derived: AttendanceDerived = test::call_and_read_body_json(&app, req).await;
        assert_eq!(derived.auto_status, AttendanceStatus::Present);
        assert_eq!(derived.fine_amount, 0);
        assert_eq!(derived.overtime_minutes, 90);
        assert_eq!(derived.overtime_reward, 150);
    }

    #[actix_web::test]
    async fn test_missing_salary_defaults_to_zero() {
        let app = app!();

        let req = test::TestRequest::default()
            .uri("/attendance/late-fine")
            .method(Method::POST)
            .insert_header(("Content-Type", "application/json"))
            .set_payload(r#"{"check_in":"10:00"}"#)
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let late: LateFine = test::read_body_json(response).await;
        assert_eq!(late.late_minutes, 60);
        assert_eq!(late.fine_amount, 0);
    }

    #[actix_web::test]
    async fn test_non_numeric_salary_is_rejected() {
        let app = app!();

        let req = test::TestRequest::default()
            .uri("/attendance/overtime")
            .method(Method::POST)
            .insert_header(("Content-Type", "application/json"))
            .set_payload(r#"{"check_out":"21:00","basic_salary":"lots"}"#)
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
