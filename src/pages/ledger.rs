use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ApiError, ledger::{self, CashAdjustments, ClosingSheet, LedgerDay}};

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(closing);
}

#[derive(Debug, Serialize, Deserialize)]
struct ClosingRequest {
    #[serde(default)]
    opening_balance: i64,
    #[serde(default)]
    rows: Vec<LedgerDay>,
    #[serde(default)]
    adjustments: CashAdjustments,
}

#[derive(Debug, Serialize, Deserialize)]
struct ClosingResponse {
    #[serde(flatten)]
    sheet: ClosingSheet,
    cash_in_hand: i64,
}

/// Dated rows must not go back in time, undated rows are taken where they stand
fn ensure_chronological(rows: &[LedgerDay]) -> Result<(), ApiError> {
    let mut previous = None;

    for date in rows.iter().filter_map(|r| r.date) {
        if let Some(previous) = previous.filter(|p| date < *p) {
            return Err(ApiError::UnorderedLedger { previous, date });
        }

        previous = Some(date);
    }

    Ok(())
}

#[post("/closing")]
async fn closing(payload: web::Json<ClosingRequest>) -> Result<web::Json<ClosingResponse>, ApiError> {
    ensure_chronological(&payload.rows)?;

    debug!(opening_balance = payload.opening_balance, rows = payload.rows.len(), "computing closing sheet");

    let sheet = ledger::checked_closing_sheet(payload.opening_balance, &payload.rows)
        .ok_or(ApiError::BalanceOverflow)?;
    let cash_in_hand = ledger::checked_cash_in_hand(sheet.final_balance, &payload.adjustments)
        .ok_or(ApiError::BalanceOverflow)?;

    Ok(web::Json(ClosingResponse {
        sheet,
        cash_in_hand,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::{Method, StatusCode}, test, App};
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32, income: i64, expense: i64) -> LedgerDay {
        LedgerDay {
            date: NaiveDate::from_ymd_opt(2024, 6, d),
            income,
            expense,
        }
    }

    #[::core::prelude::v1::test]
    fn test_ensure_chronological() {
        assert!(ensure_chronological(&[]).is_ok());
        assert!(ensure_chronological(&[day(1, 0, 0), day(1, 0, 0), day(2, 0, 0)]).is_ok());
        assert!(ensure_chronological(&[day(1, 0, 0), LedgerDay::default(), day(3, 0, 0)]).is_ok());
        assert!(matches!(
            ensure_chronological(&[day(2, 0, 0), LedgerDay::default(), day(1, 0, 0)]),
            Err(ApiError::UnorderedLedger { .. })
        ));
    }

    #[actix_web::test]
    async fn test_closing() {
        let app = test::init_service(
            App::new()
                .service(web::scope("/ledger").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/ledger/closing")
            .method(Method::POST)
            .set_json(ClosingRequest {
                opening_balance: 1_000,
                rows: vec![day(1, 500, 200), day(2, 0, 100)],
                adjustments: CashAdjustments {
                    recovery: 100,
                    extra_amount: 50,
                    receivables: 0,
                },
            })
            .to_request();

        let response: ClosingResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(response.sheet.rows.iter().map(|r| r.closing_balance).collect::<Vec<_>>(), vec![1_300, 1_200]);
        assert_eq!(response.sheet.final_balance, 1_200);
        assert_eq!(response.cash_in_hand, 1_050);
    }

    #[actix_web::test]
    async fn test_unordered_rows_are_rejected() {
        let app = test::init_service(
            App::new()
                .service(web::scope("/ledger").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/ledger/closing")
            .method(Method::POST)
            .set_json(ClosingRequest {
                opening_balance: 1_000,
                rows: vec![day(2, 0, 100), day(1, 500, 200)],
                adjustments: CashAdjustments::default(),
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_balance_overflow_is_rejected() {
        let app = test::init_service(
            App::new()
                .service(web::scope("/ledger").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/ledger/closing")
            .method(Method::POST)
            .set_json(ClosingRequest {
                opening_balance: i64::MAX,
                rows: vec![day(1, 1, 0)],
                adjustments: CashAdjustments::default(),
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::default()
            .uri("/ledger/closing")
            .method(Method::POST)
            .set_json(ClosingRequest {
                opening_balance: i64::MIN,
                rows: Vec::new(),
                adjustments: CashAdjustments {
                    recovery: 1,
                    ..Default::default()
                },
            })
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
