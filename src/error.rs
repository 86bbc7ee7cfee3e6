use actix_web::{body, http::{self, header::ContentType, StatusCode}, HttpResponse};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("office end time must be later than office start time")]
    EmptyOfficeHours,

    #[error("working hours per day must be greater than zero")]
    ZeroWorkingHours,

    #[error("days per month must be greater than zero")]
    ZeroDaysPerMonth,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{name}` is not in a valid format: {value:?}")]
    InvalidValue {
        name: &'static str,
        value: String,
    },

    #[error("unable to resolve host from `HOST_ADDRESS`: {0}")]
    UnresolvedHost(#[source] std::io::Error),

    #[error("invalid office policy: {0}")]
    Policy(#[from] PolicyError),
}

/// Request level validation failures
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("record dated {date} is outside of the requested month")]
    RecordOutsideMonth {
        date: NaiveDate,
    },

    #[error("ledger balance is out of range")]
    BalanceOverflow,

    #[error("ledger row dated {date} comes after {previous}")]
    UnorderedLedger {
        previous: NaiveDate,
        date: NaiveDate,
    },
}

impl actix_web::error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match self {
            ApiError::RecordOutsideMonth { .. } => StatusCode::BAD_REQUEST,
            ApiError::BalanceOverflow => StatusCode::BAD_REQUEST,
            ApiError::UnorderedLedger { .. } => StatusCode::BAD_REQUEST,
        }
    }
}
