use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorDetail;
use mergington::errors::ActivityError;
use mergington::log;

/// Maps a rejected request onto its HTTP status and `{"detail": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    Activity(ActivityError),
    /// The query string was missing or malformed.
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activity(
                ActivityError::NotFoundActivity(_) | ActivityError::NotFoundParticipant { .. },
            ) => StatusCode::NOT_FOUND,
            ApiError::Activity(ActivityError::CapacityExceeded { .. }) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Activity(err) => err.to_string(),
            ApiError::InvalidQuery(message) => message.clone(),
        }
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self::Activity(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::warn!("Rejected request ({}): {:?}", status, self);

        let body = ErrorDetail {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}
