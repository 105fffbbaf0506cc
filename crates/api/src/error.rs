use std::{fmt, io};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use runtime::TransitionError;

use crate::views::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Transition(TransitionError),
    ResetNotConfirmed,
    SessionUnavailable,
    Export(io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Transition(_) => StatusCode::CONFLICT,
            Self::ResetNotConfirmed => StatusCode::BAD_REQUEST,
            Self::SessionUnavailable | Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transition(err) => write!(f, "{err}"),
            Self::ResetNotConfirmed => write!(f, "reset must be confirmed"),
            Self::SessionUnavailable => write!(f, "game session is unavailable"),
            Self::Export(err) => write!(f, "history export failed: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transition(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::ResetNotConfirmed | Self::SessionUnavailable => None,
        }
    }
}

impl From<TransitionError> for ApiError {
    fn from(err: TransitionError) -> Self {
        Self::Transition(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{self}");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
