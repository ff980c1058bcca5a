use super::types::ErrorResponse;
use crate::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Caller-facing failures. Messages are fixed; causes stay in the logs.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid prompt")]
    InvalidPrompt,

    #[error("Invalid Hugging Face token. Please contact the site administrator.")]
    InvalidToken,

    #[error("Penguin wisdom is loading... Please try again in 30 seconds.")]
    WarmingUp,

    #[error("The penguin council is in session. Please try again shortly.")]
    Failure,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidPrompt => StatusCode::BAD_REQUEST,
            Self::WarmingUp => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidToken | Self::Failure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::UpstreamUnauthorized => Self::InvalidToken,
            Error::UpstreamUnavailable => Self::WarmingUp,
            _ => Self::Failure,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upstream_errors_map_to_api_errors() {
        assert_eq!(
            ApiError::from(Error::UpstreamUnauthorized),
            ApiError::InvalidToken
        );
        assert_eq!(
            ApiError::from(Error::UpstreamUnavailable),
            ApiError::WarmingUp
        );
        assert_eq!(
            ApiError::from(Error::UpstreamStatus { status: 500 }),
            ApiError::Failure
        );
        assert_eq!(ApiError::from(Error::decode("bad")), ApiError::Failure);
        assert_eq!(ApiError::from(Error::config("missing")), ApiError::Failure);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::InvalidPrompt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::WarmingUp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::Failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
