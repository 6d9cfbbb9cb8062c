//! ApiError - What a failed request looks like on the wire
//!
//! Every error is a plain-text body with the status below:
//!
//! | Variant      | Status |
//! |--------------|--------|
//! | `BadRequest` | 400    |
//! | `Forbidden`  | 403    |
//! | `NotFound`   | 404    |
//! | `Internal`   | 500    |

use articles_domain::InvalidArticleId;
use articles_usecase::ServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => ApiError::BadRequest(err.to_string()),
            ServiceError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            ServiceError::Storage { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

// Syntax errors, missing fields and wrong field types are all 400
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid JSON body: {}", err))
    }
}

impl From<InvalidArticleId> for ApiError {
    fn from(err: InvalidArticleId) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use articles_domain::{ArticleId, ValidationError};

    #[test]
    fn test_service_error_mapping() {
        let err: ApiError = ServiceError::Validation(ValidationError::new("title is required")).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "title is required");

        let err: ApiError = ServiceError::NotFound {
            id: ArticleId::new(3),
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: ApiError = ServiceError::Storage {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_json_errors_are_bad_request() {
        let err: ApiError = serde_json::from_str::<articles_domain::CreateArticleRequest>("{bad")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("invalid JSON body: "));
    }

    #[test]
    fn test_invalid_id_is_bad_request() {
        let err: ApiError = "abc".parse::<ArticleId>().unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
