//! API error handling
//!
//! Every failure leaves the API as `{ "code", "description", "details"? }`
//! where `code` is the stable catalog code of the condition.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use validator::{ValidationErrors, ValidationErrorsKind};

use domain_profile::ProfileError;

pub const VALIDATION_CODE: &str = "#COMANDA-ERROR-VALIDATION";
pub const UNAUTHORIZED_CODE: &str = "#COMANDA-ERROR-UNAUTHORIZED";
pub const FORBIDDEN_CODE: &str = "#COMANDA-ERROR-FORBIDDEN";
pub const INTERNAL_CODE: &str = "#COMANDA-ERROR-INTERNAL";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("The request is invalid.")]
    Validation(Vec<String>),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing permission: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    /// Catalog code of the error
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Profile(e) => e.code(),
            ApiError::Validation(_) => VALIDATION_CODE,
            ApiError::Unauthorized => UNAUTHORIZED_CODE,
            ApiError::Forbidden(_) => FORBIDDEN_CODE,
            ApiError::Internal(_) => INTERNAL_CODE,
        }
    }

    /// HTTP status the error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Profile(ProfileError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Profile(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Profile(e) if e.is_conflict() => StatusCode::CONFLICT,
            ApiError::Profile(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Validation error with a single detail line
    pub fn invalid(detail: impl Into<String>) -> Self {
        ApiError::Validation(vec![detail.into()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Infrastructure details stay in the logs
        let (description, details) = match &self {
            ApiError::Profile(ProfileError::Repository(source)) => {
                error!(error = %source, "Repository failure");
                ("An unexpected error occurred.".to_string(), None)
            }
            ApiError::Internal(message) => {
                error!(error = %message, "Internal failure");
                ("An unexpected error occurred.".to_string(), None)
            }
            ApiError::Profile(e) => (e.description(), None),
            ApiError::Validation(details) => (self.to_string(), Some(details.clone())),
            ApiError::Unauthorized => ("Missing or invalid bearer token.".to_string(), None),
            ApiError::Forbidden(_) => (self.to_string(), None),
        };

        let body = ErrorResponse {
            code: self.code().to_string(),
            description,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Vec::new();
        flatten(&errors, "", &mut details);
        details.sort();
        ApiError::Validation(details)
    }
}

/// Turns nested validator output into `path: message` lines
fn flatten(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed the '{}' rule", e.code));
                    out.push(format!("{}: {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PortError;

    #[test]
    fn test_catalog_statuses() {
        let cases = [
            (ApiError::from(ProfileError::CustomerDoesNotExist), StatusCode::NOT_FOUND),
            (ApiError::from(ProfileError::OwnerDoesNotExist), StatusCode::NOT_FOUND),
            (ApiError::from(ProfileError::AddressDoesNotExist), StatusCode::NOT_FOUND),
            (ApiError::from(ProfileError::ProfileAlreadyExists), StatusCode::CONFLICT),
            (ApiError::from(ProfileError::AddressAlreadyAssigned), StatusCode::CONFLICT),
            (ApiError::invalid("x"), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden("permissions.customers.view".into()), StatusCode::FORBIDDEN),
        ];

        for (error, status) in cases {
            assert_eq!(error.status(), status, "{:?}", error);
        }
    }

    #[test]
    fn test_repository_failure_is_internal() {
        let error = ApiError::from(ProfileError::from(PortError::connection("refused")));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), INTERNAL_CODE);
    }
}
