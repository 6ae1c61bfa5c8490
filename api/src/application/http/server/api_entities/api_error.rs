use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kondate_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Wire shape of every error response: `{ "error": "..." }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            // Provider, extraction and validation failures all collapse to the
            // same opaque message; the detail stays in the logs.
            other => {
                tracing::error!("meal plan generation failed: {}", other);
                ApiError::InternalServerError("献立の生成に失敗しました".to_string())
            }
        }
    }
}

/// JSON extractor that also runs `validator` rules, turning both malformed
/// bodies and rule violations into 400 responses.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .into_values()
                .flat_map(|field_errors| {
                    field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>()
                .join(", ");

            if message.is_empty() {
                ApiError::BadRequest("リクエストの形式が正しくありません".to_string())
            } else {
                ApiError::BadRequest(message)
            }
        })?;

        Ok(ValidateJson(value))
    }
}
