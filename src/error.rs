use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealkit_shared::Error;
use serde::Serialize;
use serde_json::Value;

/// JSON envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

pub type ApiResult<T> = Result<T, ApiError>;

pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message: message.into(),
            data,
        }),
    )
}

pub fn created<T: Serialize>(
    message: impl Into<String>,
    data: T,
) -> (StatusCode, Json<Envelope<T>>) {
    let (_, body) = ok(message, data);

    (StatusCode::CREATED, body)
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Domain(#[from] Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Domain(err) => match err {
                Error::NotFound => StatusCode::NOT_FOUND,
                Error::BadParamInput(_) | Error::ValidationFailed(_) => StatusCode::BAD_REQUEST,
                Error::Validate(_) => StatusCode::UNPROCESSABLE_ENTITY,
                Error::Forbidden => StatusCode::FORBIDDEN,
                Error::Payment(_) => StatusCode::BAD_GATEWAY,
                Error::Cancelled | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Error::BadParamInput(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadParamInput(rejection.body_text()).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadParamInput(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, data) = match self {
            ApiError::Domain(Error::Validate(errors)) => (
                "validation failed".to_owned(),
                serde_json::to_value(errors.field_errors()).unwrap_or(Value::Null),
            ),
            ApiError::Domain(err @ (Error::Internal(_) | Error::Cancelled)) => {
                tracing::error!(error = %err, "request failed");

                ("internal server error".to_owned(), Value::Null)
            }
            ApiError::Domain(err @ Error::Payment(_)) => {
                tracing::error!(error = %err, "payment failed");

                (err.to_string(), Value::Null)
            }
            other => (other.to_string(), Value::Null),
        };

        (
            status,
            Json(Envelope {
                success: false,
                message,
                data,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use validator::Validate;

    use super::*;

    async fn body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (Error::NotFound, StatusCode::NOT_FOUND),
            (
                Error::BadParamInput("num".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::ValidationFailed("monthly".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (Error::Forbidden, StatusCode::FORBIDDEN),
            (Error::Payment("down".to_owned()), StatusCode::BAD_GATEWAY),
            (Error::Cancelled, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }

        assert_eq!(
            ApiError::Unauthorized("missing token".to_owned()).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_internal_error_is_hidden() {
        let response =
            ApiError::from(Error::Internal(anyhow::anyhow!("disk I/O error"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "internal server error");
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[tokio::test]
    async fn test_validation_errors_listed_in_data() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let response = ApiError::from(Error::Validate(errors)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body(response).await;
        assert!(json["data"]["name"].is_array());
    }
}
