//! JSON body extraction with API-shaped rejections.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Message returned when a body cannot be read as the expected JSON.
pub const INVALID_BODY: &str = "Invalid request body!";

/// Like `axum::Json`, but rejects with an [`ApiError`] so malformed bodies
/// get the same error envelope as every other client error.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(ApiError::BadRequest {
                    message: INVALID_BODY.to_string(),
                    detail: Some(rejection.body_text()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use notepad_core::NoteDraft;

    use super::*;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn extracts_valid_body() {
        let request = json_request(r#"{"title": "a"}"#);
        let JsonBody(draft) = JsonBody::<NoteDraft>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(draft.title.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request() {
        let err = JsonBody::<NoteDraft>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), INVALID_BODY);
    }

    #[tokio::test]
    async fn wrong_field_type_is_bad_request() {
        let err = JsonBody::<NoteDraft>::from_request(json_request(r#"{"title": 5}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .body(Body::from(r#"{"title": "a"}"#))
            .unwrap();
        let err = JsonBody::<NoteDraft>::from_request(request, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
