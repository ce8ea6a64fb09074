use axum::{
  Json, RequestExt,
  body::Body,
  extract::{FromRequest, rejection::JsonRejection},
  http::{Request, StatusCode},
  response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::api::errors::{ApiError, validation_messages};

/// JSON body extractor that also runs the payload's validation rules.
///
/// Undecodable bodies are rejected with `400`, bodies without a JSON content
/// type with `415`, and bodies that decode but fail validation with `422`.
pub struct TypedJson<T>(pub T);

pub enum TypedJsonRejection {
  Decode(JsonRejection),
  Invalid(ValidationErrors),
}

impl From<TypedJsonRejection> for ApiError {
  fn from(rejection: TypedJsonRejection) -> Self {
    match rejection {
      TypedJsonRejection::Decode(JsonRejection::JsonSyntaxError(_)) => ApiError(StatusCode::BAD_REQUEST, "invalid payload format".to_string(), None),
      TypedJsonRejection::Decode(JsonRejection::JsonDataError(err)) => ApiError(StatusCode::BAD_REQUEST, "payload does not match expected format".to_string(), Some(vec![err.body_text()])),
      TypedJsonRejection::Decode(JsonRejection::MissingJsonContentType(_)) => ApiError(StatusCode::UNSUPPORTED_MEDIA_TYPE, "invalid media type, expected application/json".to_string(), None),
      TypedJsonRejection::Decode(err) => ApiError(err.status(), "invalid payload".to_string(), Some(vec![err.body_text()])),
      TypedJsonRejection::Invalid(errs) => ApiError(StatusCode::UNPROCESSABLE_ENTITY, "payload failed validation".to_string(), Some(validation_messages(&errs))),
    }
  }
}

impl IntoResponse for TypedJsonRejection {
  fn into_response(self) -> Response {
    let err = ApiError::from(self);

    tracing::info!(status = err.0.as_u16(), details = ?err.2, "{}", err.1);

    err.into_response()
  }
}

impl<T, S> FromRequest<S> for TypedJson<T>
where
  T: DeserializeOwned + Validate + 'static,
  S: Send + Sync,
{
  type Rejection = TypedJsonRejection;

  async fn from_request(request: Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
    let Json(payload) = request.extract::<Json<T>, _>().await.map_err(TypedJsonRejection::Decode)?;

    payload.validate().map_err(TypedJsonRejection::Invalid)?;

    Ok(TypedJson(payload))
  }
}
