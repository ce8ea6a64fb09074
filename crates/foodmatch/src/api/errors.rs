use std::{borrow::Cow, error::Error};

use axum::{
  Json,
  extract::rejection::PathRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use axum_extra::extract::QueryRejection;
use libfoodmatch::prelude::*;
use serde_json::json;
use tracing::*;
use validator::ValidationErrors;

pub(crate) struct ApiError(pub StatusCode, pub String, pub Option<Vec<String>>);

#[derive(Debug, thiserror::Error)]
#[allow(dead_code)]
pub enum AppError {
  #[error("bad request")]
  BadRequest,
  #[error("missing resource")]
  ResourceNotFound,
  #[error("dish not found")]
  DishNotFound(DishId),
  #[error("dish dataset not loaded")]
  DatasetUnavailable,
  #[error("server error, please check your logs for more information")]
  ServerError,
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),

  #[error("invalid configuration: {0}")]
  ConfigError(String),

  #[error("invalid query parameter")]
  InvalidQuery(#[from] QueryRejection),
  #[error("invalid path parameter")]
  InvalidPath(#[from] PathRejection),
  #[error("request failed validation")]
  ValidationFailed(#[from] ValidationErrors),
}

impl From<FoodMatchError> for AppError {
  fn from(value: FoodMatchError) -> Self {
    match value {
      FoodMatchError::DatasetUnavailable => AppError::DatasetUnavailable,
      FoodMatchError::DishNotFound(id) => AppError::DishNotFound(id),
      FoodMatchError::InvalidDataset(err) => AppError::OtherError(anyhow::anyhow!("invalid dataset: {err}")),
      FoodMatchError::OtherError(err) => AppError::OtherError(err),
    }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    match &self {
      AppError::ResourceNotFound | AppError::DishNotFound(_) | AppError::InvalidQuery(_) | AppError::InvalidPath(_) | AppError::ValidationFailed(_) | AppError::BadRequest => {
        info!(error = self.source(), "{}", self.to_string())
      }
      _ => error!(error = self.source(), "{}", self.to_string()),
    }

    ApiError::from(&self).into_response()
  }
}

impl From<&AppError> for ApiError {
  fn from(value: &AppError) -> Self {
    match value {
      AppError::BadRequest => ApiError(StatusCode::BAD_REQUEST, value.to_string(), None),
      AppError::ResourceNotFound | AppError::DishNotFound(_) => ApiError(StatusCode::NOT_FOUND, value.to_string(), None),
      AppError::DatasetUnavailable => ApiError(StatusCode::INTERNAL_SERVER_ERROR, value.to_string(), None),
      AppError::InvalidQuery(err) => ApiError(StatusCode::BAD_REQUEST, value.to_string(), Some(vec![err.to_string()])),
      AppError::InvalidPath(err) => ApiError(StatusCode::BAD_REQUEST, value.to_string(), Some(vec![err.to_string()])),
      AppError::ValidationFailed(errs) => ApiError(StatusCode::UNPROCESSABLE_ENTITY, value.to_string(), Some(validation_messages(errs))),
      AppError::OtherError(inner) if inner.is::<AppError>() => match inner.downcast_ref::<AppError>() {
        Some(inner) => inner.into(),
        _ => ApiError(StatusCode::INTERNAL_SERVER_ERROR, value.to_string(), None),
      },
      _ => ApiError(StatusCode::INTERNAL_SERVER_ERROR, value.to_string(), None),
    }
  }
}

pub(crate) fn validation_messages(errs: &ValidationErrors) -> Vec<String> {
  errs.field_errors().into_values().flat_map(|f| f.iter().cloned()).filter_map(|f| f.message.map(Cow::into_owned)).collect()
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let payload = match self.2 {
      Some(details) => json!({
          "message": self.1,
          "details": details,
      }),
      None => json!({
          "message": self.1,
      }),
    };

    (self.0, Json(payload)).into_response()
  }
}
