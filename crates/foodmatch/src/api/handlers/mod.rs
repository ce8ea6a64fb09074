mod dishes;
mod match_dishes;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::{AppState, errors::AppError};

pub(crate) use self::dishes::{get_dish, list_dishes};
pub(crate) use self::match_dishes::match_dishes;

pub async fn not_found() -> impl IntoResponse {
  AppError::ResourceNotFound
}

pub async fn healthz() -> StatusCode {
  StatusCode::OK
}

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
  match state.foodmatch.is_ready() {
    true => StatusCode::OK,
    false => StatusCode::SERVICE_UNAVAILABLE,
  }
}

pub async fn prometheus(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
  match state.prometheus {
    Some(handle) => Ok(handle.render()),
    None => Err(AppError::ResourceNotFound),
  }
}
