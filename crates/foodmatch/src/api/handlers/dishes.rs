use axum::{
  Json,
  extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use libfoodmatch::prelude::*;
use tracing::instrument;

use crate::api::{AppState, errors::AppError};

#[instrument(skip_all)]
pub async fn list_dishes(State(state): State<AppState>) -> Json<Vec<Dish>> {
  Json(state.foodmatch.dishes().to_vec())
}

#[instrument(skip_all)]
pub async fn get_dish(State(state): State<AppState>, WithRejection(Path(id), _): WithRejection<Path<DishId>, AppError>) -> Result<Json<Dish>, AppError> {
  Ok(Json(state.foodmatch.get_dish(id)?.clone()))
}
