use axum::{Json, extract::State};
use axum_extra::extract::{Query, WithRejection};
use libfoodmatch::prelude::*;
use tracing::instrument;
use validator::Validate;

use crate::api::{
  AppState,
  dto::{MatchParams, MatchResponse},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

#[instrument(skip_all)]
pub async fn match_dishes(
  State(state): State<AppState>,
  WithRejection(Query(query), _): WithRejection<Query<MatchParams>, AppError>,
  TypedJson(prefs): TypedJson<Preferences>,
) -> Result<Json<MatchResponse>, AppError> {
  query.validate()?;

  let limit = query.limit.unwrap_or(state.foodmatch.config().default_limit);
  let recommendations = state.foodmatch.recommend(&prefs, Some(limit))?;

  Ok(Json(MatchResponse { recommendations, limit }))
}
