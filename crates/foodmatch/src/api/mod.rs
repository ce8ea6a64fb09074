use axum::{
  Router, middleware,
  routing::{get, post},
};
use libfoodmatch::prelude::*;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{api::config::Config, trace};

pub mod config;
pub mod dto;
pub mod errors;

pub mod handlers;
mod middlewares;

#[derive(Clone)]
pub struct AppState {
  pub config: Config,
  pub prometheus: Option<PrometheusHandle>,
  pub foodmatch: FoodMatch,
}

/// Load the dishes and build the application router.
pub async fn routes(config: &Config) -> anyhow::Result<Router> {
  let foodmatch_config = FoodMatchConfig { default_limit: config.match_limit };

  let foodmatch = match &config.dishes_path {
    Some(path) => FoodMatch::new(FileCatalog::new(path)).config(foodmatch_config).build().await,
    None => FoodMatch::new(EmbeddedCatalog).config(foodmatch_config).build().await,
  };

  let prometheus = match config.enable_prometheus {
    true => Some(trace::build_prometheus()?),
    false => None,
  };

  Ok(router(AppState {
    config: config.clone(),
    prometheus,
    foodmatch,
  }))
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/dishes", get(handlers::list_dishes))
    .route("/dish/{id}", get(handlers::get_dish))
    .route("/match", post(handlers::match_dishes))
    .fallback(handlers::not_found)
    .layer(
      ServiceBuilder::new()
        .layer(TraceLayer::new_for_http().make_span_with(middlewares::create_request_span))
        .layer(middleware::from_fn(middlewares::metrics)),
    )
    // The routes below will not go through the observability middlewares above
    .route("/healthz", get(handlers::healthz))
    .route("/readyz", get(handlers::readyz))
    .route("/metrics", get(handlers::prometheus))
    .layer(middleware::from_fn(middlewares::logging::api_logger))
    .layer(middleware::from_fn(middlewares::request_id))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
