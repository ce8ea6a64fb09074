use std::sync::Arc;

use bon::bon;

use crate::{
  catalog::{Catalog, CatalogProvider},
  error::FoodMatchError,
  model::{Dish, DishId, Preferences, Recommendation},
  scoring::{self, DEFAULT_LIMIT},
};

#[derive(Clone, Debug)]
pub struct FoodMatchConfig {
  /// Number of recommendations returned when the caller does not ask for a specific count.
  pub default_limit: usize,
}

impl Default for FoodMatchConfig {
  fn default() -> Self {
    FoodMatchConfig { default_limit: DEFAULT_LIMIT }
  }
}

/// The main entrypoint for using the library.
///
/// `FoodMatch` owns a read-only snapshot of the dish catalog, loaded once
/// from a [`CatalogProvider`] when the instance is built, and scores dishes
/// against user preferences.
///
/// # Examples
///
/// ```rust
/// # use libfoodmatch::prelude::*;
///
/// # tokio_test::block_on(async {
///   let foodmatch = FoodMatch::new(EmbeddedCatalog).build().await;
///
///   let prefs = Preferences::builder().taste("sweet").occasion("merienda").build();
///
///   for recommendation in foodmatch.recommend(&prefs, None).unwrap() {
///     println!("{} ({}): {}", recommendation.name, recommendation.score, recommendation.reason);
///   }
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct FoodMatch {
  catalog: Arc<Catalog>,
  config: FoodMatchConfig,
}

#[bon]
impl FoodMatch {
  /// Create a new instance from the dishes returned by `provider`.
  ///
  /// The catalog is loaded once. If loading fails, the instance starts with
  /// an empty catalog and every call to [`FoodMatch::recommend`] reports the
  /// dataset as unavailable.
  ///
  /// This struct can be safely cloned and sent across thread boundaries.
  #[allow(clippy::new_ret_no_self)]
  #[builder(start_fn = new, finish_fn = build)]
  pub async fn _new<P: CatalogProvider>(#[builder(start_fn)] provider: P, #[builder(default)] config: FoodMatchConfig) -> FoodMatch {
    FoodMatch::with_catalog(Catalog::load(&provider).await, config)
  }
}

impl FoodMatch {
  pub fn with_catalog(catalog: Catalog, config: FoodMatchConfig) -> FoodMatch {
    FoodMatch { catalog: Arc::new(catalog), config }
  }

  /// Whether any dish was loaded.
  pub fn is_ready(&self) -> bool {
    !self.catalog.is_empty()
  }

  pub fn config(&self) -> &FoodMatchConfig {
    &self.config
  }

  /// All dishes, in catalog order.
  pub fn dishes(&self) -> &[Dish] {
    self.catalog.dishes()
  }

  pub fn get_dish(&self, id: DishId) -> Result<&Dish, FoodMatchError> {
    self.catalog.get(id).ok_or(FoodMatchError::DishNotFound(id))
  }

  /// Score every dish and return the best `limit` ones.
  ///
  /// Without a `limit`, the configured default is used.
  pub fn recommend(&self, prefs: &Preferences, limit: Option<usize>) -> Result<Vec<Recommendation>, FoodMatchError> {
    scoring::recommend(self.catalog.dishes(), prefs, limit.unwrap_or(self.config.default_limit))
  }
}
