use std::path::PathBuf;

use ahash::{HashMap, HashMapExt};
use anyhow::Context;
use metrics::gauge;
use rust_embed::Embed;

use crate::{
  error::FoodMatchError,
  model::{Dish, DishId},
};

#[derive(Embed)]
#[folder = "./assets"]
struct Assets;

/// Source of the dish records.
///
/// Providers are only queried once, when the engine is built.
pub trait CatalogProvider: Send + Sync {
  /// Human-readable description of where dishes are read from.
  fn source(&self) -> String;
  fn load(&self) -> impl Future<Output = anyhow::Result<Vec<Dish>>> + Send;
}

/// Reads dishes from a JSON document on disk.
#[derive(Clone, Debug)]
pub struct FileCatalog {
  path: PathBuf,
}

impl FileCatalog {
  pub fn new(path: impl Into<PathBuf>) -> FileCatalog {
    FileCatalog { path: path.into() }
  }
}

impl CatalogProvider for FileCatalog {
  fn source(&self) -> String {
    self.path.display().to_string()
  }

  async fn load(&self) -> anyhow::Result<Vec<Dish>> {
    let data = tokio::fs::read(&self.path).await.with_context(|| format!("could not read {}", self.path.display()))?;

    Ok(parse_dishes(&data)?)
  }
}

/// Reads the default dataset bundled with the library.
#[derive(Clone, Debug, Default)]
pub struct EmbeddedCatalog;

impl CatalogProvider for EmbeddedCatalog {
  fn source(&self) -> String {
    "embedded:dishes.json".to_string()
  }

  async fn load(&self) -> anyhow::Result<Vec<Dish>> {
    let file = Assets::get("dishes.json").context("default dataset is missing")?;

    Ok(parse_dishes(&file.data)?)
  }
}

/// Serves a fixed list of dishes from memory.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
  dishes: Vec<Dish>,
}

impl StaticCatalog {
  pub fn with_dishes(dishes: Vec<Dish>) -> StaticCatalog {
    StaticCatalog { dishes }
  }
}

impl CatalogProvider for StaticCatalog {
  fn source(&self) -> String {
    "static".to_string()
  }

  async fn load(&self) -> anyhow::Result<Vec<Dish>> {
    Ok(self.dishes.clone())
  }
}

pub fn parse_dishes(data: &[u8]) -> Result<Vec<Dish>, FoodMatchError> {
  serde_json::from_slice(data).map_err(|err| FoodMatchError::InvalidDataset(err.to_string()))
}

/// In-memory, read-only snapshot of the dishes.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
  dishes: Vec<Dish>,
  ids: HashMap<DishId, usize>,
}

impl Catalog {
  /// Build a catalog, checking that dish identifiers are unique.
  pub fn new(dishes: Vec<Dish>) -> Result<Catalog, FoodMatchError> {
    let mut ids = HashMap::with_capacity(dishes.len());

    for (idx, dish) in dishes.iter().enumerate() {
      if ids.insert(dish.id, idx).is_some() {
        return Err(FoodMatchError::InvalidDataset(format!("duplicate dish id {}", dish.id)));
      }
    }

    Ok(Catalog { dishes, ids })
  }

  /// Load the catalog from a provider.
  ///
  /// This never fails: if the dishes cannot be read or are invalid, the error
  /// is logged and an empty catalog is returned. Matching against it will
  /// then report the dataset as unavailable.
  pub async fn load<P: CatalogProvider>(provider: &P) -> Catalog {
    tracing::info!(source = provider.source(), "loading dishes");

    let catalog = match provider.load().await {
      Ok(dishes) => Catalog::new(dishes).map_err(anyhow::Error::from),
      Err(err) => Err(err),
    };

    match catalog {
      Ok(catalog) => {
        tracing::info!(source = provider.source(), count = catalog.len(), "loaded {} dishes", catalog.len());

        gauge!("foodmatch_catalog_dishes").set(catalog.len() as f64);

        catalog
      }

      Err(err) => {
        tracing::error!(source = provider.source(), error = format!("{err:#}"), "failed to load dishes, starting with an empty catalog");

        gauge!("foodmatch_catalog_dishes").set(0.0);

        Catalog::default()
      }
    }
  }

  pub fn dishes(&self) -> &[Dish] {
    &self.dishes
  }

  pub fn get(&self, id: DishId) -> Option<&Dish> {
    self.ids.get(&id).and_then(|idx| self.dishes.get(*idx))
  }

  pub fn len(&self) -> usize {
    self.dishes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.dishes.is_empty()
  }
}
