mod error;
mod foodmatch;
mod matching;
mod model;

pub mod catalog;
pub mod scoring;


pub use crate::matching::normalize::{normalize_token, parse_restriction_token};

pub mod prelude {
  pub use crate::catalog::{Catalog, CatalogProvider, EmbeddedCatalog, FileCatalog, StaticCatalog};
  pub use crate::error::FoodMatchError;
  pub use crate::foodmatch::{FoodMatch, FoodMatchConfig};
  pub use crate::model::{Dish, DishId, Preferences, Recommendation};
}
