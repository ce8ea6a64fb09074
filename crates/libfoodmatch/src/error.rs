use crate::model::DishId;

#[derive(Debug, thiserror::Error)]
pub enum FoodMatchError {
  #[error("dish dataset not loaded")]
  DatasetUnavailable,
  #[error("dish {0} not found")]
  DishNotFound(DishId),
  #[error("invalid dataset: {0}")]
  InvalidDataset(String),
  #[error(transparent)]
  OtherError(#[from] anyhow::Error),
}
