use libfoodmatch::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub(crate) struct MatchParams {
  #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
  pub limit: Option<usize>,
}

#[derive(Serialize)]
pub(crate) struct MatchResponse {
  pub recommendations: Vec<Recommendation>,
  pub limit: usize,
}
