use std::time::Instant;

use metrics::histogram;
use tracing::instrument;

use crate::{
  error::FoodMatchError,
  matching::{FALLBACK_REASON, NormalizedDish, NormalizedQuery, rules::RULES, run_rules},
  model::{Dish, Preferences, Recommendation},
};

pub const DEFAULT_LIMIT: usize = 3;

/// Score every dish of the catalog against the given preferences.
///
/// Results are returned in catalog order. Every dish gets a reason trail, the
/// fallback reason being used when no rule matched.
#[instrument(name = "compute_scores", skip_all, fields(dishes = dishes.len()))]
pub fn score(dishes: &[Dish], prefs: &Preferences) -> Vec<Recommendation> {
  let then = Instant::now();
  let query = NormalizedQuery::new(prefs);

  tracing::debug!(
    taste = %query.taste,
    ingredients = ?query.ingredients,
    restrictions = ?query.restrictions,
    cooking_method = %query.cooking_method,
    occasion = %query.occasion,
    "normalized preferences"
  );

  let results = dishes
    .iter()
    .map(|dish| {
      let (score, mut reasons) = run_rules(&query, &NormalizedDish::new(dish), &RULES);

      if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
      }

      tracing::debug!(dish_id = dish.id, score = score, "computed score");

      histogram!("foodmatch_scoring_scores").record(score as f64);

      Recommendation {
        id: dish.id,
        name: dish.name.clone(),
        image: dish.image.clone(),
        reason: reasons.join("; "),
        score,
      }
    })
    .collect::<Vec<_>>();

  histogram!("foodmatch_scoring_latency_seconds").record(then.elapsed().as_secs_f64());

  results
}

/// Order recommendations by descending score, then descending name, and keep the first `limit`.
pub fn rank(mut results: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
  // Both keys descending: equal scores come out in reverse alphabetical order.
  results.sort_by(|lhs, rhs| rhs.score.cmp(&lhs.score).then_with(|| rhs.name.cmp(&lhs.name)));
  results.truncate(limit);
  results
}

/// Score and rank the catalog, returning at most `limit` recommendations.
///
/// An empty catalog is an error, as opposed to a catalog where nothing
/// matched, which still returns the best-ranked dishes.
pub fn recommend(dishes: &[Dish], prefs: &Preferences, limit: usize) -> Result<Vec<Recommendation>, FoodMatchError> {
  if dishes.is_empty() {
    return Err(FoodMatchError::DatasetUnavailable);
  }

  let results = rank(score(dishes, prefs), limit);

  tracing::info!(count = results.len(), "top {} recommendations computed", results.len());

  Ok(results)
}
