use ahash::HashSet;

use crate::model::{Dish, Preferences};

pub(crate) mod normalize;
pub(crate) mod rules;

use self::normalize::{normalize_token, parse_restriction_token};

pub(crate) const FALLBACK_REASON: &str = "No strong positive matches; showing as lower-scoring suggestion";

/// Preferences, normalized once per matching call.
pub(crate) struct NormalizedQuery<'p> {
  pub source: &'p Preferences,
  pub taste: String,
  pub ingredients: HashSet<String>,
  pub restrictions: Vec<String>,
  pub cooking_method: String,
  pub occasion: String,
}

impl<'p> NormalizedQuery<'p> {
  pub(crate) fn new(prefs: &'p Preferences) -> NormalizedQuery<'p> {
    NormalizedQuery {
      source: prefs,
      taste: normalize_token(prefs.preferred_taste.as_deref().unwrap_or_default()),
      ingredients: tokens(&prefs.ingredients_preference).collect(),
      // Empty phrases are skipped, phrases that only normalize to an empty token are kept and never match.
      restrictions: prefs.dietary_restrictions.iter().filter(|r| !r.is_empty()).map(|r| parse_restriction_token(r)).collect(),
      cooking_method: normalize_token(prefs.cooking_method.as_deref().unwrap_or_default()),
      occasion: normalize_token(prefs.occasion.as_deref().unwrap_or_default()),
    }
  }
}

/// Dish fields, normalized for comparison against a [`NormalizedQuery`].
pub(crate) struct NormalizedDish<'d> {
  pub source: &'d Dish,
  pub taste: String,
  pub ingredients: HashSet<String>,
  pub dietary_tags: HashSet<String>,
  pub cooking_method: String,
  pub occasions: HashSet<String>,
}

impl<'d> NormalizedDish<'d> {
  pub(crate) fn new(dish: &'d Dish) -> NormalizedDish<'d> {
    NormalizedDish {
      source: dish,
      taste: normalize_token(&dish.taste),
      ingredients: tokens(&dish.ingredients).collect(),
      dietary_tags: tokens(&dish.dietary_tags).collect(),
      cooking_method: normalize_token(&dish.cooking_method),
      occasions: tokens(&dish.occasions).collect(),
    }
  }
}

// Values normalizing to nothing are dropped so two blank entries never intersect.
fn tokens(values: &[String]) -> impl Iterator<Item = String> + '_ {
  values.iter().map(|value| normalize_token(value)).filter(|token| !token.is_empty())
}

/// One of the independent scoring rules applied to every dish.
///
/// A rule returns the subjects it matched on. Every subject applies the rule's
/// weight once and contributes one reason to the trail.
pub(crate) trait Rule: Send + Sync {
  fn name(&self) -> &'static str;
  fn subjects(&self, query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>) -> Vec<String>;
  fn reason(&self, subject: &str, weight: i64) -> String;
}

/// Evaluate all rules in order and return the score and the reason trail.
pub(crate) fn run_rules(query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>, rules: &[(&dyn Rule, i64)]) -> (i64, Vec<String>) {
  let mut reasons = Vec::new();

  let score = rules.iter().fold(0i64, |score, (rule, weight)| {
    let subjects = rule.subjects(query, dish);

    if !subjects.is_empty() {
      tracing::trace!(rule = rule.name(), dish_id = dish.source.id, matches = subjects.len(), "rule matched");
    }

    subjects.iter().fold(score, |score, subject| {
      reasons.push(rule.reason(subject, *weight));

      score + weight
    })
  });

  (score, reasons)
}
