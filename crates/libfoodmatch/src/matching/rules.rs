use itertools::Itertools;

use crate::matching::{NormalizedDish, NormalizedQuery, Rule};

/// Rules and their weights, in the order reasons are reported.
pub(crate) static RULES: [(&dyn Rule, i64); 5] = [(&TasteMatch, 3), (&IngredientsMatch, 3), (&RestrictedItem, -5), (&CookingMethodMatch, 2), (&OccasionMatch, 1)];

pub(crate) struct TasteMatch;

impl Rule for TasteMatch {
  fn name(&self) -> &'static str {
    "taste_match"
  }

  fn subjects(&self, query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>) -> Vec<String> {
    if query.taste.is_empty() || query.taste != dish.taste {
      return vec![];
    }

    vec![dish.source.taste.clone()]
  }

  fn reason(&self, subject: &str, weight: i64) -> String {
    format!("Matches taste: {subject} ({weight:+})")
  }
}

/// Fires at most once, however many preferred ingredients the dish contains.
pub(crate) struct IngredientsMatch;

impl Rule for IngredientsMatch {
  fn name(&self) -> &'static str {
    "ingredients_match"
  }

  fn subjects(&self, query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>) -> Vec<String> {
    let matches = query.ingredients.intersection(&dish.ingredients).sorted().join(", ");

    match matches.is_empty() {
      true => vec![],
      false => vec![matches],
    }
  }

  fn reason(&self, subject: &str, weight: i64) -> String {
    format!("Contains preferred ingredient(s): {subject} ({weight:+})")
  }
}

/// Penalizes a dish once per restriction found in its ingredients or dietary tags.
pub(crate) struct RestrictedItem;

impl Rule for RestrictedItem {
  fn name(&self) -> &'static str {
    "restricted_item"
  }

  fn subjects(&self, query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>) -> Vec<String> {
    query
      .restrictions
      .iter()
      .filter(|token| !token.is_empty())
      .filter(|token| dish.ingredients.contains(token.as_str()) || dish.dietary_tags.contains(token.as_str()))
      .cloned()
      .collect()
  }

  fn reason(&self, subject: &str, weight: i64) -> String {
    format!("Contains restricted item: {subject} ({weight:+})")
  }
}

pub(crate) struct CookingMethodMatch;

impl Rule for CookingMethodMatch {
  fn name(&self) -> &'static str {
    "cooking_method_match"
  }

  fn subjects(&self, query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>) -> Vec<String> {
    if query.cooking_method.is_empty() || query.cooking_method != dish.cooking_method {
      return vec![];
    }

    vec![dish.source.cooking_method.clone()]
  }

  fn reason(&self, subject: &str, weight: i64) -> String {
    format!("Cooking method matches: {subject} ({weight:+})")
  }
}

/// Reports the occasion as the user wrote it, not as the dish lists it.
pub(crate) struct OccasionMatch;

impl Rule for OccasionMatch {
  fn name(&self) -> &'static str {
    "occasion_match"
  }

  fn subjects(&self, query: &NormalizedQuery<'_>, dish: &NormalizedDish<'_>) -> Vec<String> {
    if query.occasion.is_empty() || !dish.occasions.contains(&query.occasion) {
      return vec![];
    }

    vec![query.source.occasion.clone().unwrap_or_default()]
  }

  fn reason(&self, subject: &str, weight: i64) -> String {
    format!("Suitable for: {subject} ({weight:+})")
  }
}
