use libfoodmatch::{normalize_token, parse_restriction_token, prelude::*};
use serde_json::json;

#[tokio::test]
async fn recommend_from_embedded_catalog() {
  let foodmatch = FoodMatch::new(EmbeddedCatalog).build().await;

  let prefs = Preferences::builder().taste("Sweet").occasion("Merienda").restrictions(&["no-pork"]).build();
  let results = foodmatch.recommend(&prefs, None).unwrap();

  assert_eq!(results.len(), 3);

  assert_eq!(results[0].name, "Tinubong");
  assert_eq!(results[0].score, 4);
  assert_eq!(results[0].reason, "Matches taste: sweet (+3); Suitable for: Merienda (+1)");

  assert_eq!(results[1].name, "Patupat");
  assert_eq!(results[1].score, 4);

  // Empanada is a merienda, but the pork penalty drops it below dishes that did not match at all.
  assert_eq!(results[2].name, "Sinanglao");
  assert_eq!(results[2].score, 0);
  assert_eq!(results[2].reason, "No strong positive matches; showing as lower-scoring suggestion");

  let all = foodmatch.recommend(&prefs, Some(foodmatch.dishes().len())).unwrap();
  let empanada = all.iter().find(|r| r.name == "Vigan Empanada").unwrap();

  assert_eq!(empanada.score, -4);
  assert_eq!(empanada.reason, "Contains restricted item: pork (-5); Suitable for: Merienda (+1)");
}

#[tokio::test]
async fn recommendations_serialize() {
  let foodmatch = FoodMatch::new(EmbeddedCatalog).build().await;

  let prefs = Preferences::builder().ingredients(&["bile", "Ginger"]).cooking_method("GRILLED").build();
  let results = foodmatch.recommend(&prefs, Some(1)).unwrap();

  serde_json_assert::assert_json_eq!(
    serde_json::to_value(&results).unwrap(),
    json!([
      {
        "id": 9,
        "name": "Kilawen nga Kalding",
        "image": "kilawen.jpg",
        "reason": "Contains preferred ingredient(s): bile, ginger (+3); Cooking method matches: grilled (+2)",
        "score": 5
      }
    ])
  );
}

#[test]
fn tokens() {
  assert_eq!(normalize_token("Sukang-Iloko"), "sukang iloko");
  assert_eq!(parse_restriction_token("No_Sukang-Iloko"), "sukang iloko");
}
