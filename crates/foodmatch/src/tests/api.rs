use axum::body::Bytes;
use axum_test::TestServer;
use libfoodmatch::prelude::*;
use serde_json::json;

use crate::{
  api::{self, config::Config},
  tests::{dishes, state},
};

fn server(dishes: Vec<Dish>) -> TestServer {
  TestServer::new(api::router(state(Config::default(), dishes))).unwrap()
}

#[tokio::test]
async fn list_dishes() {
  let server = server(dishes());
  let response = server.get("/dishes").await;

  assert_eq!(response.status_code(), 200);

  let dishes = response.json::<Vec<Dish>>();

  assert_eq!(dishes.len(), 4);
  assert_eq!(dishes.iter().map(|dish| dish.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

  let body = response.json::<serde_json::Value>();

  assert_eq!(body[0]["description"], json!("Vegetables simmered with bagoong and pork."));
  assert_eq!(body[2]["description"], json!(""));
}

#[tokio::test]
async fn list_dishes_when_empty() {
  let server = server(vec![]);
  let response = server.get("/dishes").await;

  assert_eq!(response.status_code(), 200);
  response.assert_json(&json!([]));
}

#[tokio::test]
async fn get_dish() {
  let server = server(dishes());
  let response = server.get("/dish/2").await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({
      "id": 2,
      "name": "Bagnet",
      "description": "",
      "taste": "salty",
      "cooking_method": "fried",
      "ingredients": ["pork belly", "garlic"],
      "dietary_tags": ["pork"],
      "image": "bagnet.jpg",
      "occasions": ["celebration"],
  }));
}

#[tokio::test]
async fn get_missing_dish() {
  let server = server(dishes());
  let response = server.get("/dish/42").await;

  assert_eq!(response.status_code(), 404);
  response.assert_json(&json!({ "message": "dish not found" }));
}

#[tokio::test]
async fn get_dish_invalid_id() {
  let server = server(dishes());
  let response = server.get("/dish/bagnet").await;

  assert_eq!(response.status_code(), 400);
  response.assert_json_contains(&json!({ "message": "invalid path parameter" }));
}

#[tokio::test]
async fn match_dishes() {
  let server = server(dishes());

  let response = server
    .post("/match")
    .add_query_param("limit", 4)
    .json(&json!({
        "preferred_taste": "bitter",
        "dietary_restrictions": ["no-pork"],
    }))
    .await;

  assert_eq!(response.status_code(), 200);

  response.assert_json(&json!({
      "limit": 4,
      "recommendations": [
          {
              "id": 4,
              "name": "Tinubong",
              "image": null,
              "reason": "No strong positive matches; showing as lower-scoring suggestion",
              "score": 0
          },
          {
              "id": 3,
              "name": "Poqui-Poqui",
              "image": null,
              "reason": "No strong positive matches; showing as lower-scoring suggestion",
              "score": 0
          },
          {
              "id": 1,
              "name": "Pinakbet",
              "image": "pinakbet.jpg",
              "reason": "Matches taste: bitter (+3); Contains restricted item: pork (-5)",
              "score": -2
          },
          {
              "id": 2,
              "name": "Bagnet",
              "image": "bagnet.jpg",
              "reason": "Contains restricted item: pork (-5)",
              "score": -5
          }
      ]
  }));
}

#[tokio::test]
async fn match_dishes_default_limit() {
  let server = server(dishes());

  let response = server
    .post("/match")
    .json(&json!({
        "preferred_ingredients": ["Garlic"],
        "cooking_method": "grilled",
        "occasion": "Everyday",
    }))
    .await;

  assert_eq!(response.status_code(), 200);

  response.assert_json_contains(&json!({
      "limit": 3,
      "recommendations": [
          {
              "id": 3,
              "reason": "Contains preferred ingredient(s): garlic (+3); Cooking method matches: grilled (+2); Suitable for: Everyday (+1)",
              "score": 6
          },
          {
              "id": 2,
              "reason": "Contains preferred ingredient(s): garlic (+3)",
              "score": 3
          },
          {
              "id": 1,
              "reason": "Suitable for: Everyday (+1)",
              "score": 1
          }
      ]
  }));
}

#[tokio::test]
async fn match_empty_preferences() {
  let server = server(dishes());
  let response = server.post("/match").json(&json!({})).await;

  assert_eq!(response.status_code(), 200);

  let body = response.json::<serde_json::Value>();
  let names = body["recommendations"].as_array().unwrap().iter().map(|r| r["name"].as_str().unwrap().to_string()).collect::<Vec<_>>();

  assert_eq!(names, vec!["Tinubong", "Poqui-Poqui", "Pinakbet"]);
}

#[tokio::test]
async fn match_without_dataset() {
  let server = server(vec![]);
  let response = server.post("/match").json(&json!({ "preferred_taste": "sweet" })).await;

  assert_eq!(response.status_code(), 500);
  response.assert_json(&json!({ "message": "dish dataset not loaded" }));
}

#[tokio::test]
async fn match_invalid_limit() {
  let server = server(dishes());

  let response = server.post("/match").add_query_param("limit", 0).json(&json!({})).await;

  assert_eq!(response.status_code(), 422);
  response.assert_json(&json!({
      "message": "request failed validation",
      "details": ["limit must be between 1 and 50"],
  }));

  let response = server.post("/match").add_query_param("limit", "many").json(&json!({})).await;

  assert_eq!(response.status_code(), 400);
  response.assert_json_contains(&json!({ "message": "invalid query parameter" }));
}

#[tokio::test]
async fn match_invalid_payloads() {
  let server = server(dishes());

  let response = server.post("/match").bytes(Bytes::from_static(b"{not json")).content_type("application/json").await;

  assert_eq!(response.status_code(), 400);
  response.assert_json(&json!({ "message": "invalid payload format" }));

  let response = server.post("/match").json(&json!({ "preferred_taste": 3 })).await;

  assert_eq!(response.status_code(), 400);
  response.assert_json_contains(&json!({ "message": "payload does not match expected format" }));

  let response = server.post("/match").text("bitter").await;

  assert_eq!(response.status_code(), 415);

  let restrictions = (0..65).map(|i| format!("no item{i}")).collect::<Vec<_>>();
  let response = server.post("/match").json(&json!({ "dietary_restrictions": restrictions })).await;

  assert_eq!(response.status_code(), 422);
  response.assert_json(&json!({
      "message": "payload failed validation",
      "details": ["at most 64 dietary restrictions can be given"],
  }));
}

#[tokio::test]
async fn health_checks() {
  let server = server(dishes());

  assert_eq!(server.get("/healthz").await.status_code(), 200);
  assert_eq!(server.get("/readyz").await.status_code(), 200);
  assert_eq!(server.get("/metrics").await.status_code(), 404);

  let server = self::server(vec![]);

  assert_eq!(server.get("/healthz").await.status_code(), 200);
  assert_eq!(server.get("/readyz").await.status_code(), 503);
}

#[tokio::test]
async fn unknown_route() {
  let server = server(dishes());
  let response = server.get("/recipes").await;

  assert_eq!(response.status_code(), 404);
  response.assert_json(&json!({ "message": "missing resource" }));
}

#[tokio::test]
async fn cors() {
  let server = server(dishes());
  let response = server.get("/dishes").add_header("origin", "http://frontend.example").await;

  assert_eq!(response.status_code(), 200);
  assert_eq!(response.header("access-control-allow-origin"), "*");
}
