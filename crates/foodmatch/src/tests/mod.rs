use libfoodmatch::prelude::*;

use crate::api::{AppState, config::Config};

mod api;

pub(crate) fn dishes() -> Vec<Dish> {
  vec![
    Dish::builder(1, "Pinakbet")
      .description("Vegetables simmered with bagoong and pork.")
      .taste("bitter")
      .cooking_method("boiled")
      .ingredients(&["vegetables", "pork"])
      .dietary_tags(&["pork"])
      .occasions(&["everyday"])
      .image("pinakbet.jpg")
      .build(),
    Dish::builder(2, "Bagnet")
      .taste("salty")
      .cooking_method("fried")
      .ingredients(&["pork belly", "garlic"])
      .dietary_tags(&["pork"])
      .occasions(&["celebration"])
      .image("bagnet.jpg")
      .build(),
    Dish::builder(3, "Poqui-Poqui")
      .taste("savory")
      .cooking_method("grilled")
      .ingredients(&["eggplant", "egg", "garlic"])
      .dietary_tags(&["vegetarian"])
      .occasions(&["everyday", "breakfast"])
      .build(),
    Dish::builder(4, "Tinubong")
      .taste("sweet")
      .cooking_method("roasted")
      .ingredients(&["glutinous rice", "coconut"])
      .dietary_tags(&["vegetarian"])
      .occasions(&["merienda"])
      .build(),
  ]
}

pub(crate) fn state(config: Config, dishes: Vec<Dish>) -> AppState {
  let foodmatch = FoodMatch::with_catalog(
    Catalog::new(dishes).unwrap(),
    FoodMatchConfig {
      default_limit: config.match_limit,
    },
  );

  AppState { config, prometheus: None, foodmatch }
}
