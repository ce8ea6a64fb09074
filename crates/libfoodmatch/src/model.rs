use bon::bon;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

pub type DishId = i64;

/// A dish from the catalog.
///
/// Dishes are immutable once the catalog is loaded. A missing or `null`
/// description is read as an empty string, and missing or `null` list fields
/// as empty lists.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Dish {
  pub id: DishId,
  pub name: String,
  #[serde(default, deserialize_with = "nullable")]
  pub description: String,
  #[serde(default, deserialize_with = "nullable")]
  pub ingredients: Vec<String>,
  pub taste: String,
  pub cooking_method: String,
  #[serde(default, deserialize_with = "nullable")]
  pub dietary_tags: Vec<String>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default, deserialize_with = "nullable")]
  pub occasions: Vec<String>,
}

#[bon]
impl Dish {
  #[builder]
  pub fn builder(
    #[builder(start_fn)] id: DishId,
    #[builder(start_fn)] name: &str,
    description: Option<&str>,
    taste: Option<&str>,
    cooking_method: Option<&str>,
    ingredients: Option<&[&str]>,
    dietary_tags: Option<&[&str]>,
    image: Option<&str>,
    occasions: Option<&[&str]>,
  ) -> Dish {
    Dish {
      id,
      name: name.to_string(),
      description: description.map(ToOwned::to_owned).unwrap_or_default(),
      ingredients: owned(ingredients),
      taste: taste.map(ToOwned::to_owned).unwrap_or_default(),
      cooking_method: cooking_method.map(ToOwned::to_owned).unwrap_or_default(),
      dietary_tags: owned(dietary_tags),
      image: image.map(ToOwned::to_owned),
      occasions: owned(occasions),
    }
  }
}

/// What a user is looking for.
///
/// Every field is optional. An empty request is valid and scores every dish
/// at zero.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct Preferences {
  #[serde(default)]
  #[validate(length(max = 128, message = "preferred_taste must be at most 128 characters"))]
  pub preferred_taste: Option<String>,
  #[serde(default, alias = "preferred_ingredients", deserialize_with = "nullable")]
  #[validate(length(max = 64, message = "at most 64 preferred ingredients can be given"))]
  pub ingredients_preference: Vec<String>,
  #[serde(default, deserialize_with = "nullable")]
  #[validate(length(max = 64, message = "at most 64 dietary restrictions can be given"))]
  pub dietary_restrictions: Vec<String>,
  #[serde(default, alias = "preferred_cooking_method")]
  #[validate(length(max = 128, message = "cooking_method must be at most 128 characters"))]
  pub cooking_method: Option<String>,
  #[serde(default)]
  #[validate(length(max = 128, message = "occasion must be at most 128 characters"))]
  pub occasion: Option<String>,
}

#[bon]
impl Preferences {
  #[builder]
  pub fn builder(taste: Option<&str>, ingredients: Option<&[&str]>, restrictions: Option<&[&str]>, cooking_method: Option<&str>, occasion: Option<&str>) -> Preferences {
    Preferences {
      preferred_taste: taste.map(ToOwned::to_owned),
      ingredients_preference: owned(ingredients),
      dietary_restrictions: owned(restrictions),
      cooking_method: cooking_method.map(ToOwned::to_owned),
      occasion: occasion.map(ToOwned::to_owned),
    }
  }
}

/// A scored dish, along with the human-readable explanation of its score.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Recommendation {
  pub id: DishId,
  pub name: String,
  pub image: Option<String>,
  pub reason: String,
  pub score: i64,
}

fn owned(values: Option<&[&str]>) -> Vec<String> {
  values.unwrap_or_default().iter().map(|s| s.to_string()).collect()
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
