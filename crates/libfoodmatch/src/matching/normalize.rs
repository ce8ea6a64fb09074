use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("invalid token regex"));
static NEGATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^no\s+").expect("invalid negation regex"));

/// Canonicalize free text into a comparable token.
///
/// The input is lowercased, every run of characters outside of `[a-z0-9]` is
/// collapsed into a single space, and the result is trimmed.
pub fn normalize_token(value: &str) -> String {
  NON_ALNUM.replace_all(&value.to_lowercase(), " ").trim().to_string()
}

/// Extract the restricted item from a dietary restriction phrase.
///
/// Negative phrasings (`no pork`, `No-Pork`, `no_pork`) and bare tags
/// (`vegetarian`) produce the same token a dish would list.
pub fn parse_restriction_token(restriction: &str) -> String {
  let value = restriction.to_lowercase().replace(['_', '-'], " ");
  let value = NEGATION.replace(value.trim(), "");

  normalize_token(value.trim())
}
