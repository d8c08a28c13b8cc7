//! Lenient field deserializers for the flight and airport datasets, where
//! numbers are sometimes quoted and missing values come as `null` or `""`.
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Text(s) if s.is_empty() => None,
            Scalar::Text(s) => Some(s),
            Scalar::Bool(b) => Some(b.to_string()),
        }
    }
}

/// Deserializes a string or number into its textual form. Empty strings are absent.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// Parses a number kept in its textual form (e.g. `-6.0816890`).
/// Anything unparsable, such as `\N`, is `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok().filter(|n: &f64| n.is_finite())
}

/// Deserializes a list of scalars into their textual forms, skipping absent ones.
/// `null` is an empty list.
pub fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(Scalar::into_text)
        .collect())
}

/// Deserializes `null` as [`Default::default`].
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
