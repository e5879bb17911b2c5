//! Named color scales.
//!
//! A palette maps a name (`blue`) to a scale, and a scale maps a shade key
//! (`50`, `900`, `DEFAULT`) to a [`ColorValue`].

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::color::ColorValue;

/// Key of a single shade within a scale.
///
/// Numeric keys sort numerically and before named keys, so a scale iterates
/// as `50, 100, ..., 900, 950, DEFAULT`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeKey {
    Step(u16),
    Named(String),
}

/// Only canonical decimals (`"50"`, not `"050"` or `" 50"`) become steps, so
/// distinct keys in a file stay distinct and serialize back unchanged.
impl From<&str> for ShadeKey {
    fn from(key: &str) -> Self {
        if let Ok(step) = key.parse::<u16>() {
            if step.to_string() == key {
                return ShadeKey::Step(step);
            }
        }
        ShadeKey::Named(key.to_string())
    }
}

impl From<u16> for ShadeKey {
    fn from(step: u16) -> Self {
        ShadeKey::Step(step)
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeKey::Step(step) => f.pad(&step.to_string()),
            ShadeKey::Named(name) => f.pad(name),
        }
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct ShadeKeyVisitor;

impl<'de> Visitor<'de> for ShadeKeyVisitor {
    type Value = ShadeKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a shade key such as 50, \"900\" or \"DEFAULT\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
        Ok(ShadeKey::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
        u16::try_from(v)
            .map(ShadeKey::Step)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeKey, E> {
        u16::try_from(v)
            .map(ShadeKey::Step)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // YAML hands numeric keys over as integers, JSON always as strings.
        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

/// Shades of one named color.
pub type ColorScale = BTreeMap<ShadeKey, ColorValue>;

/// Palette names mapped to their scales.
pub type Palette = BTreeMap<String, ColorScale>;

/// Builds a scale from `(shade, color)` pairs.
///
/// # Errors
///
/// Fails on the first color that does not parse.
pub fn scale<'a, K, I>(entries: I) -> Result<ColorScale, super::ConfigError>
where
    K: Into<ShadeKey>,
    I: IntoIterator<Item = (K, &'a str)>,
{
    entries
        .into_iter()
        .map(|(key, color)| ColorValue::parse(color).map(|value| (key.into(), value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_keys_sort_numerically_then_named() {
        let mut keys: Vec<ShadeKey> = ["DEFAULT", "900", "50", "100", "light"]
            .into_iter()
            .map(ShadeKey::from)
            .collect();
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["50", "100", "900", "DEFAULT", "light"]);
    }

    #[test]
    fn test_oversized_numeric_key_is_named() {
        assert_eq!(
            ShadeKey::from("99999"),
            ShadeKey::Named("99999".to_string())
        );
    }

    #[test]
    fn test_non_canonical_numeric_keys_stay_named() {
        assert_eq!(ShadeKey::from("050"), ShadeKey::Named("050".to_string()));
        assert_eq!(ShadeKey::from(" 50"), ShadeKey::Named(" 50".to_string()));
        assert_eq!(ShadeKey::from("+50"), ShadeKey::Named("+50".to_string()));
        assert_eq!(ShadeKey::from("0"), ShadeKey::Step(0));
    }

    #[test]
    fn test_lookalike_keys_are_not_merged() {
        let parsed: ColorScale =
            serde_json::from_str(r##"{"50": "#f0f9ff", "050": "#000000"}"##).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[&ShadeKey::Step(50)].as_str(), "#f0f9ff");

        let written = serde_json::to_string(&parsed).unwrap();
        assert!(written.contains("\"050\""));
        let reread: ColorScale = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, parsed);
    }

    #[test]
    fn test_scale_from_json_and_yaml() {
        let from_json: ColorScale =
            serde_json::from_str(r##"{"900": "#1e3a8a", "50": "#f0f9ff"}"##).unwrap();
        let from_yaml: ColorScale = serde_yaml::from_str("50: '#f0f9ff'\n900: '#1e3a8a'\n").unwrap();
        assert_eq!(from_json, from_yaml);

        let keys: Vec<&ShadeKey> = from_json.keys().collect();
        assert_eq!(keys, vec![&ShadeKey::Step(50), &ShadeKey::Step(900)]);
    }

    #[test]
    fn test_scale_serializes_string_keys() {
        let shades = scale([(50u16, "#faf5ff")]).unwrap();
        let json = serde_json::to_string(&shades).unwrap();
        assert_eq!(json, r##"{"50":"#faf5ff"}"##);
    }

    #[test]
    fn test_scale_builder_rejects_bad_color() {
        assert!(scale([("DEFAULT", "#zz")]).is_err());
    }
}
