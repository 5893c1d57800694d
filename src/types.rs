//! The in-memory translation model.
//! The XML importer decodes into these; every exporter renders from them.

use serde::{Deserialize, Serialize};

/// The language every translation must carry; `.resw` export falls back to it.
pub const REFERENCE_LANGUAGE: &str = "en-us";

/// Mode stored on values merged from a plaintext payload.
///
/// XML regeneration writes `mode="auto"` for any non-empty mode, whatever its content.
pub const AUTO_MODE: &str = "auto";

/// One localized string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationValue {
    /// Provenance of the value (e.g. `auto`). `None` means authored by hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub mode: Option<String>,

    /// Locale identifier such as `en-us`.
    pub language: String,

    /// The localized text. May be empty.
    pub value: String,
}

impl TranslationValue {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mode: None,
            language: language.into(),
            value: value.into(),
        }
    }

    /// A value produced by the external translation process.
    pub fn auto(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            mode: Some(AUTO_MODE.to_string()),
            ..Self::new(language, value)
        }
    }

    pub fn has_mode(&self) -> bool {
        self.mode.as_deref().is_some_and(|mode| !mode.is_empty())
    }
}

/// One translatable unit: a key and its values in every known language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Translation {
    pub key: String,

    /// Marks strings that must never be translated (e.g. `{0}`).
    #[serde(default)]
    pub ignore_translations: bool,

    /// Values in insertion order.
    #[serde(default)]
    pub values: Vec<TranslationValue>,
}

impl Translation {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ignore_translations: false,
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, language: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(TranslationValue::new(language, value));
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore_translations = true;
        self
    }

    /// First value recorded for `language`.
    pub fn value_for(&self, language: &str) -> Option<&TranslationValue> {
        self.values.iter().find(|v| v.language == language)
    }

    pub fn reference_value(&self) -> Option<&TranslationValue> {
        self.value_for(REFERENCE_LANGUAGE)
    }

    /// True when a non-empty value exists for `language`.
    pub fn is_translated_to(&self, language: &str) -> bool {
        self.value_for(language).is_some_and(|v| !v.value.is_empty())
    }

    pub(crate) fn push_value(&mut self, value: TranslationValue) {
        self.values.push(value);
    }
}

/// All translations of one source document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationList {
    pub translations: Vec<Translation>,
}

impl TranslationList {
    pub fn new(translations: Vec<Translation>) -> Self {
        Self { translations }
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Translation> {
        self.translations.iter()
    }

    /// First translation with the given key.
    pub fn get(&self, key: &str) -> Option<&Translation> {
        self.translations.iter().find(|t| t.key == key)
    }
}

impl FromIterator<Translation> for TranslationList {
    fn from_iter<I: IntoIterator<Item = Translation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TranslationList {
    type Item = &'a Translation;
    type IntoIter = std::slice::Iter<'a, Translation>;

    fn into_iter(self) -> Self::IntoIter {
        self.translations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_for_returns_first_match() {
        let translation = Translation::new("Item")
            .with_value("en-us", "Item1")
            .with_value("it-it", "Item2");
        assert_eq!(translation.value_for("it-it").unwrap().value, "Item2");
        assert_eq!(translation.reference_value().unwrap().value, "Item1");
        assert!(translation.value_for("fr-fr").is_none());
    }

    #[test]
    fn test_is_translated_to_ignores_empty_values() {
        let translation = Translation::new("Back")
            .with_value("en-us", "Back1")
            .with_value("it-it", "");
        assert!(translation.is_translated_to("en-us"));
        assert!(!translation.is_translated_to("it-it"));
        assert!(!translation.is_translated_to("de-de"));
    }

    #[test]
    fn test_auto_value_has_mode() {
        let value = TranslationValue::auto("it-it", "Indietro");
        assert_eq!(value.mode.as_deref(), Some(AUTO_MODE));
        assert!(value.has_mode());
        assert!(!TranslationValue::new("it-it", "Indietro").has_mode());
    }

    #[test]
    fn test_empty_mode_is_not_a_mode() {
        let value = TranslationValue {
            mode: Some(String::new()),
            ..TranslationValue::new("en-us", "x")
        };
        assert!(!value.has_mode());
    }

    #[test]
    fn test_list_lookup_and_order() {
        let list: TranslationList = ["Back", "Cancel", "Back"]
            .into_iter()
            .map(Translation::new)
            .collect();
        assert_eq!(list.len(), 3);
        let keys: Vec<_> = list.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["Back", "Cancel", "Back"]);
        assert!(list.get("Cancel").is_some());
        assert!(list.get("Missing").is_none());
    }

    #[test]
    fn test_serde_shape() {
        let list = TranslationList::new(vec![Translation::new("Back").with_value("en-us", "Back1")]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["translations"][0]["key"], "Back");
        assert_eq!(json["translations"][0]["ignore_translations"], false);
        assert!(json["translations"][0]["values"][0].get("mode").is_none());
    }
}
