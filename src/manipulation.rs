//! Plaintext round trip through an external translation process.
//!
//! Untranslated values are exported as one separator-joined payload; the
//! translated payload is merged back as `auto` values and the source document is
//! regenerated with [`generate_translation`].
//!
//! The positional functions pair segment *i* with the *i*-th eligible
//! translation, so the payload must come back with the same number of segments
//! in the same order. The keyed variants prefix every segment with `{{key}}` and
//! match by key instead.

use std::collections::HashMap;

use crate::{
    error::Error,
    formats::translation_xml,
    types::{Translation, TranslationList, TranslationValue},
};

const KEY_MARKER_OPEN: &str = "{{";
const KEY_MARKER_CLOSE: &str = "}}";

/// Joins the `from` values of every translation still missing a `to` value.
///
/// Ignored translations and translations with a non-empty `to` value are
/// skipped, as are empty `from` values.
pub fn export_plaintext(
    list: &TranslationList,
    from: &str,
    to: &str,
    separator: &str,
) -> Result<String, Error> {
    Ok(pending_values(list, from, to)?
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(separator))
}

/// Like [`export_plaintext`], with every segment prefixed by `{{key}} `.
///
/// Fails when the payload could not be merged back by key: an empty
/// separator, a key that contains `}}` or ends with `}`, or a value that
/// itself looks like a key marker.
pub fn export_keyed_plaintext(
    list: &TranslationList,
    from: &str,
    to: &str,
    separator: &str,
) -> Result<String, Error> {
    if separator.is_empty() {
        return Err(Error::EmptySeparator);
    }
    let segments = pending_values(list, from, to)?
        .into_iter()
        .map(|(key, value)| {
            if !is_encodable_key(key) {
                return Err(Error::UnsupportedKey(key.to_string()));
            }
            let segment = format!("{KEY_MARKER_OPEN}{key}{KEY_MARKER_CLOSE} {value}");
            if contains_key_marker(value) {
                return Err(Error::MalformedSegment(segment));
            }
            Ok(segment)
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(segments.join(separator))
}

/// The first `}}` after the opening marker must be the closing one.
fn is_encodable_key(key: &str) -> bool {
    !key.contains(KEY_MARKER_CLOSE) && !key.ends_with('}')
}

fn contains_key_marker(value: &str) -> bool {
    value
        .find(KEY_MARKER_OPEN)
        .is_some_and(|start| value[start + KEY_MARKER_OPEN.len()..].contains(KEY_MARKER_CLOSE))
}

fn pending_values<'a>(
    list: &'a TranslationList,
    from: &str,
    to: &str,
) -> Result<Vec<(&'a str, &'a str)>, Error> {
    let mut pending = Vec::new();
    for translation in list.iter().filter(|t| !t.ignore_translations) {
        if translation.is_translated_to(to) {
            continue;
        }
        let source = translation
            .value_for(from)
            .ok_or_else(|| Error::missing_translation(&translation.key, from))?;
        if !source.value.is_empty() {
            pending.push((translation.key.as_str(), source.value.as_str()));
        }
    }
    Ok(pending)
}

/// Translations that accept a merged value for `language`: not ignored and
/// without any `language` value, even an empty one.
fn is_merge_target(translation: &Translation, language: &str) -> bool {
    !translation.ignore_translations && translation.value_for(language).is_none()
}

/// Splits a payload, dropping empty segments. An empty separator does not split.
fn segments<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return if text.is_empty() { Vec::new() } else { vec![text] };
    }
    text.split(separator)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Appends one `auto` value per segment of `translated`, in order, to the
/// translations that still lack a `language` value.
///
/// The list is consumed and returned extended. Nothing is modified unless the
/// segment count equals the number of target translations.
pub fn append_plaintext_translations(
    mut list: TranslationList,
    translated: &str,
    language: &str,
    separator: &str,
) -> Result<TranslationList, Error> {
    let segments = segments(translated, separator);
    let targets: Vec<&mut Translation> = list
        .translations
        .iter_mut()
        .filter(|t| is_merge_target(t, language))
        .collect();

    if segments.len() != targets.len() {
        return Err(Error::TranslationCountMismatch {
            expected: targets.len(),
            found: segments.len(),
        });
    }

    for (translation, segment) in targets.into_iter().zip(segments) {
        translation.push_value(TranslationValue::auto(language, segment));
    }

    Ok(list)
}

/// Merges a payload produced by [`export_keyed_plaintext`], matching by key.
///
/// Segments may arrive in any order and the payload may cover only part of the
/// pending translations. Nothing is modified if any segment is rejected.
pub fn append_keyed_plaintext_translations(
    mut list: TranslationList,
    translated: &str,
    language: &str,
    separator: &str,
) -> Result<TranslationList, Error> {
    if separator.is_empty() {
        return Err(Error::EmptySeparator);
    }

    let mut targets: HashMap<&str, usize> = HashMap::new();
    for (index, translation) in list.translations.iter().enumerate() {
        if is_merge_target(translation, language) {
            targets.entry(translation.key.as_str()).or_insert(index);
        }
    }

    let mut updates = Vec::new();
    for segment in segments(translated, separator) {
        let (key, value) = split_keyed_segment(segment)?;
        let index = targets
            .remove(key)
            .ok_or_else(|| Error::UnknownTranslationKey(key.to_string()))?;
        updates.push((index, value.to_string()));
    }

    for (index, value) in updates {
        list.translations[index].push_value(TranslationValue::auto(language, value));
    }

    Ok(list)
}

fn split_keyed_segment(segment: &str) -> Result<(&str, &str), Error> {
    let malformed = || Error::MalformedSegment(segment.to_string());
    let rest = segment
        .trim_start()
        .strip_prefix(KEY_MARKER_OPEN)
        .ok_or_else(malformed)?;
    let (key, value) = rest.split_once(KEY_MARKER_CLOSE).ok_or_else(malformed)?;
    let value = value.strip_prefix(' ').unwrap_or(value);
    // A second marker means two segments ran together.
    if contains_key_marker(value) {
        return Err(malformed());
    }
    Ok((key, value))
}

/// Regenerates the source document; see [`translation_xml::generate`].
pub fn generate_translation(list: &TranslationList, separator: &str) -> String {
    translation_xml::generate(list, separator)
}
