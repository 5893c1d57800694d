//! The language-neutral source document.
//!
//! ```xml
//! <root>
//!   <data key="Back">
//!     <value lang="en-us">Back</value>
//!     <value lang="it-it" mode="auto">Indietro</value>
//!   </data>
//!   <data key="Placeholder" ignoreTranslations="true">
//!     <value lang="en-us">{0}</value>
//!   </data>
//! </root>
//! ```
//!
//! `data` elements are collected at any depth. Regeneration always writes the flat
//! `<root>` shape above, escaping only `&` in values.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::io::{BufRead, Write};

use crate::{
    error::Error,
    sanitize::escape_for_markup,
    traits::Parser,
    types::{AUTO_MODE, Translation, TranslationList, TranslationValue},
};

const DATA_TAG: &[u8] = b"data";
const VALUE_TAG: &[u8] = b"value";

impl Parser for TranslationList {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        read_translation_list(reader)
    }

    /// Writes the compact form of [`generate`].
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(generate(self, "").as_bytes())?;
        Ok(())
    }
}

/// An element that is open while the reader walks the document.
enum OpenElement {
    /// Index of the translation created for a `<data>` start tag.
    Data(usize),
    /// `(translation, value)` slots the element's text is appended to.
    Value(Vec<(usize, usize)>),
    Other,
}

fn read_translation_list<R: BufRead>(reader: R) -> Result<TranslationList, Error> {
    let mut xml_reader = Reader::from_reader(reader);

    let mut buf = Vec::new();
    let mut translations = Vec::new();
    let mut open = Vec::new();
    let mut seen_element = false;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                seen_element = true;
                let element = open_element(e, &mut translations, &open)?;
                open.push(element);
            }
            Event::Empty(ref e) => {
                seen_element = true;
                open_element(e, &mut translations, &open)?;
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(e) => {
                // Whitespace between elements is layout, not data.
                if !e.iter().all(u8::is_ascii_whitespace) {
                    let text = e.unescape()?;
                    append_text(&mut translations, &open, &text);
                }
            }
            Event::CData(e) => {
                let text = std::str::from_utf8(&e).map_err(|err| {
                    Error::InvalidDocument(format!("CDATA section is not valid UTF-8: {err}"))
                })?;
                append_text(&mut translations, &open, text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !open.is_empty() {
        return Err(Error::InvalidDocument(format!(
            "unexpected end of document, {} element(s) left open",
            open.len()
        )));
    }
    if !seen_element {
        return Err(Error::InvalidDocument("root element is missing".to_string()));
    }

    Ok(TranslationList::new(translations))
}

fn open_element(
    e: &BytesStart,
    translations: &mut Vec<Translation>,
    open: &[OpenElement],
) -> Result<OpenElement, Error> {
    match e.name().as_ref() {
        DATA_TAG => {
            translations.push(parse_data(e)?);
            Ok(OpenElement::Data(translations.len() - 1))
        }
        VALUE_TAG => {
            let value = parse_value(e)?;
            // A value belongs to every enclosing <data>, as with descendant lookups.
            let slots = open
                .iter()
                .filter_map(|element| match element {
                    OpenElement::Data(index) => Some(*index),
                    _ => None,
                })
                .map(|index| {
                    let translation = &mut translations[index];
                    translation.push_value(value.clone());
                    (index, translation.values.len() - 1)
                })
                .collect();
            Ok(OpenElement::Value(slots))
        }
        _ => Ok(OpenElement::Other),
    }
}

fn append_text(translations: &mut [Translation], open: &[OpenElement], text: &str) {
    for element in open {
        if let OpenElement::Value(slots) = element {
            for &(translation, value) in slots {
                translations[translation].values[value].value.push_str(text);
            }
        }
    }
}

fn parse_data(e: &BytesStart) -> Result<Translation, Error> {
    let key = attribute(e, b"key")?.ok_or(Error::MissingAttribute {
        element: "data",
        attribute: "key",
    })?;
    let ignore_translations = match attribute(e, b"ignoreTranslations")? {
        Some(raw) => parse_bool(&raw)?,
        None => false,
    };

    Ok(Translation {
        key,
        ignore_translations,
        values: Vec::new(),
    })
}

fn parse_value(e: &BytesStart) -> Result<TranslationValue, Error> {
    let language = attribute(e, b"lang")?.ok_or(Error::MissingAttribute {
        element: "value",
        attribute: "lang",
    })?;

    Ok(TranslationValue {
        mode: attribute(e, b"mode")?,
        language,
        value: String::new(),
    })
}

fn attribute(e: &BytesStart, name: &[u8]) -> Result<Option<String>, Error> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::InvalidDocument(e.to_string()))?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Accepts `true`/`false` in any ASCII case, surrounded by optional whitespace.
fn parse_bool(raw: &str) -> Result<bool, Error> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::MalformedBoolean(raw.to_string()))
    }
}

/// Serializes `list` back into the source document shape.
///
/// `separator` goes between `<root>` and its first child, between siblings and
/// before every closing tag; pass `""` for compact output or `"\n"` for one
/// element per line.
pub fn generate(list: &TranslationList, separator: &str) -> String {
    let data = list
        .iter()
        .map(|translation| render_data(translation, separator))
        .collect::<Vec<_>>()
        .join(separator);
    format!("<root>{separator}{data}{separator}</root>")
}

fn render_data(translation: &Translation, separator: &str) -> String {
    let ignore_translations = if translation.ignore_translations {
        " ignoreTranslations=\"true\""
    } else {
        ""
    };
    let values = translation
        .values
        .iter()
        .map(render_value)
        .collect::<Vec<_>>()
        .join(separator);
    format!(
        "<data key=\"{}\"{ignore_translations}>{separator}{values}{separator}</data>",
        translation.key
    )
}

fn render_value(value: &TranslationValue) -> String {
    let mode = if value.has_mode() {
        format!(" mode=\"{AUTO_MODE}\"")
    } else {
        String::new()
    };
    format!(
        "<value lang=\"{}\"{mode}>{}</value>",
        value.language,
        escape_for_markup(&value.value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_single_translation() {
        let xml = "<root><data key='Back'> <value lang='en-us'>Back1</value> </data></root>";
        let list = TranslationList::from_str(xml).unwrap();
        assert_eq!(list.len(), 1);
        let back = &list.translations[0];
        assert_eq!(back.key, "Back");
        assert!(!back.ignore_translations);
        assert_eq!(back.values, vec![TranslationValue::new("en-us", "Back1")]);
    }

    #[test]
    fn test_parse_pretty_document_keeps_order() {
        let xml = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <root>
                <!-- navigation -->
                <data key="Back">
                    <value lang="en-us">Back1</value>
                    <value lang="it-it" mode="auto">Indietro</value>
                </data>
                <data key="Cancel" ignoreTranslations="True">
                    <value lang="en-us">Cancel1</value>
                </data>
            </root>
        "#};
        let list = TranslationList::from_str(xml).unwrap();
        let keys: Vec<_> = list.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["Back", "Cancel"]);
        assert_eq!(list.translations[0].values[1].mode.as_deref(), Some("auto"));
        assert_eq!(list.translations[0].values[1].language, "it-it");
        assert!(list.translations[1].ignore_translations);
    }

    #[test]
    fn test_parse_nested_data_and_entities() {
        let xml = r#"<root><group><data key="A&amp;B"><value lang="en-us">Tom &amp; Jerry <![CDATA[<3]]></value></data></group></root>"#;
        let list = TranslationList::from_str(xml).unwrap();
        assert_eq!(list.translations[0].key, "A&B");
        assert_eq!(list.translations[0].values[0].value, "Tom & Jerry <3");
    }

    #[test]
    fn test_parse_value_text_spans_child_elements() {
        let xml = r#"<root><data key="Rich"><value lang="en-us">Hello <b>bold</b> world</value></data></root>"#;
        let list = TranslationList::from_str(xml).unwrap();
        assert_eq!(list.translations[0].values[0].value, "Hello bold world");
    }

    #[test]
    fn test_parse_empty_elements() {
        let xml = r#"<root><data key="Empty"><value lang="en-us"/></data><data key="Bare"/></root>"#;
        let list = TranslationList::from_str(xml).unwrap();
        assert_eq!(list.translations[0].values[0].value, "");
        assert!(list.translations[1].values.is_empty());
    }

    #[test]
    fn test_whitespace_only_value_is_empty() {
        let xml = r#"<root><data key="Blank"><value lang="en-us">   </value></data></root>"#;
        let list = TranslationList::from_str(xml).unwrap();
        assert_eq!(list.translations[0].values[0].value, "");
    }

    #[test]
    fn test_missing_key_attribute() {
        let xml = r#"<root><data><value lang="en-us">x</value></data></root>"#;
        let err = TranslationList::from_str(xml).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttribute {
                element: "data",
                attribute: "key"
            }
        ));
    }

    #[test]
    fn test_missing_lang_attribute() {
        let xml = r#"<root><data key="Back"><value>x</value></data></root>"#;
        let err = TranslationList::from_str(xml).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttribute {
                element: "value",
                attribute: "lang"
            }
        ));
    }

    #[test]
    fn test_malformed_boolean() {
        let xml = r#"<root><data key="Back" ignoreTranslations="yes"/></root>"#;
        let err = TranslationList::from_str(xml).unwrap_err();
        assert!(matches!(err, Error::MalformedBoolean(ref v) if v == "yes"));
    }

    #[test]
    fn test_unclosed_document() {
        let err = TranslationList::from_str("<root><data key=\"Back\">").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDocument(_) | Error::XmlParse(_)
        ));
    }

    #[test]
    fn test_empty_document() {
        let err = TranslationList::from_str("  ").unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }

    #[test]
    fn test_cdata_with_invalid_utf8() {
        let document =
            b"<root><data key=\"Back\"><value lang=\"en-us\"><![CDATA[Back\xff]]></value></data></root>";
        let err = TranslationList::from_bytes(document).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(ref msg) if msg.contains("UTF-8")));
    }

    #[test]
    fn test_mismatched_tags() {
        let err = TranslationList::from_str("<root><data key=\"Back\"></root>").unwrap_err();
        assert!(matches!(err, Error::XmlParse(_)));
    }

    #[test]
    fn test_generate_compact() {
        let list = TranslationList::new(vec![
            Translation::new("Back").with_value("en-us", "Back1"),
            Translation::new("Cancel").with_value("en-us", "Cancel1"),
        ]);
        assert_eq!(
            generate(&list, ""),
            r#"<root><data key="Back"><value lang="en-us">Back1</value></data><data key="Cancel"><value lang="en-us">Cancel1</value></data></root>"#
        );
    }

    #[test]
    fn test_generate_with_newline_separator() {
        let list = TranslationList::new(vec![
            Translation::new("Placeholder")
                .with_value("en-us", "{0} & more")
                .ignored(),
        ]);
        let expected = "<root>\n<data key=\"Placeholder\" ignoreTranslations=\"true\">\n<value lang=\"en-us\">{0} &amp; more</value>\n</data>\n</root>";
        assert_eq!(generate(&list, "\n"), expected);
    }

    #[test]
    fn test_generate_writes_any_mode_as_auto() {
        let mut translation = Translation::new("Back").with_value("en-us", "Back1");
        translation.values.push(TranslationValue {
            mode: Some("manual".to_string()),
            ..TranslationValue::new("it-it", "Indietro")
        });
        let list = TranslationList::new(vec![translation]);
        assert!(generate(&list, "").contains(r#"<value lang="it-it" mode="auto">Indietro</value>"#));
    }

    #[test]
    fn test_generate_empty_list() {
        assert_eq!(generate(&TranslationList::default(), "\n"), "<root>\n\n</root>");
    }

    #[test]
    fn test_round_trip() {
        let xml = r#"<root><data key="Back"><value lang="en-us">Back1</value><value lang="it-it" mode="auto">Back &amp; forth</value></data><data key="Skip" ignoreTranslations="true"><value lang="en-us">{0}</value></data></root>"#;
        let list = TranslationList::from_str(xml).unwrap();
        assert_eq!(generate(&list, ""), xml);

        let mut out = Vec::new();
        list.to_writer(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), xml);
    }
}
