//! Windows `.resw` localization resources.
//!
//! Records are rendered per translation and substituted into a caller-supplied
//! [`ResourceTemplate`] (the XML header, schema and `resheader` boilerplate).

use std::{fmt::Display, str::FromStr};

use indoc::indoc;

use crate::{
    error::Error,
    sanitize::escape_for_markup,
    types::{Translation, TranslationList},
};

/// Separator between rendered records.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Placeholder token of a [`ResourceTemplate`].
pub const PLACEHOLDER: &str = "{0}";

/// The template used when the host has none of its own.
pub const DEFAULT_RESW_TEMPLATE: &str = indoc! {r#"
    <?xml version="1.0" encoding="utf-8"?>
    <root>
      <resheader name="resmimetype">
        <value>text/microsoft-resx</value>
      </resheader>
      <resheader name="version">
        <value>2.0</value>
      </resheader>
      <resheader name="reader">
        <value>System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
      </resheader>
      <resheader name="writer">
        <value>System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
      </resheader>
    {0}
    </root>
"#};

/// A template with exactly one `{0}` insertion point.
///
/// `{{` and `}}` stand for literal braces, so templates written for composite
/// formatting keep working. Anything richer is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTemplate {
    prefix: String,
    suffix: String,
}

impl ResourceTemplate {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut segments = vec![String::new()];
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    push_literal(&mut segments, '{');
                }
                '{' => {
                    let mut token = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => token.push(c),
                            None => {
                                return Err(Error::InvalidTemplate(
                                    "unterminated `{` placeholder".to_string(),
                                ));
                            }
                        }
                    }
                    if token != "0" {
                        return Err(Error::InvalidTemplate(format!(
                            "unsupported placeholder `{{{token}}}`"
                        )));
                    }
                    segments.push(String::new());
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    push_literal(&mut segments, '}');
                }
                '}' => {
                    return Err(Error::InvalidTemplate("unmatched `}`".to_string()));
                }
                c => push_literal(&mut segments, c),
            }
        }

        match <[String; 2]>::try_from(segments) {
            Ok([prefix, suffix]) => Ok(Self { prefix, suffix }),
            Err(segments) => Err(Error::InvalidTemplate(format!(
                "expected exactly one `{PLACEHOLDER}` placeholder, found {}",
                segments.len() - 1
            ))),
        }
    }

    /// Returns the template with `content` at the placeholder.
    pub fn fill(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + content.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(content);
        out.push_str(&self.suffix);
        out
    }
}

fn push_literal(segments: &mut [String], c: char) {
    if let Some(last) = segments.last_mut() {
        last.push(c);
    }
}

impl FromStr for ResourceTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for ResourceTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_RESW_TEMPLATE).expect("bundled template has one placeholder")
    }
}

/// The records of one `.resw` file, with fallbacks already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub language: String,
    pub records: Vec<DataRecord>,
}

impl Format {
    /// Resolves the value of every translation for `language`.
    ///
    /// Ignored translations, and translations with a missing or empty value for
    /// `language`, fall back to the reference (`en-us`) value, which must exist.
    pub fn from_list(list: &TranslationList, language: &str) -> Result<Self, Error> {
        Ok(Self {
            language: language.to_string(),
            records: list
                .iter()
                .map(|translation| DataRecord::resolve(translation, language))
                .collect::<Result<_, _>>()?,
        })
    }

    /// All records joined by [`LINE_ENDING`] and placed into `template`.
    pub fn render(&self, template: &ResourceTemplate) -> String {
        let block = self
            .records
            .iter()
            .map(DataRecord::to_string)
            .collect::<Vec<_>>()
            .join(LINE_ENDING);
        template.fill(&block)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord {
    /// The raw translation key; `.resw` names allow any text.
    pub name: String,
    /// Unescaped value.
    pub value: String,
}

impl DataRecord {
    fn resolve(translation: &Translation, language: &str) -> Result<Self, Error> {
        let reference =
            translation
                .reference_value()
                .ok_or_else(|| Error::MissingReferenceTranslation {
                    key: translation.key.clone(),
                })?;

        let value = match translation.value_for(language) {
            Some(localized) if !translation.ignore_translations && !localized.value.is_empty() => {
                &localized.value
            }
            _ => &reference.value,
        };

        Ok(Self {
            name: translation.key.clone(),
            value: value.clone(),
        })
    }
}

impl Display for DataRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<data name=\"{}\" xml:space=\"preserve\">\n\t<value>{}</value>\n</data>",
            self.name,
            escape_for_markup(&self.value)
        )
    }
}
