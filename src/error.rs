//! All error types for the translator crate.
//!
//! These are returned from every fallible operation (import, export, plaintext merge).
//! Nothing in the crate logs or recovers from them; the host decides what to do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("<{element}> element is missing the required `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("`{0}` is not a valid boolean")]
    MalformedBoolean(String),

    #[error("translation `{key}` has no reference (en-us) value")]
    MissingReferenceTranslation { key: String },

    #[error("translation `{key}` has no value for language `{language}`")]
    MissingTranslationForLanguage { key: String, language: String },

    #[error("expected {expected} translated segments, found {found}")]
    TranslationCountMismatch { expected: usize, found: usize },

    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("malformed keyed segment: `{0}`")]
    MalformedSegment(String),

    #[error("key `{0}` cannot be written as a keyed segment")]
    UnsupportedKey(String),

    #[error("keyed plaintext needs a non-empty separator")]
    EmptySeparator,

    #[error("no translation awaiting a value for key `{0}`")]
    UnknownTranslationKey(String),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn missing_translation(key: &str, language: &str) -> Self {
        Error::MissingTranslationForLanguage {
            key: key.to_string(),
            language: language.to_string(),
        }
    }
}
