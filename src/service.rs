//! Import of the source document and export of the three generated artifacts.
//!
//! [`TranslationService`] holds the `.resw` template so hosts can parse it once
//! and render many languages with it. The individual formats live in
//! [`crate::formats`].

use crate::{
    error::Error,
    formats::{CSharpEnumFormat, ReswFormat, ResourceTemplate, XamlDictionaryFormat},
    traits::Parser,
    types::TranslationList,
};

#[derive(Debug, Clone, Default)]
pub struct TranslationService {
    template: ResourceTemplate,
}

impl TranslationService {
    /// Creates a service rendering `.resw` files into `template`.
    pub fn new(template: ResourceTemplate) -> Self {
        Self { template }
    }

    /// Parses the `.resw` template text and creates a service around it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTemplate`] unless the text has exactly one `{0}`.
    pub fn with_template_text(template: &str) -> Result<Self, Error> {
        Ok(Self::new(ResourceTemplate::parse(template)?))
    }

    pub fn template(&self) -> &ResourceTemplate {
        &self.template
    }

    /// Parses the source XML document.
    pub fn import(&self, document: &str) -> Result<TranslationList, Error> {
        TranslationList::from_str(document)
    }

    /// Renders a `.resw` file for `language`, falling back to `en-us`.
    pub fn export_to_resw(&self, list: &TranslationList, language: &str) -> Result<String, Error> {
        Ok(ReswFormat::from_list(list, language)?.render(&self.template))
    }

    /// Renders `namespace {namespace}; public enum {name}Key { .. }`.
    pub fn export_to_csharp_enum(
        &self,
        list: &TranslationList,
        language: &str,
        name: &str,
        namespace: &str,
    ) -> Result<String, Error> {
        Ok(CSharpEnumFormat::from_list(list, language, name, namespace)?.to_string())
    }

    pub fn export_to_xaml_identity_dictionary(&self, list: &TranslationList) -> String {
        XamlDictionaryFormat::from(list).to_string()
    }
}
