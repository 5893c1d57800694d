//! XAML `ResourceDictionary` whose strings are their own keys.
//!
//! Used as design-time placeholders until the `.resw` resources are loaded.

use std::fmt::Display;

use crate::{sanitize::sanitize_identifier, types::TranslationList};

const HEADER: &str = "<ResourceDictionary xmlns=\"http://schemas.microsoft.com/winfx/2006/xaml/presentation\" xmlns:x=\"http://schemas.microsoft.com/winfx/2006/xaml\">";
const FOOTER: &str = "</ResourceDictionary>";
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Sanitized keys, in list order.
    pub keys: Vec<String>,
}

impl From<&TranslationList> for Format {
    fn from(list: &TranslationList) -> Self {
        Self {
            keys: list
                .iter()
                .map(|translation| sanitize_identifier(&translation.key))
                .collect(),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{HEADER}\n{INDENT}")?;
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                write!(f, "\n{INDENT}")?;
            }
            write!(f, "<x:String x:Key=\"{key}\">{key}</x:String>")?;
        }
        write!(f, "\n{FOOTER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Translation;

    #[test]
    fn test_one_entry() {
        let list = TranslationList::new(vec![Translation::new("Back")]);
        let expected = "<ResourceDictionary xmlns=\"http://schemas.microsoft.com/winfx/2006/xaml/presentation\" xmlns:x=\"http://schemas.microsoft.com/winfx/2006/xaml\">\n    <x:String x:Key=\"Back\">Back</x:String>\n</ResourceDictionary>";
        assert_eq!(Format::from(&list).to_string(), expected);
    }

    #[test]
    fn test_entries_keep_order_and_are_sanitized() {
        let list = TranslationList::new(vec![
            Translation::new("Back"),
            Translation::new("Cancel"),
            Translation::new("Save as..."),
        ]);
        let xaml = Format::from(&list).to_string();
        let body: Vec<_> = xaml.lines().skip(1).collect();
        assert_eq!(
            body,
            [
                "    <x:String x:Key=\"Back\">Back</x:String>",
                "    <x:String x:Key=\"Cancel\">Cancel</x:String>",
                "    <x:String x:Key=\"Saveas\">Saveas</x:String>",
                "</ResourceDictionary>",
            ]
        );
    }
}
