//! C# enumeration with one case per translation key.
//!
//! ```csharp
//! namespace Apps;
//!
//! public enum CommonKey
//! {
//!     Back,     // Back
//!     Cancel,   // Cancel
//! }
//! ```

use std::{collections::HashMap, fmt::Display};

use crate::{error::Error, sanitize::sanitize_identifier, types::TranslationList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub namespace: String,
    /// Enum name without the `Key` suffix.
    pub name: String,
    pub cases: Vec<EnumCase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    /// Sanitized translation key.
    pub identifier: String,
    /// Value in the enum's language, written as a trailing comment.
    pub comment: String,
}

impl Format {
    /// Builds one case per translation, commented with its `language` value.
    ///
    /// There is no fallback: every translation needs a `language` value.
    pub fn from_list(
        list: &TranslationList,
        language: &str,
        name: &str,
        namespace: &str,
    ) -> Result<Self, Error> {
        let cases: Vec<EnumCase> = list
            .iter()
            .map(|translation| -> Result<EnumCase, Error> {
                let value = translation
                    .value_for(language)
                    .ok_or_else(|| Error::missing_translation(&translation.key, language))?;
                Ok(EnumCase {
                    identifier: sanitize_identifier(&translation.key),
                    comment: value.value.clone(),
                })
            })
            .collect::<Result<_, Error>>()?;

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            cases,
        })
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "namespace {};\n\npublic enum {}Key\n{{\n\t",
            self.namespace, self.name
        )?;
        for (index, case) in self.cases.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\t")?;
            }
            write!(f, "{}, \t// {}", case.identifier, case.comment)?;
        }
        f.write_str("\n}")
    }
}

/// Sanitized keys that occur more than once, in first-occurrence order.
///
/// Such keys produce enum cases that do not compile; they are reported rather
/// than merged.
pub fn duplicate_identifiers(list: &TranslationList) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order = Vec::new();
    for translation in list {
        let identifier = sanitize_identifier(&translation.key);
        let count = counts.entry(identifier.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(identifier);
        }
    }
    order
}
