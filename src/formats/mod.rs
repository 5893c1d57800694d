pub mod csharp_enum;
pub mod resw;
pub mod translation_xml;
pub mod xaml_dictionary;

// Reexporting the formats for easier access
pub use csharp_enum::Format as CSharpEnumFormat;
pub use resw::{Format as ReswFormat, ResourceTemplate};
pub use xaml_dictionary::Format as XamlDictionaryFormat;

use std::fmt::Display;

/// Every text format the crate reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// The language-neutral source document (`<root><data key=..>`).
    TranslationXml,
    /// Windows `.resw` localization resource.
    Resw,
    /// C# enumeration of every key.
    CSharpEnum,
    /// XAML `ResourceDictionary` mapping every key to itself.
    XamlDictionary,
}

impl FormatType {
    /// The generated artifacts, in the order hosts write them.
    pub const GENERATED: [FormatType; 3] = [
        FormatType::CSharpEnum,
        FormatType::XamlDictionary,
        FormatType::Resw,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::TranslationXml => "xml",
            FormatType::Resw => "resw",
            FormatType::CSharpEnum => "cs",
            FormatType::XamlDictionary => "xaml",
        }
    }

    /// File name for an artifact called `name` (e.g. `Strings.resw`).
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension())
    }
}

impl Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormatType::TranslationXml => "TranslationXml",
            FormatType::Resw => "Resw",
            FormatType::CSharpEnum => "CSharpEnum",
            FormatType::XamlDictionary => "XamlDictionary",
        };
        write!(f, "{}", name)
    }
}
