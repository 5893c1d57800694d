#![forbid(unsafe_code)]
//! Code and resource generation from a language-neutral translation list.
//!
//! A single XML document lists every translation key with its value in each
//! language. From it the crate renders a C# enum of the keys, a XAML identity
//! dictionary and `.resw` localization resources, and supports a plaintext round
//! trip through an external translation process.
//!
//! # Quick Start
//!
//! ```rust
//! use translator::{TranslationService, manipulation};
//!
//! let service = TranslationService::with_template_text("<root>{0}</root>")?;
//! let list = service.import(
//!     r#"<root><data key="Back"><value lang="en-us">Back</value></data></root>"#,
//! )?;
//!
//! let payload = manipulation::export_plaintext(&list, "en-us", "it-it", "\n")?;
//! let list = manipulation::append_plaintext_translations(list, "Indietro", "it-it", "\n")?;
//!
//! let resw = service.export_to_resw(&list, "it-it")?;
//! assert!(resw.contains("<value>Indietro</value>"));
//! # assert_eq!(payload, "Back");
//! # Ok::<(), translator::Error>(())
//! ```
//!
//! The crate does no I/O: hosts read the document and template and write the
//! generated artifacts themselves.

pub mod error;
pub mod formats;
pub mod manipulation;
pub mod sanitize;
pub mod service;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::{FormatType, ResourceTemplate, csharp_enum::duplicate_identifiers},
    manipulation::{append_plaintext_translations, export_plaintext, generate_translation},
    service::TranslationService,
    types::{AUTO_MODE, REFERENCE_LANGUAGE, Translation, TranslationList, TranslationValue},
};
