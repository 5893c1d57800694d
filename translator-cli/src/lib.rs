//! CLI library for testing purposes

pub mod generate;
pub mod plaintext;
pub mod separator;

pub use generate::{GenerateOptions, run_generate_command};
pub use plaintext::{
    ExportPlaintextOptions, ImportPlaintextOptions, NormalizeOptions, run_export_plaintext_command,
    run_import_plaintext_command, run_normalize_command,
};
pub use separator::parse_separator;
