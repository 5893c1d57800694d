use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use translator::manipulation::{
    append_keyed_plaintext_translations, append_plaintext_translations, export_keyed_plaintext,
    export_plaintext, generate_translation,
};
use translator::{TranslationList, traits::Parser};

/// Separator placed between elements of pretty regenerated XML.
const PRETTY_SEPARATOR: &str = "\n";

#[derive(Debug, Clone)]
pub struct ExportPlaintextOptions {
    pub input: PathBuf,
    pub from: String,
    pub to: String,
    pub separator: String,
    pub keyed: bool,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ImportPlaintextOptions {
    pub input: PathBuf,
    pub translated: PathBuf,
    pub language: String,
    pub separator: String,
    pub keyed: bool,
    pub pretty: bool,
    /// Defaults to overwriting `input`.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub input: PathBuf,
    pub pretty: bool,
    /// Dump the imported model as JSON instead of XML.
    pub json: bool,
    pub output: Option<PathBuf>,
}

pub fn read_translation_list(path: &Path) -> Result<TranslationList> {
    let document =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    TranslationList::from_str(&document)
        .with_context(|| format!("failed to import {}", path.display()))
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn separator_for(pretty: bool) -> &'static str {
    if pretty { PRETTY_SEPARATOR } else { "" }
}

/// Writes the untranslated `from` values, ready for an external translator.
pub fn run_export_plaintext_command(options: &ExportPlaintextOptions) -> Result<()> {
    let list = read_translation_list(&options.input)?;
    let payload = if options.keyed {
        export_keyed_plaintext(&list, &options.from, &options.to, &options.separator)?
    } else {
        export_plaintext(&list, &options.from, &options.to, &options.separator)?
    };
    debug!(bytes = payload.len(), from = %options.from, to = %options.to, "exported plaintext");
    write_or_print(options.output.as_deref(), &payload)
}

/// Merges a translated payload and rewrites the source document.
pub fn run_import_plaintext_command(options: &ImportPlaintextOptions) -> Result<()> {
    let list = read_translation_list(&options.input)?;
    let translated = fs::read_to_string(&options.translated)
        .with_context(|| format!("failed to read {}", options.translated.display()))?;
    // Editors and `export-plaintext > file` leave a final newline behind.
    let translated = trim_final_newline(&translated);

    let before = count_values(&list);
    let list = if options.keyed {
        append_keyed_plaintext_translations(list, &translated, &options.language, &options.separator)
    } else {
        append_plaintext_translations(list, &translated, &options.language, &options.separator)
    }
    .with_context(|| format!("failed to merge {}", options.translated.display()))?;
    info!(
        language = %options.language,
        added = count_values(&list) - before,
        "merged translated plaintext"
    );

    let document = generate_translation(&list, separator_for(options.pretty));
    let output = options.output.as_deref().unwrap_or(options.input.as_path());
    write_or_print(Some(output), &document)
}

/// Re-serializes a source document in canonical form.
pub fn run_normalize_command(options: &NormalizeOptions) -> Result<()> {
    let list = read_translation_list(&options.input)?;
    let content = if options.json {
        serde_json::to_string_pretty(&list).context("failed to serialize to JSON")?
    } else {
        generate_translation(&list, separator_for(options.pretty))
    };
    write_or_print(options.output.as_deref(), &content)
}

fn count_values(list: &TranslationList) -> usize {
    list.iter().map(|t| t.values.len()).sum()
}

fn trim_final_newline(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_final_newline() {
        assert_eq!(trim_final_newline("a b\n"), "a b");
        assert_eq!(trim_final_newline("a b\r\n"), "a b");
        assert_eq!(trim_final_newline("a b\n\n"), "a b\n");
        assert_eq!(trim_final_newline("a b"), "a b");
    }

    #[test]
    fn test_count_values() {
        let list = TranslationList::from_str(
            r#"<root><data key="A"><value lang="en-us">a</value><value lang="it-it">b</value></data><data key="B"/></root>"#,
        )
        .unwrap();
        assert_eq!(count_values(&list), 2);
    }
}
