use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use translator::{FormatType, TranslationService, duplicate_identifiers};

/// Arguments of the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub language: String,
    pub name: String,
    pub namespace: String,
    /// `.resw` template; `ResourceTemplate.xml` in the working directory or the
    /// bundled one when absent.
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
}

/// Reads the source document and writes `{name}.cs`, `{name}.xaml` and
/// `{name}.resw` into the output directory. Returns the written paths.
pub fn run_generate_command(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    info!(input = %options.input.display(), language = %options.language, "generating translations");

    let service = load_service(options.template.as_deref())?;
    let document = fs::read_to_string(&options.input)
        .with_context(|| format!("failed to read {}", options.input.display()))?;
    let list = service
        .import(&document)
        .with_context(|| format!("failed to import {}", options.input.display()))?;
    debug!(translations = list.len(), "imported translation list");

    for identifier in duplicate_identifiers(&list) {
        warn!(%identifier, "several keys sanitize to the same enum case");
    }

    let mut written = Vec::new();
    for format in FormatType::GENERATED {
        let content = match format {
            FormatType::CSharpEnum => service.export_to_csharp_enum(
                &list,
                &options.language,
                &options.name,
                &options.namespace,
            )?,
            FormatType::XamlDictionary => service.export_to_xaml_identity_dictionary(&list),
            FormatType::Resw => service.export_to_resw(&list, &options.language)?,
            FormatType::TranslationXml => continue,
        };
        let path = options.output_dir.join(format.file_name(&options.name));
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), %format, "wrote artifact");
        written.push(path);
    }

    info!(input = %options.input.display(), files = written.len(), "done generating translations");
    Ok(written)
}

/// Template picked up from the working directory when `--template` is absent.
pub const WORKING_DIR_TEMPLATE: &str = "ResourceTemplate.xml";

/// The explicit template, else `ResourceTemplate.xml` in `working_dir` if present.
fn resolve_template(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = working_dir.join(WORKING_DIR_TEMPLATE);
    candidate.is_file().then_some(candidate)
}

fn load_service(template: Option<&Path>) -> Result<TranslationService> {
    let template = resolve_template(template, Path::new("."));
    match template.as_deref() {
        Some(path) => {
            debug!(template = %path.display(), "using .resw template");
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            TranslationService::with_template_text(&text)
                .with_context(|| format!("invalid template {}", path.display()))
        }
        None => {
            debug!("using bundled .resw template");
            Ok(TranslationService::default())
        }
    }
}
