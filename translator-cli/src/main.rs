use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use translator_cli::{
    ExportPlaintextOptions, GenerateOptions, ImportPlaintextOptions, NormalizeOptions,
    parse_separator, run_export_plaintext_command, run_generate_command,
    run_import_plaintext_command, run_normalize_command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate `{name}.cs`, `{name}.xaml` and `{name}.resw` from a translation XML.
    Generate {
        /// The translation XML to read
        input: PathBuf,
        /// Language of the enum comments and the .resw values, e.g. en-us
        language: String,
        /// Base name of the generated enum and files
        name: String,
        /// Namespace of the generated enum
        namespace: String,
        /// .resw template with a single `{0}` placeholder (defaults to ./ResourceTemplate.xml, then the bundled template)
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Directory the generated files are written to
        #[arg(short = 'd', long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Export untranslated values as plaintext for an external translator.
    ExportPlaintext {
        /// The translation XML to read
        #[arg(short, long)]
        input: PathBuf,
        /// Language the values are taken from
        #[arg(long, default_value = "en-us")]
        from: String,
        /// Language the values will be translated to
        #[arg(long)]
        to: String,
        /// Separator between values (`\n`, `\t` escapes allowed)
        #[arg(short, long, default_value = r"\n", value_parser = parse_separator)]
        separator: String,
        /// Prefix every value with `{{key}}` so it can be merged by key
        #[arg(long)]
        keyed: bool,
        /// Write the payload to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge translated plaintext back into the translation XML.
    ImportPlaintext {
        /// The translation XML to update
        #[arg(short, long)]
        input: PathBuf,
        /// File holding the translated payload
        #[arg(short, long)]
        translated: PathBuf,
        /// Language of the translated payload
        #[arg(short, long)]
        lang: String,
        /// Separator between values (`\n`, `\t` escapes allowed)
        #[arg(short, long, default_value = r"\n", value_parser = parse_separator)]
        separator: String,
        /// The payload was exported with `--keyed`
        #[arg(long)]
        keyed: bool,
        /// Write one element per line
        #[arg(long)]
        pretty: bool,
        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite a translation XML in canonical form.
    Normalize {
        /// The translation XML to read
        #[arg(short, long)]
        input: PathBuf,
        /// Write one element per line
        #[arg(long)]
        pretty: bool,
        /// Print the imported model as JSON instead
        #[arg(long, conflicts_with = "pretty")]
        json: bool,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator=info,translator_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args.commands) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(commands: Commands) -> Result<()> {
    match commands {
        Commands::Generate {
            input,
            language,
            name,
            namespace,
            template,
            output_dir,
        } => {
            run_generate_command(&GenerateOptions {
                input,
                language,
                name,
                namespace,
                template,
                output_dir,
            })?;
        }
        Commands::ExportPlaintext {
            input,
            from,
            to,
            separator,
            keyed,
            output,
        } => run_export_plaintext_command(&ExportPlaintextOptions {
            input,
            from,
            to,
            separator,
            keyed,
            output,
        })?,
        Commands::ImportPlaintext {
            input,
            translated,
            lang,
            separator,
            keyed,
            pretty,
            output,
        } => run_import_plaintext_command(&ImportPlaintextOptions {
            input,
            translated,
            language: lang,
            separator,
            keyed,
            pretty,
            output,
        })?,
        Commands::Normalize {
            input,
            pretty,
            json,
            output,
        } => run_normalize_command(&NormalizeOptions {
            input,
            pretty,
            json,
            output,
        })?,
    }
    Ok(())
}
