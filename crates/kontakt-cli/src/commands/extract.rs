//! Extract command - turn contact text into a vCard.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use kontakt_core::extract::ContactParser;
use kontakt_core::readable::to_readable_text;
use kontakt_core::{ImpressumParser, Language, VCardWriter};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file, or - for stdin
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "vcard")]
    format: OutputFormat,

    /// Language for readable output (de, en)
    #[arg(short, long)]
    lang: Option<String>,

    /// List lines no extraction pass could interpret
    #[arg(long)]
    show_unclaimed: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// vCard 3.0
    Vcard,
    /// JSON contact data
    Json,
    /// Readable labelled text
    Text,
}

/// Resolve `--lang`, falling back to the configured language.
pub fn resolve_language(lang: Option<&str>, fallback: Language) -> anyhow::Result<Language> {
    match lang {
        Some(code) => Language::from_code(code)
            .ok_or_else(|| anyhow::anyhow!("Unsupported language: {}", code)),
        None => Ok(fallback),
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let language = resolve_language(args.lang.as_deref(), config.ai.language)?;
    let text = super::read_input(&args.input)?;

    info!("Extracting contact from {}", args.input);

    let parser = ImpressumParser::from_config(&config.extraction);
    let writer = VCardWriter::new().with_charset(config.vcard.emit_charset);
    let result = parser.parse(&text);
    let data = result.record.to_vcard_data();
    debug!("Extraction took {}ms", result.processing_time_ms);

    let output = match args.format {
        OutputFormat::Vcard => writer.write(&data),
        OutputFormat::Json => serde_json::to_string_pretty(&data)?,
        OutputFormat::Text => to_readable_text(&writer.write(&data), language),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_unclaimed {
        eprintln!();
        eprintln!("{}", style("Unclaimed lines:").yellow());
        for line in result.unclaimed().filter(|l| !l.clean.is_empty()) {
            eprintln!("  - {}", line.clean);
        }
    }

    Ok(())
}
