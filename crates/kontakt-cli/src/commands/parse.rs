//! Parse command - read a vCard file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use kontakt_core::parse_vcard;
use kontakt_core::readable::to_readable_text;

use super::extract::resolve_language;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// vCard file, or - for stdin
    #[arg(required = true)]
    input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ParseFormat,

    /// Language for readable output (de, en)
    #[arg(short, long)]
    lang: Option<String>,

    /// Fail if BEGIN:VCARD or END:VCARD is missing
    #[arg(long)]
    strict: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ParseFormat {
    /// JSON with raw text, data and validity
    Json,
    /// Readable labelled text
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let language = resolve_language(args.lang.as_deref(), config.ai.language)?;
    let text = super::read_input(&args.input)?;

    let parsed = parse_vcard(&text);
    if let Some(defect) = parsed.defect() {
        if args.strict {
            anyhow::bail!("Invalid vCard: {}", defect);
        }
        eprintln!("{} {}", style("⚠").yellow(), defect);
    }

    let output = match args.format {
        ParseFormat::Json => serde_json::to_string_pretty(&parsed)?,
        ParseFormat::Text => to_readable_text(&text, language),
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

    Ok(())
}
