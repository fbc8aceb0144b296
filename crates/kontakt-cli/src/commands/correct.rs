//! Correct command - build or update a vCard with an AI model.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use kontakt_ai::{AiError, CorrectionInput, Corrector, GeminiBackend, ImageInput};

use super::extract::resolve_language;

/// Arguments for the correct command.
#[derive(Args)]
pub struct CorrectArgs {
    /// Input text file, or - for stdin. With --update: the edit instructions
    input: Option<String>,

    /// Business card photo (front, back); repeatable
    #[arg(short, long)]
    image: Vec<PathBuf>,

    /// Existing vCard to update according to the input instructions
    #[arg(short, long)]
    update: Option<PathBuf>,

    /// Prompt language (de, en)
    #[arg(short, long)]
    lang: Option<String>,

    /// Model name (overrides config)
    #[arg(short, long)]
    model: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn build_input(args: &CorrectArgs) -> anyhow::Result<CorrectionInput> {
    if !args.image.is_empty() {
        let images = args
            .image
            .iter()
            .map(|path| -> anyhow::Result<ImageInput> {
                let mime = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(ImageInput::mime_for_extension)
                    .ok_or_else(|| anyhow::anyhow!("Unsupported image format: {}", path.display()))?;
                Ok(ImageInput::from_bytes(&fs::read(path)?, mime)?)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        return Ok(CorrectionInput::Images(images));
    }

    let Some(input) = args.input.as_deref() else {
        anyhow::bail!("Provide an input file, - for stdin, or --image");
    };
    let text = super::read_input(input)?;

    match &args.update {
        Some(vcard_path) => Ok(CorrectionInput::Update {
            vcard: fs::read_to_string(vcard_path)?,
            instructions: text,
        }),
        None => Ok(CorrectionInput::from_text(text)),
    }
}

pub async fn run(args: CorrectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(model) = &args.model {
        config.ai.model = model.clone();
    }
    let language = resolve_language(args.lang.as_deref(), config.ai.language)?;
    let input = build_input(&args)?;

    let backend = match GeminiBackend::from_config(&config.ai) {
        Ok(backend) => backend,
        Err(AiError::MissingKey) => anyhow::bail!(
            "No API key configured.\n\n\
             Set {} or run 'kontakt config set ai.api_key <KEY>'.",
            config.ai.api_key_env
        ),
        Err(e) => return Err(e.into()),
    };
    info!("Using model {}", backend.model());

    let corrector = Corrector::from_config(backend, &config.ai).with_language(language);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Waiting for model...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = corrector.correct(&input).await;
    spinner.finish_and_clear();
    let vcard = result?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &vcard)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", vcard);
    }

    Ok(())
}
