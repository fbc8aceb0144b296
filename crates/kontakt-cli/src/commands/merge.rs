//! Merge command - combine and deduplicate vCard files.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use kontakt_core::merge::merge_all;
use kontakt_core::{VCardWriter, parse_vcard};

/// Arguments for the merge command.
#[derive(Args)]
pub struct MergeArgs {
    /// vCard files, oldest first
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Split a file holding several cards at each `END:VCARD`.
fn split_cards(text: &str) -> Vec<String> {
    let mut cards = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() && current.is_empty() {
            continue;
        }
        current.push(line);
        if line.trim().eq_ignore_ascii_case("END:VCARD") {
            cards.push(current.join("\n"));
            current.clear();
        }
    }
    if current.iter().any(|l| !l.trim().is_empty()) {
        cards.push(current.join("\n"));
    }

    cards
}

pub fn run(args: MergeArgs) -> anyhow::Result<()> {
    let mut cards = Vec::new();
    for path in &args.inputs {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        let text = fs::read_to_string(path)?;
        let found = split_cards(&text);
        debug!("{} cards in {}", found.len(), path.display());
        cards.extend(found.iter().map(|card| parse_vcard(card).data));
    }

    let merged = merge_all(&cards);
    info!("Merged {} cards into {}", cards.len(), merged.len());

    let writer = VCardWriter::new();
    let output = merged
        .iter()
        .map(|card| writer.write(card))
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} contacts written to {}",
            style("✓").green(),
            merged.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
