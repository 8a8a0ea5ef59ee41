//! The `search` subcommand: run the pipeline once and write the result.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use bizscout_core::{export, normalize_limit, AppConfig, BusinessRecord};
use bizscout_pipeline::Pipeline;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug)]
pub struct SearchArgs {
    pub location: String,
    pub category: String,
    pub limit: u32,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let pipeline = Pipeline::from_config(config)?;
    let limit = normalize_limit(Some(args.limit));

    let output = pipeline
        .search(&args.location, &args.category, limit)
        .await
        .context("business search failed")?;

    tracing::info!(
        records = output.records.len(),
        enrichment = output.enrichment.label(),
        "search complete"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_output(BufWriter::new(file), args.format, &output.records)?;
            println!("wrote {} businesses to {}", output.records.len(), path.display());
        }
        None => write_output(io::stdout().lock(), args.format, &output.records)?,
    }

    Ok(())
}

pub(crate) fn write_output<W: Write>(
    mut writer: W,
    format: OutputFormat,
    records: &[BusinessRecord],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let (with_website, no_website) = export::partition_by_website(records);
            writer = export::write_csv(writer, &with_website, &no_website)?;
        }
    }
    writer.flush()?;
    Ok(())
}
