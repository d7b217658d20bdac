// src/main.rs
mod docx;
mod extractors;
mod render;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use extractors::{PautaExtractor, ResolutionExtractor};
use storage::StorageManager;
use utils::AppError;

/// Which extraction pipeline to run.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Agenda document: paragraph stream, one record per process
    Pauta,
    /// Resolutions document: table stream, one record per resolution
    Resolucoes,
}

/// Command Line Interface for the Pauta/Resolutions extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Extraction mode
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Input .docx document
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for generated reports
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Debug mode - save the parsed block stream as JSON
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Read the input document into its block model
    let content = docx::read_document(&args.input)?;
    tracing::info!(
        "Read {} paragraphs and {} tables from {}",
        content.paragraphs.len(),
        content.tables.len(),
        args.input.display()
    );

    if args.debug {
        let dump_path = format!("{}/blocks_debug.json", args.output_dir);
        utils::block_debug::dump_blocks(&content, &dump_path)?;
    }

    let source_file = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    // 5. Run the selected pipeline and save its report + metadata
    match args.mode {
        Mode::Pauta => {
            let records = PautaExtractor::new().extract(&content.paragraphs);
            if records.is_empty() {
                // Not an error: the document simply has no process entries.
                tracing::warn!(
                    "No process records found in {}; nothing to render",
                    args.input.display()
                );
                return Ok(());
            }
            let session = records[0].session.clone();

            let body = render::pauta_document(&records);
            let bytes = render::build_package(&body)?;
            storage.save_report(&bytes, "relatorio_pauta.docx")?;

            let metadata = serde_json::json!({
                "mode": "pauta",
                "source_file": source_file,
                "record_count": records.len(),
                "session": session,
                "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            });
            storage.save_report_metadata("relatorio_pauta_meta.json", &metadata)?;

            tracing::info!(
                "Processing finished. {} process records, session: {}",
                records.len(),
                session
            );
        }
        Mode::Resolucoes => {
            let records = ResolutionExtractor::new().extract(&content.tables);
            if records.is_empty() {
                tracing::warn!(
                    "No resolution records found in {}; nothing to render",
                    args.input.display()
                );
                return Ok(());
            }

            let body = render::resolutions_document(&records);
            let bytes = render::build_package(&body)?;
            storage.save_report(&bytes, "relatorio_resolucoes.docx")?;

            let metadata = serde_json::json!({
                "mode": "resolucoes",
                "source_file": source_file,
                "record_count": records.len(),
                "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            });
            storage.save_report_metadata("relatorio_resolucoes_meta.json", &metadata)?;

            tracing::info!("Processing finished. {} resolution records", records.len());
        }
    }

    Ok(())
}
