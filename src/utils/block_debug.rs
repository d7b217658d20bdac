// src/utils/block_debug.rs
use std::fs;
use std::path::Path;

use crate::docx::models::DocumentContent;
use crate::utils::error::AppError;

/// Saves the parsed block stream (paragraphs and table rows) as
/// pretty-printed JSON, for inspecting what the extractors actually see.
pub fn dump_blocks(content: &DocumentContent, filename: &str) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(content)
        .map_err(|e| AppError::Processing(format!("Failed to serialize block dump: {}", e)))?;

    fs::write(Path::new(filename), json)?;

    tracing::info!("Saved block dump to {}", filename);
    Ok(())
}
