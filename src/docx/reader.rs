// src/docx/reader.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::docx::models::{DocumentContent, DocumentTable};
use crate::utils::error::DocxError;

/// The OPC part holding the document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Opens a .docx file and returns its block-level content.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<DocumentContent, DocxError> {
    let path = path.as_ref();
    tracing::info!("Reading document: {}", path.display());

    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(DocxError::MissingPart(DOCUMENT_PART.to_string()));
        }
        Err(e) => return Err(DocxError::Zip(e)),
    }
    tracing::debug!("Read {} ({} bytes)", DOCUMENT_PART, xml.len());

    parse_document_xml(&xml)
}

/// Parses WordprocessingML into the block model.
///
/// Only direct children of w:body are walked, so paragraphs inside table
/// cells stay with their table and never leak into the paragraph stream.
pub fn parse_document_xml(xml: &str) -> Result<DocumentContent, DocxError> {
    let doc = roxmltree::Document::parse(xml)?;

    let body = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "body")
        .ok_or_else(|| DocxError::MissingPart("w:body".to_string()))?;

    let mut content = DocumentContent::default();
    for node in body.children().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "p" => content.paragraphs.push(element_text(node)),
            "tbl" => content.tables.push(parse_table(node)),
            _ => {} // section properties, bookmarks, etc.
        }
    }

    tracing::debug!(
        "Parsed {} paragraphs and {} tables",
        content.paragraphs.len(),
        content.tables.len()
    );
    Ok(content)
}

fn parse_table(table: roxmltree::Node) -> DocumentTable {
    let mut rows = Vec::new();
    for row in table
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "tr")
    {
        let cells = row
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "tc")
            .map(element_text)
            .collect();
        rows.push(cells);
    }
    DocumentTable { rows }
}

/// Concatenates every w:t text run under the node, trimmed.
fn element_text(node: roxmltree::Node) -> String {
    let mut text = String::new();
    for t in node
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "t")
    {
        if let Some(chunk) = t.text() {
            text.push_str(chunk);
        }
    }
    text.trim().to_string()
}
