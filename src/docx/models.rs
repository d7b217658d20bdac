// src/docx/models.rs
use serde::{Deserialize, Serialize};

/// Block-level view of a word-processing document: the body paragraphs in
/// order, plus every table as rows of cell texts. All texts are trimmed.
///
/// This is the only shape the extractors ever see; nothing downstream of the
/// reader touches the file or the XML again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentContent {
    pub paragraphs: Vec<String>,
    pub tables: Vec<DocumentTable>,
}

/// One table, in document order: rows of cell texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentTable {
    pub rows: Vec<Vec<String>>,
}
