// src/docx/mod.rs
pub mod models;
pub mod reader;

// Re-export key document types for convenience
#[allow(unused_imports)]
pub use models::{DocumentContent, DocumentTable};
pub use reader::read_document;
