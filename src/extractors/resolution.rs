// src/extractors/resolution.rs
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::docx::models::DocumentTable;

// --- Constants ---
/// Minimum trimmed subject length; anything shorter is noise.
const MIN_SUBJECT_LEN: usize = 5;
/// A usable row carries at least number, identifier, signature and subject
/// columns.
const MIN_ROW_CELLS: usize = 4;
/// Column holding the raw resolution identifier.
const ID_CELL: usize = 1;
/// Column holding the subject text.
const SUBJECT_CELL: usize = 3;

// --- Data Structures ---
/// A resolution entry: normalized label plus its subject text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub resolution_label: String,
    pub subject: String,
}

// --- Main Extractor Structure ---
/// Scans resolution tables row by row, rejecting noise rows and normalizing
/// the identifier into a "Resolução nº <id>/<year>" label.
pub struct ResolutionExtractor {
    reference_year: i32,
}

impl ResolutionExtractor {
    /// Identifiers without a year segment get the current calendar year.
    pub fn new() -> Self {
        Self {
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Fixes the year appended to identifiers without one.
    pub fn with_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Extracts resolution records from every table, in table-then-row
    /// order. An empty result is valid, not an error.
    pub fn extract(&self, tables: &[DocumentTable]) -> Vec<ResolutionRecord> {
        let mut records = Vec::new();
        for table in tables {
            for row in &table.rows {
                if let Some(record) = self.classify_row(row) {
                    records.push(record);
                }
            }
        }

        tracing::info!("Extracted {} resolution records", records.len());
        records
    }

    /// Applies the rejection filters in order; None means the row is noise
    /// and is silently skipped.
    fn classify_row(&self, cells: &[String]) -> Option<ResolutionRecord> {
        if cells.len() < MIN_ROW_CELLS {
            return None;
        }
        let raw_id = cells[ID_CELL].as_str();
        let subject = cells[SUBJECT_CELL].as_str();

        // An agenda heading swallowed into the table shows up as an
        // extra-wide row mentioning the virtual session in its subject
        // column. Observed in one document layout; kept as-is.
        if cells.len() > MIN_ROW_CELLS && subject.to_lowercase().contains("virtual") {
            tracing::trace!("Skipping embedded agenda row: {:?}", subject);
            return None;
        }

        if subject.trim().chars().count() < MIN_SUBJECT_LEN {
            return None;
        }

        let looks_numeric = raw_id.chars().any(|c| c.is_ascii_digit());

        // The table's own header row ("Nº Resolução") names the column but
        // carries no number.
        if raw_id.to_lowercase().contains("resolução") && !looks_numeric {
            return None;
        }
        if raw_id.is_empty() || !looks_numeric {
            return None;
        }

        Some(ResolutionRecord {
            resolution_label: self.normalize_label(raw_id),
            subject: subject.to_string(),
        })
    }

    /// Strips the textual prefix from the identifier and guarantees a year
    /// segment.
    fn normalize_label(&self, raw_id: &str) -> String {
        let id = raw_id.replace("Resolução", "").replace("nº", "");
        let id = id.trim();
        if id.contains('/') {
            format!("Resolução nº {}", id)
        } else {
            format!("Resolução nº {}/{}", id, self.reference_year)
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> DocumentTable {
        DocumentTable {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn appends_reference_year_to_identifier_without_one() {
        let tables = [table(&[&["1", "Resolução nº 123", "x", "Dispõe sobre o calendário"]])];

        let records = ResolutionExtractor::with_year(2024).extract(&tables);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resolution_label, "Resolução nº 123/2024");
        assert_eq!(records[0].subject, "Dispõe sobre o calendário");
    }

    #[test]
    fn preserves_year_already_present_in_identifier() {
        let tables = [table(&[&["1", "45/2023", "x", "Altera o regimento interno"]])];

        let records = ResolutionExtractor::with_year(2024).extract(&tables);

        assert_eq!(records[0].resolution_label, "Resolução nº 45/2023");
    }

    #[test]
    fn rejects_the_tables_own_header_row() {
        let tables = [table(&[
            &["", "Nº Resolução", "x", "Descrição"],
            &["1", "Resolução nº 9", "x", "Assunto válido"],
        ])];

        let records = ResolutionExtractor::with_year(2024).extract(&tables);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resolution_label, "Resolução nº 9/2024");
    }

    #[test]
    fn rejects_subject_below_length_floor() {
        let tables = [table(&[&["1", "123/2024", "x", "ok"]])];
        assert!(ResolutionExtractor::with_year(2024).extract(&tables).is_empty());
    }

    #[test]
    fn rejects_identifier_without_digits_or_empty() {
        let tables = [table(&[
            &["1", "---", "x", "Assunto válido"],
            &["2", "", "x", "Assunto válido"],
        ])];
        assert!(ResolutionExtractor::with_year(2024).extract(&tables).is_empty());
    }

    #[test]
    fn rejects_embedded_agenda_row_only_above_four_cells() {
        let tables = [table(&[
            // Extra-wide row whose subject names the virtual session
            &["1", "8/2024", "x", "Pauta da Sessão Virtual", "extra"],
            // Four-cell row mentioning "virtual" stays in
            &["2", "9/2024", "x", "Dispõe sobre a sessão virtual"],
        ])];

        let records = ResolutionExtractor::with_year(2024).extract(&tables);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resolution_label, "Resolução nº 9/2024");
    }

    #[test]
    fn rows_with_fewer_than_four_cells_are_skipped() {
        let tables = [table(&[&["1", "123/2024", "Assunto válido"]])];
        assert!(ResolutionExtractor::with_year(2024).extract(&tables).is_empty());
    }

    #[test]
    fn preserves_table_then_row_order_across_all_tables() {
        let tables = [
            table(&[&["1", "10/2024", "x", "Primeira resolução"]]),
            table(&[
                &["1", "11/2024", "x", "Segunda resolução"],
                &["2", "12/2024", "x", "Terceira resolução"],
            ]),
        ];

        let records = ResolutionExtractor::with_year(2024).extract(&tables);

        let labels: Vec<&str> = records.iter().map(|r| r.resolution_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Resolução nº 10/2024",
                "Resolução nº 11/2024",
                "Resolução nº 12/2024",
            ]
        );
    }

    #[test]
    fn normalization_is_a_pure_function_of_id_and_year() {
        let extractor = ResolutionExtractor::with_year(2025);
        assert_eq!(extractor.normalize_label("Resolução nº 123"), "Resolução nº 123/2025");
        assert_eq!(extractor.normalize_label("45/2023"), "Resolução nº 45/2023");
        assert_eq!(extractor.normalize_label("77"), "Resolução nº 77/2025");
    }
}
