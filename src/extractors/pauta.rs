// src/extractors/pauta.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractors::session::SessionLabelResolver;

// --- Regex Patterns for Text Matching (Lazy Static) ---
// Start-of-record marker: "Processo" plus an optional "nº"/"n." prefix
// before the number itself (digits, dots, hyphens, slashes), anywhere in
// the line.
static PROCESS_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Processo\s*n?[º.]?\s*([\d.\-/]+)")
        .expect("Failed to compile PROCESS_MARKER_RE")
});

// --- Data Structures ---
/// A single agenda entry: one process with its accumulated fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub process_number: String,
    pub subject: String,
    pub rapporteur: String,
    pub session: String,
}

/// Per-paragraph classification driving the scan state machine.
enum LineKind<'a> {
    ProcessMarker(&'a str),
    Subject(&'a str),
    Rapporteur(&'a str),
    Other,
}

fn classify(text: &str) -> LineKind<'_> {
    if let Some(caps) = PROCESS_MARKER_RE.captures(text) {
        if let Some(number) = caps.get(1) {
            return LineKind::ProcessMarker(number.as_str());
        }
    }
    if text.starts_with("Objeto:") || text.starts_with("Assunto:") {
        return LineKind::Subject(after_colon(text));
    }
    if text.starts_with("Relator:") {
        return LineKind::Rapporteur(after_colon(text));
    }
    LineKind::Other
}

/// Text after the first colon, trimmed.
fn after_colon(text: &str) -> &str {
    text.splitn(2, ':').nth(1).unwrap_or("").trim()
}

// --- Main Extractor Structure ---
/// Segments a paragraph stream into per-process records.
pub struct PautaExtractor;

impl PautaExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// Extracts process records from the paragraph stream in a single
    /// forward pass.
    ///
    /// State machine: a process marker closes the pending record and opens a
    /// new one; "Objeto:"/"Assunto:" and "Relator:" lines fill the pending
    /// record (last occurrence wins); everything else is ignored. A field
    /// line before the first marker has no record to attach to and is
    /// dropped. An empty result is valid, not an error.
    pub fn extract(&self, paragraphs: &[String]) -> Vec<ProcessRecord> {
        let session = SessionLabelResolver::resolve(paragraphs);
        tracing::debug!("Resolved session label: {}", session);

        let mut records = Vec::new();
        let mut pending: Option<ProcessRecord> = None;

        for text in paragraphs {
            match classify(text) {
                LineKind::ProcessMarker(number) => {
                    // The previous record is only complete once its
                    // successor's marker shows up.
                    if let Some(done) = pending.take() {
                        records.push(done);
                    }
                    pending = Some(ProcessRecord {
                        process_number: number.to_string(),
                        subject: String::new(),
                        rapporteur: String::new(),
                        session: session.clone(),
                    });
                }
                LineKind::Subject(value) => {
                    if let Some(record) = pending.as_mut() {
                        record.subject = value.to_string();
                    }
                }
                LineKind::Rapporteur(value) => {
                    if let Some(record) = pending.as_mut() {
                        record.rapporteur = value.to_string();
                    }
                }
                LineKind::Other => {}
            }
        }

        // End-of-stream closes the last record.
        if let Some(done) = pending.take() {
            records.push(done);
        }

        tracing::info!("Extracted {} process records", records.len());
        records
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn paras(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn extracts_full_agenda_with_shared_session_label() {
        let paragraphs = paras(&[
            "Pauta da 8ª Sessão Virtual",
            "Processo nº 123.456/2024",
            "Objeto: Teste",
            "Relator: Dr. João",
            "Processo nº 789/2024",
            "Relator: Dra. Ana",
        ]);

        let records = PautaExtractor::new().extract(&paragraphs);

        assert_eq!(
            records,
            vec![
                ProcessRecord {
                    process_number: "123.456/2024".to_string(),
                    subject: "Teste".to_string(),
                    rapporteur: "Dr. João".to_string(),
                    session: "8ª Virtual".to_string(),
                },
                ProcessRecord {
                    process_number: "789/2024".to_string(),
                    subject: String::new(),
                    rapporteur: "Dra. Ana".to_string(),
                    session: "8ª Virtual".to_string(),
                },
            ]
        );
    }

    #[test]
    fn stream_without_markers_yields_empty_list() {
        let paragraphs = paras(&["Pauta da 8ª Sessão Virtual", "Objeto: Solto", "texto comum"]);
        assert!(PautaExtractor::new().extract(&paragraphs).is_empty());
    }

    #[test]
    fn every_marker_opens_exactly_one_record() {
        let paragraphs = paras(&[
            "Processo nº 1/2024",
            "considerações gerais",
            "Processo nº 2/2024",
            "Processo n. 3-2024",
        ]);

        let records = PautaExtractor::new().extract(&paragraphs);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].process_number, "1/2024");
        assert_eq!(records[1].process_number, "2/2024");
        assert_eq!(records[2].process_number, "3-2024");
    }

    #[test]
    fn field_line_before_first_marker_is_dropped() {
        let paragraphs = paras(&[
            "Relator: Dr. Perdido",
            "Processo nº 10/2024",
            "Relator: Dra. Certa",
        ]);

        let records = PautaExtractor::new().extract(&paragraphs);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rapporteur, "Dra. Certa");
    }

    #[test]
    fn objeto_and_assunto_are_interchangeable_and_last_wins() {
        let paragraphs = paras(&[
            "Processo nº 10/2024",
            "Assunto: Primeiro texto",
            "Objeto: Segundo texto",
        ]);

        let records = PautaExtractor::new().extract(&paragraphs);

        assert_eq!(records[0].subject, "Segundo texto");
    }

    #[test]
    fn marker_is_case_insensitive_and_matches_mid_line() {
        let paragraphs = paras(&["Item 3 - PROCESSO Nº 55/2024 (destaque)"]);

        let records = PautaExtractor::new().extract(&paragraphs);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].process_number, "55/2024");
    }

    #[test]
    fn marker_line_carries_no_other_field() {
        // A marker line never feeds subject/rapporteur, even if it has colons.
        let paragraphs = paras(&["Processo nº 7/2024 - Relator: indefinido"]);

        let records = PautaExtractor::new().extract(&paragraphs);

        assert_eq!(records[0].process_number, "7/2024");
        assert_eq!(records[0].rapporteur, "");
    }

    #[test]
    fn extraction_is_idempotent() {
        let paragraphs = paras(&[
            "Pauta da 8ª Sessão Virtual",
            "Processo nº 1/2024",
            "Objeto: Qualquer",
        ]);
        let extractor = PautaExtractor::new();

        assert_eq!(extractor.extract(&paragraphs), extractor.extract(&paragraphs));
    }
}
