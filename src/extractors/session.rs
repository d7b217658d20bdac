// src/extractors/session.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// How many leading paragraphs are scanned for the session heading.
const HEADING_SCAN_LIMIT: usize = 15;

/// Fallback label when no heading qualifies or it yields no pieces.
const FALLBACK_LABEL: &str = "Sessão";

// --- Regex Patterns for Text Matching (Lazy Static) ---
// Numeral-ordinal token, e.g. "8ª". Source documents use the feminine,
// masculine and degree-sign markers interchangeably.
static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+[ªº°])").expect("Failed to compile ORDINAL_RE"));

/// Derives the short session label ("8ª Virtual") from the agenda heading.
pub struct SessionLabelResolver;

impl SessionLabelResolver {
    /// Scans the first 15 paragraphs for the heading that names the session
    /// and reduces it to ordinal + "Virtual" flag.
    ///
    /// The heading must contain "Sessão" (casing as printed in the source
    /// documents) and "pauta da" in its lowercase form. Returns "Sessão"
    /// when no paragraph qualifies.
    pub fn resolve(paragraphs: &[String]) -> String {
        paragraphs
            .iter()
            .take(HEADING_SCAN_LIMIT)
            .find(|text| text.contains("Sessão") && text.to_lowercase().contains("pauta da"))
            .map(|text| Self::shorten(text))
            .unwrap_or_else(|| FALLBACK_LABEL.to_string())
    }

    /// Keeps only the ordinal token and the "Virtual" flag of a heading.
    fn shorten(text: &str) -> String {
        let ordinal = ORDINAL_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");
        let kind = if text.contains("Virtual") { "Virtual" } else { "" };

        let label = format!("{} {}", ordinal, kind).trim().to_string();
        if label.is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            label
        }
    }
}
