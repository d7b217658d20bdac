// src/render/mod.rs
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::extractors::{ProcessRecord, ResolutionRecord};
use crate::utils::error::RenderError;

// --- Constants ---
/// Six-column layout of the pauta report. The last two columns stay blank
/// and are filled in by hand after signature/publication.
pub const PAUTA_COLUMNS: [&str; 6] = [
    "Nº Processo",
    "Assunto",
    "DISTRIBUIDO P/ CONSELHEIRO(A)",
    "Sessão",
    "Data da Assinatura",
    "Data da Publicação",
];

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#,
);

const RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

// Single-line borders so the report table reads as a grid.
const TABLE_PROPS: &str = concat!(
    r#"<w:tblPr><w:tblBorders>"#,
    r#"<w:top w:val="single"/><w:bottom w:val="single"/>"#,
    r#"<w:left w:val="single"/><w:right w:val="single"/>"#,
    r#"<w:insideH w:val="single"/><w:insideV w:val="single"/>"#,
    r#"</w:tblBorders></w:tblPr>"#,
);

// --- WordprocessingML helpers ---
/// Escapes text content for embedding in XML.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn paragraph(text: &str) -> String {
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

fn heading(text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

fn cell(text: &str, bold: bool) -> String {
    let run = if bold {
        format!(
            r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
            escape_xml(text)
        )
    } else {
        format!(
            r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
            escape_xml(text)
        )
    };
    format!("<w:tc><w:p>{}</w:p></w:tc>", run)
}

fn row(cells: &[String]) -> String {
    format!("<w:tr>{}</w:tr>", cells.concat())
}

// --- Report bodies ---
/// Renders the pauta table report body: a heading plus the six-column table
/// with one row per record.
pub fn pauta_document(records: &[ProcessRecord]) -> String {
    let mut body = String::new();
    body.push_str(&heading("Relatório de Processos"));

    let mut table = String::from("<w:tbl>");
    table.push_str(TABLE_PROPS);

    let header: Vec<String> = PAUTA_COLUMNS.iter().map(|col| cell(col, true)).collect();
    table.push_str(&row(&header));

    for record in records {
        let cells: Vec<String> = [
            record.process_number.as_str(),
            record.subject.as_str(),
            record.rapporteur.as_str(),
            record.session.as_str(),
            "", // Data da Assinatura
            "", // Data da Publicação
        ]
        .iter()
        .map(|value| cell(value, false))
        .collect();
        table.push_str(&row(&cells));
    }
    table.push_str("</w:tbl>");

    body.push_str(&table);
    body
}

/// Renders the resolutions running-text report body: a heading plus one
/// paragraph per record combining label and subject.
pub fn resolutions_document(records: &[ResolutionRecord]) -> String {
    let mut body = String::new();
    body.push_str(&heading("Relatório de Resoluções"));
    for record in records {
        body.push_str(&paragraph(&format!(
            "{} - {}",
            record.resolution_label, record.subject
        )));
    }
    body
}

// --- Packaging ---
/// Wraps a rendered body in the minimal valid .docx package:
/// [Content_Types].xml, _rels/.rels and word/document.xml.
pub fn build_package(body_xml: &str) -> Result<Vec<u8>, RenderError> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        W_NS, body_xml
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer.start_file("[Content_Types].xml", options)?;
    writer.write_all(CONTENT_TYPES_XML.as_bytes())?;

    writer.start_file("_rels/.rels", options)?;
    writer.write_all(RELS_XML.as_bytes())?;

    writer.start_file("word/document.xml", options)?;
    writer.write_all(document.as_bytes())?;

    let cursor = writer.finish()?;
    tracing::debug!("Built .docx package ({} bytes)", cursor.get_ref().len());
    Ok(cursor.into_inner())
}
