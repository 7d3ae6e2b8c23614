//! Plain-text extraction from PDF documents.
//!
//! Pages are walked through their content streams: text-showing operators
//! produce text, positioning operators produce line breaks, and the result
//! is normalized with [`cleanup::normalize_text`].

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use backend::{LopdfBackend, PdfBackend};

pub mod backend;
pub mod cleanup;
pub mod text;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageText {
    /// 1-based page number.
    pub page: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedText {
    pub page_count: usize,
    pub pages: Vec<PageText>,
    /// All non-empty pages joined by a blank line.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInfo {
    pub version: String,
    pub page_count: usize,
    pub metadata: BTreeMap<String, String>,
}

/// Extract the text of every page of a PDF.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, PdfError> {
    let backend = LopdfBackend::load_bytes(bytes)?;
    extract_from_backend(&backend)
}

/// Page count, version and Info dictionary of a PDF.
pub fn info(bytes: &[u8]) -> Result<DocumentInfo, PdfError> {
    let backend = LopdfBackend::load_bytes(bytes)?;
    Ok(DocumentInfo {
        version: backend.version(),
        page_count: backend.page_count(),
        metadata: backend.metadata(),
    })
}

pub fn extract_from_backend<B: PdfBackend>(backend: &B) -> Result<ExtractedText, PdfError> {
    let mut pages = Vec::new();

    for (number, page_id) in backend.pages() {
        let content = match backend.page_content(page_id) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("skipping page {number}: {e}");
                pages.push(PageText {
                    page: number,
                    text: String::new(),
                });
                continue;
            }
        };

        let ops = backend.decode_content(&content)?;
        let raw = text::assemble_text(&ops, |font, bytes| {
            backend.decode_text(page_id, font, bytes)
        });
        log::debug!("page {number}: {} operations, {} chars", ops.len(), raw.len());

        pages.push(PageText {
            page: number,
            text: cleanup::normalize_text(&raw),
        });
    }

    let text = pages
        .iter()
        .map(|p| p.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(ExtractedText {
        page_count: pages.len(),
        pages,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a PDF with one Helvetica text block per page, one `Tj` per line.
    fn sample_pdf(pages: &[&[&str]], title: Option<&str>) -> Vec<u8> {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        };
        let pages: Vec<Vec<Object>> = pages
            .iter()
            .map(|lines| lines.iter().map(|l| Object::string_literal(*l)).collect())
            .collect();
        pdf_with_font(font, &pages, title)
    }

    /// Build a PDF whose pages show the given string objects with font `F1`.
    fn pdf_with_font(font: lopdf::Dictionary, pages: &[Vec<Object>], title: Option<&str>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(font);
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
            ];
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
                }
                operations.push(Operation::new("Tj", vec![line.clone()]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title),
            });
            doc.trailer.set("Info", info_id);
        }

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    // ============================================================================
    // extract_text tests
    // ============================================================================

    #[test]
    fn test_extract_single_page() {
        let bytes = sample_pdf(&[&["Hello World", "Second line"]], None);
        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.page_count, 1);
        assert_eq!(extracted.pages[0].page, 1);
        assert_eq!(extracted.pages[0].text, "Hello World\nSecond line");
        assert_eq!(extracted.text, "Hello World\nSecond line");
    }

    #[test]
    fn test_extract_multiple_pages() {
        let bytes = sample_pdf(&[&["Page one"], &[], &["Page three"]], None);
        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.page_count, 3);
        assert_eq!(extracted.pages[1].text, "");
        assert_eq!(extracted.text, "Page one\n\nPage three");
    }

    #[test]
    fn test_extract_identity_h_font_as_utf16() {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "NotoSans",
            "Encoding" => "Identity-H",
        };
        // "Hé" as two-byte codes.
        let shown = Object::String(vec![0x00, 0x48, 0x00, 0xE9], lopdf::StringFormat::Hexadecimal);
        let bytes = pdf_with_font(font, &[vec![shown]], None);

        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.text, "H\u{e9}");
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    // ============================================================================
    // info tests
    // ============================================================================

    #[test]
    fn test_info_reads_metadata() {
        let bytes = sample_pdf(&[&["a"], &["b"]], Some("Quarterly Report"));
        let info = info(&bytes).unwrap();
        assert_eq!(info.page_count, 2);
        assert_eq!(info.version, "1.5");
        assert_eq!(
            info.metadata.get("Title").map(String::as_str),
            Some("Quarterly Report")
        );
    }

    #[test]
    fn test_info_without_info_dictionary() {
        let bytes = sample_pdf(&[&["a"]], None);
        let info = info(&bytes).unwrap();
        assert_eq!(info.page_count, 1);
        assert!(info.metadata.is_empty());
    }
}
