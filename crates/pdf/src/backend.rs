use std::collections::BTreeMap;

use lopdf::content::Content;

use crate::PdfError;

/// A page identifier mirroring `lopdf::ObjectId`: (object number, generation number).
pub type PageId = (u32, u16);

/// A simplified, lopdf-independent representation of a content-stream operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<Operand>),
    /// Dictionaries, streams and references; text extraction never looks
    /// inside them.
    Other,
}

impl Operand {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Operand::Integer(i) => Some(*i as f32),
            Operand::Real(f) => Some(*f),
            _ => None,
        }
    }
}

/// A single content-stream operation (operator + operands).
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<Operand>,
}

impl ContentOp {
    pub fn new(operator: &str, operands: Vec<Operand>) -> Self {
        ContentOp {
            operator: operator.to_string(),
            operands,
        }
    }
}

pub fn convert_object(obj: &lopdf::Object) -> Operand {
    match obj {
        lopdf::Object::Null => Operand::Null,
        lopdf::Object::Boolean(b) => Operand::Bool(*b),
        lopdf::Object::Integer(i) => Operand::Integer(*i),
        lopdf::Object::Real(f) => Operand::Real(*f),
        lopdf::Object::Name(n) => Operand::Name(n.clone()),
        lopdf::Object::String(s, _) => Operand::Str(s.clone()),
        lopdf::Object::Array(arr) => Operand::Array(arr.iter().map(convert_object).collect()),
        _ => Operand::Other,
    }
}

/// Best-effort decoding of raw PDF string bytes.
///
/// UTF-16BE with a BOM first, then UTF-8, then Latin-1 for everything else.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(payload) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let code_units: Vec<u16> = payload
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&code_units);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    bytes.iter().map(|&b| b as char).collect()
}

/// Read access to a parsed PDF. Text assembly is written against this
/// trait so it can run over fixture documents.
pub trait PdfBackend {
    /// 1-based page number to [`PageId`].
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Decompressed content stream bytes for a page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>, PdfError>;

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>, PdfError>;

    /// Decode the bytes of a text-showing operator using whatever encoding
    /// hints the font `font_name` on `page` provides.
    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String;

    /// Info dictionary entries.
    fn metadata(&self) -> BTreeMap<String, String>;
}

pub struct LopdfBackend {
    doc: lopdf::Document,
}

impl LopdfBackend {
    pub fn load_bytes(data: &[u8]) -> Result<Self, PdfError> {
        let doc = lopdf::Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    /// Wrap an already parsed document. Documents that stay encrypted after
    /// loading (a user password is required) are rejected.
    pub fn from_document(doc: lopdf::Document) -> Result<Self, PdfError> {
        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }

        Ok(Self { doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn version(&self) -> String {
        self.doc.version.clone()
    }

    fn font_encoding_name(&self, page: PageId, font_name: &[u8]) -> Option<String> {
        let fonts = self.doc.get_page_fonts(page).ok()?;
        let font_dict = fonts.get(font_name)?;
        match font_dict.get(b"Encoding").ok()? {
            lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
            _ => None,
        }
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_content(&self, page: PageId) -> Result<Vec<u8>, PdfError> {
        self.doc
            .get_page_content(page)
            .map_err(|e| PdfError::Parse(format!("cannot get page content: {e}")))
    }

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>, PdfError> {
        let content = Content::decode(data)
            .map_err(|e| PdfError::Parse(format!("content stream decode error: {e}")))?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operands: op.operands.iter().map(convert_object).collect(),
                operator: op.operator,
            })
            .collect())
    }

    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String {
        // Identity-H / Identity-V fonts use 2-byte codes; try UTF-16BE.
        if let Some(encoding) = self.font_encoding_name(page, font_name) {
            if encoding.starts_with("Identity") && bytes.len() >= 2 && bytes.len() % 2 == 0 {
                let code_units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                let decoded = String::from_utf16_lossy(&code_units);
                if !decoded.chars().all(|c| c == '\u{FFFD}' || c == '\0') {
                    return decoded;
                }
            }
        }

        decode_text_simple(bytes)
    }

    fn metadata(&self) -> BTreeMap<String, String> {
        let mut meta = BTreeMap::new();

        let info_dict = match self.doc.trailer.get(b"Info") {
            Ok(lopdf::Object::Reference(id)) => match self.doc.get_object(*id) {
                Ok(lopdf::Object::Dictionary(d)) => d,
                _ => return meta,
            },
            Ok(lopdf::Object::Dictionary(d)) => d,
            _ => return meta,
        };

        for (key, value) in info_dict.iter() {
            let value = match value {
                lopdf::Object::String(bytes, _) => decode_text_simple(bytes),
                lopdf::Object::Name(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                _ => continue,
            };
            meta.insert(String::from_utf8_lossy(key).into_owned(), value);
        }

        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    #[test]
    fn decode_text_simple_utf8() {
        assert_eq!(decode_text_simple("caf\u{00E9}".as_bytes()), "caf\u{00E9}");
    }

    #[test]
    fn decode_text_simple_latin1() {
        assert_eq!(decode_text_simple(&[0x63, 0x61, 0x66, 0xE9]), "caf\u{00E9}");
    }

    #[test]
    fn decode_text_simple_utf16be() {
        assert_eq!(decode_text_simple(&[0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42]), "AB");
        // A trailing odd byte is ignored.
        assert_eq!(decode_text_simple(&[0xFE, 0xFF, 0x00, 0x41, 0x00]), "A");
    }

    #[test]
    fn decode_text_simple_empty() {
        assert_eq!(decode_text_simple(&[]), "");
    }

    #[test]
    fn operand_as_number() {
        assert_eq!(Operand::Integer(-3).as_number(), Some(-3.0));
        assert_eq!(Operand::Real(1.5).as_number(), Some(1.5));
        assert_eq!(Operand::Name(b"F1".to_vec()).as_number(), None);
    }

    #[test]
    fn encrypted_document_is_rejected() {
        let mut doc = lopdf::Document::with_version("1.5");
        let encrypt_id = doc.add_object(lopdf::dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "O" => lopdf::Object::string_literal(vec![0u8; 32]),
            "U" => lopdf::Object::string_literal(vec![0u8; 32]),
            "P" => -4,
        });
        doc.trailer.set("Encrypt", encrypt_id);

        assert!(matches!(
            LopdfBackend::from_document(doc),
            Err(PdfError::Encrypted)
        ));
    }

    #[test]
    fn plain_document_is_accepted() {
        let doc = lopdf::Document::with_version("1.5");
        assert!(LopdfBackend::from_document(doc).is_ok());
    }

    #[test]
    fn convert_nested_array() {
        let obj = lopdf::Object::Array(vec![
            lopdf::Object::String(b"Hi".to_vec(), lopdf::StringFormat::Literal),
            lopdf::Object::Integer(-250),
            lopdf::Object::Reference((4, 0)),
        ]);
        assert_eq!(
            convert_object(&obj),
            Operand::Array(vec![
                Operand::Str(b"Hi".to_vec()),
                Operand::Integer(-250),
                Operand::Other,
            ])
        );
    }
}
