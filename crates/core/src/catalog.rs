//! Static catalog of tools and the categories that group them.

use serde::Serialize;

/// Icon shown next to a tool or category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Braces,
    CircleCheck,
    Lock,
    Palette,
    Typography,
    Transform,
    Sparkles,
    FileText,
    Mail,
    Link,
    Network,
    Fingerprint,
    CreditCard,
    Key,
    Code,
    Photo,
    Contrast,
    Hash,
    Clock,
    Binary,
    Letters,
    ArrowsSort,
    Copy,
    Eraser,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Braces => "braces",
            Icon::CircleCheck => "circle-check",
            Icon::Lock => "lock",
            Icon::Palette => "palette",
            Icon::Typography => "typography",
            Icon::Transform => "transform",
            Icon::Sparkles => "sparkles",
            Icon::FileText => "file-text",
            Icon::Mail => "mail",
            Icon::Link => "link",
            Icon::Network => "network",
            Icon::Fingerprint => "fingerprint",
            Icon::CreditCard => "credit-card",
            Icon::Key => "key",
            Icon::Code => "code",
            Icon::Photo => "photo",
            Icon::Contrast => "contrast",
            Icon::Hash => "hash",
            Icon::Clock => "clock",
            Icon::Binary => "binary",
            Icon::Letters => "letter-case",
            Icon::ArrowsSort => "arrows-sort",
            Icon::Copy => "copy",
            Icon::Eraser => "eraser",
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub slug: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub slug: &'static str,
    pub icon: Icon,
    pub popular: bool,
    pub tags: &'static [&'static str],
}

const fn tool(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    icon: Icon,
    popular: bool,
    tags: &'static [&'static str],
) -> Tool {
    Tool {
        id,
        name,
        description,
        category,
        slug: id,
        icon,
        popular,
        tags,
    }
}

static CATEGORIES: &[Category] = &[
    Category {
        id: "formatters",
        name: "Formatters",
        description: "Pretty-print, minify and check structured data",
        slug: "formatters",
        icon: Icon::Braces,
        color: "#3b82f6",
    },
    Category {
        id: "validators",
        name: "Validators",
        description: "Check emails, addresses, identifiers and passwords",
        slug: "validators",
        icon: Icon::CircleCheck,
        color: "#22c55e",
    },
    Category {
        id: "encoders",
        name: "Encoders",
        description: "Encode and decode text for transport and markup",
        slug: "encoders",
        icon: Icon::Lock,
        color: "#a855f7",
    },
    Category {
        id: "color",
        name: "Color Tools",
        description: "Convert, compare and extract colors",
        slug: "color",
        icon: Icon::Palette,
        color: "#ec4899",
    },
    Category {
        id: "text",
        name: "Text Utilities",
        description: "Count, clean up and reshape text",
        slug: "text",
        icon: Icon::Typography,
        color: "#f59e0b",
    },
    Category {
        id: "converters",
        name: "Converters",
        description: "Translate timestamps and numbers between representations",
        slug: "converters",
        icon: Icon::Transform,
        color: "#14b8a6",
    },
    Category {
        id: "generators",
        name: "Generators",
        description: "Produce hashes and unique identifiers",
        slug: "generators",
        icon: Icon::Sparkles,
        color: "#6366f1",
    },
    Category {
        id: "files",
        name: "File Tools",
        description: "Pull text and metadata out of documents",
        slug: "files",
        icon: Icon::FileText,
        color: "#64748b",
    },
];

static TOOLS: &[Tool] = &[
    // formatters
    tool(
        "json-formatter",
        "JSON Formatter",
        "Pretty-print JSON with configurable indentation",
        "formatters",
        Icon::Braces,
        true,
        &["json", "pretty", "beautify", "indent"],
    ),
    tool(
        "json-minifier",
        "JSON Minifier",
        "Strip whitespace from JSON documents",
        "formatters",
        Icon::Braces,
        false,
        &["json", "compress", "minify"],
    ),
    tool(
        "json-validator",
        "JSON Validator",
        "Check that a document parses and show the parser error",
        "formatters",
        Icon::CircleCheck,
        false,
        &["json", "lint", "syntax"],
    ),
    // validators
    tool(
        "email-validator",
        "Email Validator",
        "Check that an address has the shape of an email",
        "validators",
        Icon::Mail,
        false,
        &["email", "address"],
    ),
    tool(
        "url-validator",
        "URL Validator",
        "Check that a string parses as an absolute URL",
        "validators",
        Icon::Link,
        false,
        &["url", "link", "uri"],
    ),
    tool(
        "ip-validator",
        "IP Address Validator",
        "Validate IPv4 and IPv6 addresses",
        "validators",
        Icon::Network,
        false,
        &["ip", "ipv4", "ipv6", "network"],
    ),
    tool(
        "uuid-validator",
        "UUID Validator",
        "Check the canonical 8-4-4-4-12 identifier form",
        "validators",
        Icon::Fingerprint,
        false,
        &["uuid", "guid"],
    ),
    tool(
        "credit-card-validator",
        "Credit Card Validator",
        "Luhn checksum and issuer detection for card numbers",
        "validators",
        Icon::CreditCard,
        true,
        &["luhn", "card", "payment"],
    ),
    tool(
        "password-strength",
        "Password Strength Checker",
        "Score a password by length and character classes",
        "validators",
        Icon::Key,
        true,
        &["password", "security", "strength"],
    ),
    // encoders
    tool(
        "base64",
        "Base64 Encoder/Decoder",
        "Encode UTF-8 text to Base64 and back",
        "encoders",
        Icon::Code,
        true,
        &["base64", "encode", "decode"],
    ),
    tool(
        "url-encoder",
        "URL Encoder/Decoder",
        "Percent-encode text for query strings",
        "encoders",
        Icon::Link,
        false,
        &["url", "percent", "query"],
    ),
    tool(
        "html-entities",
        "HTML Entity Encoder",
        "Escape and unescape HTML entities",
        "encoders",
        Icon::Code,
        false,
        &["html", "entities", "escape"],
    ),
    tool(
        "jwt-decoder",
        "JWT Decoder",
        "Decode the JSON header and payload of a web token",
        "encoders",
        Icon::Key,
        true,
        &["jwt", "token", "auth"],
    ),
    tool(
        "image-to-base64",
        "Image to Base64",
        "Turn an image file into a data URI",
        "encoders",
        Icon::Photo,
        false,
        &["image", "data uri", "base64"],
    ),
    // color
    tool(
        "color-converter",
        "Color Converter",
        "Convert between HEX, RGB, HSL and CMYK",
        "color",
        Icon::Palette,
        true,
        &["hex", "rgb", "hsl", "cmyk"],
    ),
    tool(
        "contrast-checker",
        "Contrast Checker",
        "WCAG contrast ratio between two colors",
        "color",
        Icon::Contrast,
        false,
        &["wcag", "accessibility", "a11y"],
    ),
    tool(
        "palette-extractor",
        "Palette Extractor",
        "Find the dominant colors of an image",
        "color",
        Icon::Photo,
        false,
        &["image", "palette", "kmeans"],
    ),
    // text
    tool(
        "word-counter",
        "Word Counter",
        "Count words, characters, sentences, paragraphs and lines",
        "text",
        Icon::Letters,
        true,
        &["count", "characters", "words"],
    ),
    tool(
        "case-converter",
        "Case Converter",
        "Switch text between title, camel, snake and other cases",
        "text",
        Icon::Letters,
        true,
        &["camel", "snake", "title", "kebab"],
    ),
    tool(
        "slug-generator",
        "Slug Generator",
        "Make URL-safe lowercase hyphenated slugs",
        "text",
        Icon::Link,
        false,
        &["slug", "url", "permalink"],
    ),
    tool(
        "duplicate-line-remover",
        "Duplicate Line Remover",
        "Remove repeated lines while keeping their order",
        "text",
        Icon::Eraser,
        false,
        &["dedupe", "lines", "unique"],
    ),
    tool(
        "duplicate-word-remover",
        "Duplicate Word Remover",
        "Remove repeated words while keeping their order",
        "text",
        Icon::Eraser,
        false,
        &["dedupe", "words", "unique"],
    ),
    tool(
        "text-reverser",
        "Text Reverser",
        "Reverse the characters of a string",
        "text",
        Icon::Copy,
        false,
        &["reverse", "mirror"],
    ),
    tool(
        "line-sorter",
        "Line Sorter",
        "Sort lines alphabetically in either direction",
        "text",
        Icon::ArrowsSort,
        false,
        &["sort", "lines", "alphabetical"],
    ),
    // converters
    tool(
        "timestamp-converter",
        "Timestamp Converter",
        "Convert Unix timestamps to RFC 3339 dates and back",
        "converters",
        Icon::Clock,
        true,
        &["unix", "epoch", "date", "time"],
    ),
    tool(
        "number-base-converter",
        "Number Base Converter",
        "Convert numbers between binary, octal, decimal and hex",
        "converters",
        Icon::Binary,
        false,
        &["binary", "hex", "octal", "radix"],
    ),
    // generators
    tool(
        "hash-generator",
        "Hash Generator",
        "MD5 and SHA-2 digests of text or files",
        "generators",
        Icon::Hash,
        true,
        &["md5", "sha256", "sha512", "checksum"],
    ),
    tool(
        "uuid-generator",
        "UUID Generator",
        "Generate random version 4 UUIDs",
        "generators",
        Icon::Fingerprint,
        true,
        &["uuid", "guid", "random"],
    ),
    // files
    tool(
        "pdf-text-extractor",
        "PDF Text Extractor",
        "Extract the text of every page in a PDF",
        "files",
        Icon::FileText,
        false,
        &["pdf", "document", "extract"],
    ),
    tool(
        "pdf-info",
        "PDF Info",
        "Show page count and document metadata of a PDF",
        "files",
        Icon::FileText,
        false,
        &["pdf", "metadata"],
    ),
];

pub fn tools() -> &'static [Tool] {
    TOOLS
}

pub fn categories() -> &'static [Category] {
    CATEGORIES
}

pub fn find_tool(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id || t.slug == id)
}

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id || c.slug == id)
}

pub fn tools_in_category(category_id: &str) -> Vec<&'static Tool> {
    TOOLS.iter().filter(|t| t.category == category_id).collect()
}

pub fn popular_tools() -> Vec<&'static Tool> {
    TOOLS.iter().filter(|t| t.popular).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_tool_belongs_to_a_category() {
        for tool in tools() {
            assert!(
                find_category(tool.category).is_some(),
                "{} has unknown category {}",
                tool.id,
                tool.category
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = tools().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tools().len());
        let categories: HashSet<&str> = categories().iter().map(|c| c.id).collect();
        assert_eq!(categories.len(), super::categories().len());
    }

    #[test]
    fn test_every_category_has_tools() {
        for category in categories() {
            assert!(!tools_in_category(category.id).is_empty(), "{}", category.id);
        }
    }

    #[test]
    fn test_find_tool_by_slug() {
        let tool = find_tool("json-formatter").unwrap();
        assert_eq!(tool.name, "JSON Formatter");
        assert!(find_tool("missing").is_none());
    }

    #[test]
    fn test_icon_serializes_as_name() {
        let value = serde_json::to_value(Icon::CreditCard).unwrap();
        assert_eq!(value, serde_json::json!("credit-card"));
    }

    #[test]
    fn test_popular_tools() {
        assert!(popular_tools().iter().all(|t| t.popular));
        assert!(popular_tools().iter().any(|t| t.id == "json-formatter"));
    }
}
