//! Turns a page's content-stream operations into plain text lines.

use crate::backend::{ContentOp, Operand};

/// `TJ` adjustments more negative than this (in thousandths of a text
/// space unit) are treated as a word gap.
pub const WORD_GAP_THRESHOLD: f32 = -200.0;

struct LineBuilder {
    lines: Vec<String>,
    current: String,
}

impl LineBuilder {
    fn new() -> Self {
        LineBuilder {
            lines: Vec::new(),
            current: String::new(),
        }
    }

    fn push_str(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn space(&mut self) {
        if !self.current.is_empty() && !self.current.ends_with(' ') {
            self.current.push(' ');
        }
    }

    fn break_line(&mut self) {
        let line = self.current.trim_end().to_string();
        if !line.is_empty() {
            self.lines.push(line);
        }
        self.current.clear();
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.lines.join("\n")
    }
}

/// Assemble text from the operations of one page.
///
/// `decode` receives the active font resource name and the raw string
/// bytes of each text-showing operator.
pub fn assemble_text<F>(ops: &[ContentOp], decode: F) -> String
where
    F: Fn(&[u8], &[u8]) -> String,
{
    let mut out = LineBuilder::new();
    let mut font: Vec<u8> = Vec::new();
    let mut last_y: Option<f32> = None;

    let show = |out: &mut LineBuilder, font: &[u8], operand: Option<&Operand>| {
        if let Some(Operand::Str(bytes)) = operand {
            out.push_str(&decode(font, bytes));
        }
    };

    for op in ops {
        match op.operator.as_str() {
            "BT" => last_y = None,
            "ET" => out.break_line(),
            "Tf" => {
                if let Some(Operand::Name(name)) = op.operands.first() {
                    font = name.clone();
                }
            }
            "Td" | "TD" => {
                let dy = op.operands.get(1).and_then(Operand::as_number).unwrap_or(0.0);
                if dy != 0.0 {
                    out.break_line();
                } else {
                    out.space();
                }
            }
            "Tm" => {
                let y = op.operands.get(5).and_then(Operand::as_number);
                if let (Some(prev), Some(y)) = (last_y, y) {
                    if prev != y {
                        out.break_line();
                    } else {
                        out.space();
                    }
                }
                last_y = y;
            }
            "T*" => out.break_line(),
            "Tj" => show(&mut out, &font, op.operands.first()),
            "'" => {
                out.break_line();
                show(&mut out, &font, op.operands.first());
            }
            "\"" => {
                out.break_line();
                show(&mut out, &font, op.operands.get(2));
            }
            "TJ" => {
                if let Some(Operand::Array(items)) = op.operands.first() {
                    for item in items {
                        match item {
                            Operand::Str(bytes) => out.push_str(&decode(&font, bytes)),
                            other => {
                                if other.as_number().is_some_and(|n| n < WORD_GAP_THRESHOLD) {
                                    out.space();
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8(_font: &[u8], bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn s(text: &str) -> Operand {
        Operand::Str(text.as_bytes().to_vec())
    }

    fn n(value: i64) -> Operand {
        Operand::Integer(value)
    }

    #[test]
    fn single_tj_line() {
        let ops = vec![
            ContentOp::new("BT", vec![]),
            ContentOp::new("Tf", vec![Operand::Name(b"F1".to_vec()), n(12)]),
            ContentOp::new("Tj", vec![s("Hello World")]),
            ContentOp::new("ET", vec![]),
        ];
        assert_eq!(assemble_text(&ops, utf8), "Hello World");
    }

    #[test]
    fn td_with_vertical_move_breaks_line() {
        let ops = vec![
            ContentOp::new("BT", vec![]),
            ContentOp::new("Tj", vec![s("first")]),
            ContentOp::new("Td", vec![n(0), n(-14)]),
            ContentOp::new("Tj", vec![s("second")]),
            ContentOp::new("Td", vec![n(40), n(0)]),
            ContentOp::new("Tj", vec![s("same line")]),
            ContentOp::new("ET", vec![]),
        ];
        assert_eq!(assemble_text(&ops, utf8), "first\nsecond same line");
    }

    #[test]
    fn tj_array_kerning_and_gaps() {
        let ops = vec![ContentOp::new(
            "TJ",
            vec![Operand::Array(vec![
                s("Ke"),
                n(-30),
                s("rned"),
                n(-400),
                s("word"),
            ])],
        )];
        assert_eq!(assemble_text(&ops, utf8), "Kerned word");
    }

    #[test]
    fn quote_operators_start_new_lines() {
        let ops = vec![
            ContentOp::new("Tj", vec![s("one")]),
            ContentOp::new("'", vec![s("two")]),
            ContentOp::new("\"", vec![n(0), n(0), s("three")]),
            ContentOp::new("T*", vec![]),
            ContentOp::new("Tj", vec![s("four")]),
        ];
        assert_eq!(assemble_text(&ops, utf8), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn tm_changes_line_only_when_y_moves() {
        let tm = |x: i64, y: i64| ContentOp::new("Tm", vec![n(1), n(0), n(0), n(1), n(x), n(y)]);
        let ops = vec![
            ContentOp::new("BT", vec![]),
            tm(10, 700),
            ContentOp::new("Tj", vec![s("left")]),
            tm(200, 700),
            ContentOp::new("Tj", vec![s("right")]),
            tm(10, 680),
            ContentOp::new("Tj", vec![s("below")]),
            ContentOp::new("ET", vec![]),
        ];
        assert_eq!(assemble_text(&ops, utf8), "left right\nbelow");
    }

    #[test]
    fn decoder_receives_active_font() {
        let ops = vec![
            ContentOp::new("Tf", vec![Operand::Name(b"F2".to_vec()), n(10)]),
            ContentOp::new("Tj", vec![s("x")]),
        ];
        let text = assemble_text(&ops, |font, _| String::from_utf8_lossy(font).into_owned());
        assert_eq!(text, "F2");
    }

    #[test]
    fn empty_and_unknown_operators() {
        let ops = vec![
            ContentOp::new("re", vec![n(0), n(0), n(10), n(10)]),
            ContentOp::new("f", vec![]),
        ];
        assert_eq!(assemble_text(&ops, utf8), "");
    }
}
