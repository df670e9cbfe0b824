// ============================================================
// Layer 6 — PDF Exporter
// ============================================================
// Renders a question batch as a printable A4 PDF with lopdf.
//
// Layout (points, origin bottom-left):
//
//   ┌──────────────── 595 ────────────────┐
//   │  Soal Pilihan Ganda          ← title │
//   │                                      │
//   │  1. prompt, word-wrapped             │
//   │       A. option                      │
//   │       B. option                      │
//   │     Jawaban: answer                  │
//   │  2. ...                              │  842
//   │                                      │
//   └──────────────────────────── margin ──┘
//
// Every line is laid out first, then cut into pages: a new page
// starts whenever the next line would fall below the bottom margin.
// Helvetica is one of the 14 standard fonts, so nothing is embedded.

use anyhow::{Context, Result};
use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, ObjectId, Stream,
};

use crate::domain::question::{Question, QuestionType};
use crate::domain::traits::QuizRenderer;

const PAGE_WIDTH:  i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN:      i64 = 50;

const TITLE_SIZE: i64 = 14;
const BODY_SIZE:  i64 = 11;
const LEADING:    i64 = 15;

const INDENT_ANSWER: i64 = 18;
const INDENT_OPTION: i64 = 30;

/// Helvetica averages about half an em per character
const WRAP_CHARS: usize = ((PAGE_WIDTH - 2 * MARGIN) * 2 / BODY_SIZE) as usize;

/// One laid-out line of text, before pagination
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text:   String,
    indent: i64,
    size:   i64,
}

impl Line {
    fn body(text: impl Into<String>, indent: i64) -> Self {
        Self { text: text.into(), indent, size: BODY_SIZE }
    }

    fn blank() -> Self {
        Self::body("", 0)
    }
}

pub struct PdfExporter;

impl PdfExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizRenderer for PdfExporter {
    fn render(&self, questions: &[Question], question_type: QuestionType) -> Result<Vec<u8>> {
        let lines = layout(questions, question_type);
        let pages = paginate(&lines);
        tracing::debug!("Rendering {} questions on {} pages", questions.len(), pages.len());
        build_pdf(&pages)
    }
}

/// Convenience wrapper over PdfExporter
pub fn render_pdf(questions: &[Question], question_type: QuestionType) -> Result<Vec<u8>> {
    PdfExporter::new().render(questions, question_type)
}

// ─── Layout ───────────────────────────────────────────────────────────────────
fn layout(questions: &[Question], question_type: QuestionType) -> Vec<Line> {
    let title = match question_type {
        QuestionType::MultipleChoice => "Soal Pilihan Ganda",
        QuestionType::Essay          => "Soal Esai",
    };
    let mut lines = vec![Line { text: title.to_string(), indent: 0, size: TITLE_SIZE }, Line::blank()];

    for (i, q) in questions.iter().enumerate() {
        let prompt = format!("{}. {}", i + 1, q.prompt());
        for (j, part) in prompt.lines().flat_map(|l| wrap(l, WRAP_CHARS)).enumerate() {
            // continuation lines align under the prompt text
            lines.push(Line::body(part, if j == 0 { 0 } else { INDENT_ANSWER }));
        }

        if let Some(options) = q.options() {
            for (letter, option) in ('A'..='Z').zip(options) {
                for part in wrap(&format!("{letter}. {option}"), WRAP_CHARS) {
                    lines.push(Line::body(part, INDENT_OPTION));
                }
            }
        }

        for part in wrap(&format!("Jawaban: {}", q.answer()), WRAP_CHARS) {
            lines.push(Line::body(part, INDENT_ANSWER));
        }
        lines.push(Line::blank());
    }

    lines
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out     = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty() && needed > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

fn paginate(lines: &[Line]) -> Vec<Vec<(Line, i64)>> {
    let top = PAGE_HEIGHT - MARGIN;
    let mut pages: Vec<Vec<(Line, i64)>> = vec![Vec::new()];
    let mut y = top;

    for line in lines {
        if y - LEADING < MARGIN {
            pages.push(Vec::new());
            y = top;
        }
        y -= LEADING;
        if let Some(page) = pages.last_mut() {
            page.push((line.clone(), y));
        }
    }
    pages
}

// ─── PDF objects ──────────────────────────────────────────────────────────────
fn build_pdf(pages: &[Vec<(Line, i64)>]) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type"     => "Font",
        "Subtype"  => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content { operations: page_operations(page) };
        let bytes = content.encode().context("Cannot encode page content")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, bytes));
        let page_id = doc.add_object(dictionary! {
            "Type"     => "Page",
            "Parent"   => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type"      => "Pages",
            "Kids"      => kids,
            "Count"     => count,
            "Resources" => resources_id,
            "MediaBox"  => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type"  => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).context("Cannot write PDF")?;
    Ok(buf)
}

fn page_operations(page: &[(Line, i64)]) -> Vec<Operation> {
    let mut ops = Vec::new();
    for (line, y) in page.iter().filter(|(l, _)| !l.text.is_empty()) {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec!["F1".into(), line.size.into()]));
        ops.push(Operation::new("Td", vec![(MARGIN + line.indent).into(), (*y).into()]));
        ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(&line.text))]));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// WinAnsiEncoding bytes for the standard font. Typographic marks
/// that Word inserts live in 0x80–0x9F; the rest is Latin-1, and
/// anything outside both becomes '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        // 0x80–0x9F are not Latin-1 in WinAnsi
        c if ('\u{80}'..='\u{9F}').contains(&c) => b'?',
        c => u8::try_from(u32::from(c)).unwrap_or(b'?'),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn mc(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::multiple_choice(
                    format!("Pernyataan: \"Kalimat nomor {i}.\"\nPernyataan tersebut merujuk pada konsep apa?"),
                    vec!["Sebab".into(), "Fungsi".into(), "Akibat".into(), "Proses".into()],
                    "Sebab",
                )
            })
            .collect()
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    #[test]
    fn test_wrap_respects_width() {
        let text  = "banjir ".repeat(40);
        let lines = wrap(&text, 30);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 30));
        assert_eq!(lines.join(" ").split_whitespace().count(), 40);
    }

    #[test]
    fn test_wrap_keeps_overlong_word() {
        assert_eq!(wrap("a sangatpanjangsekali b", 5), vec!["a", "sangatpanjangsekali", "b"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_options_are_lettered() {
        let lines = layout(&mc(1), QuestionType::MultipleChoice);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"A. Sebab"));
        assert!(texts.contains(&"D. Proses"));
        assert!(texts.contains(&"Jawaban: Sebab"));
        assert_eq!(texts[0], "Soal Pilihan Ganda");
    }

    #[test]
    fn test_essay_has_no_options() {
        let q = vec![Question::essay("Jelaskan erosi!", "Erosi adalah pengikisan.", "x", None)];
        let lines = layout(&q, QuestionType::Essay);
        assert!(!lines.iter().any(|l| l.text.starts_with("A. ")));
        assert_eq!(lines[0].text, "Soal Esai");
    }

    #[test]
    fn test_single_page() {
        let bytes = render_pdf(&mc(2), QuestionType::MultipleChoice).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_overflow_adds_pages() {
        let bytes = render_pdf(&mc(40), QuestionType::MultipleChoice).unwrap();
        assert!(page_count(&bytes) > 1);
    }

    #[test]
    fn test_every_line_inside_margins() {
        let pages = paginate(&layout(&mc(40), QuestionType::MultipleChoice));
        for page in &pages {
            for (_, y) in page {
                assert!(*y >= MARGIN && *y <= PAGE_HEIGHT - MARGIN);
            }
        }
    }

    #[test]
    fn test_empty_batch_renders_title_page() {
        let bytes = render_pdf(&[], QuestionType::Essay).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_non_latin_characters_replaced() {
        assert_eq!(win_ansi("é→"), vec![0xE9, b'?']);
    }

    #[test]
    fn test_typographic_marks_use_win_ansi_codes() {
        let mut expected = vec![0x93];
        expected.extend_from_slice(b"Banjir");
        expected.extend_from_slice(&[0x94, b' ', 0x96, b' ']);
        expected.extend_from_slice(b"hujan");
        expected.extend_from_slice(&[0x92, b's', 0x85]);
        assert_eq!(win_ansi("“Banjir” – hujan’s…"), expected);
        assert_eq!(win_ansi("• — € ‘"), vec![0x95, b' ', 0x97, b' ', 0x80, b' ', 0x91]);
    }
}
