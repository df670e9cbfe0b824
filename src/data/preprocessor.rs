// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans extracted text before sentence segmentation.
//
// What extraction leaves behind:
//   .docx → non-breaking spaces, zero-width spaces, tabs from tables
//   .pdf  → hard line breaks every ~80 chars, words hyphenated across
//           lines ("ling-\nkungan"), soft hyphens, form feeds between
//           pages, \r\n line endings
//
// Cleaning steps (applied in order):
//   1. Map odd whitespace / control characters to plain ones,
//      drop soft hyphens and zero-width characters
//   2. Re-join words hyphenated across a line break
//   3. Collapse runs of spaces and trim every line
//   4. Keep at most one blank line between paragraphs
//
// Single line breaks are kept: the segmenter folds them into
// spaces, while blank lines still mark paragraph boundaries.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, text: &str) -> String {
        let normalised = normalise_chars(text);
        let joined     = join_hyphenated_breaks(&normalised);

        let mut out   = String::with_capacity(joined.len());
        let mut blank = 0usize;

        for line in joined.lines() {
            let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
            if line.is_empty() {
                blank += 1;
                continue;
            }
            if !out.is_empty() {
                out.push_str(if blank > 0 { "\n\n" } else { "\n" });
            }
            out.push_str(&line);
            blank = 0;
        }

        out
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

fn normalise_chars(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .filter_map(|c| match c {
            // soft hyphen, zero-width space / joiners, BOM
            '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => None,
            '\t' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => Some(' '),
            // form feed between PDF pages → paragraph break
            '\u{000C}' => Some('\n'),
            '\r' => Some('\n'),
            c if c.is_control() && c != '\n' => Some(' '),
            c => Some(c),
        })
        .collect()
}

/// "ling-\nkungan" → "lingkungan". Only when a letter sits on both
/// sides, so list dashes and "- item" lines are left alone.
fn join_hyphenated_breaks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i   = 0usize;

    while i < chars.len() {
        if chars[i] == '-' && i > 0 && chars[i - 1].is_alphabetic() {
            let mut j = i + 1;
            while j < chars.len() && chars[j] == ' ' {
                j += 1;
            }
            if j < chars.len() && chars[j] == '\n' {
                let mut k = j + 1;
                while k < chars.len() && chars[k] == ' ' {
                    k += 1;
                }
                if k < chars.len() && chars[k].is_lowercase() {
                    i = k;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
