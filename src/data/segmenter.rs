// ============================================================
// Layer 4 — Sentence Segmenter
// ============================================================
// Splits cleaned document text into sentences.
//
// A boundary is:
//   - a run of . ! ? (plus closing quotes/brackets) followed by
//     whitespace or the end of the text
//   - a blank line (paragraph break, headings without a full stop)
//
// A period is NOT a boundary when:
//   - the word before it is a known abbreviation (dll. dsb. Dr. ...)
//   - the word before it is a single letter (initials: "A. Rahman")
//   - the next word starts with a lowercase letter
//
// Whitespace inside each sentence is collapsed to single spaces so
// line-wrapped PDF text reads as one line.

use std::collections::HashSet;

const ABBREVIATIONS: &[&str] = &[
    "dll", "dsb", "dst", "dkk", "dgn", "yth", "yg", "tsb", "hlm", "no", "nomor",
    "mis", "sdr", "bpk", "ibu", "dr", "drs", "prof", "ir", "st", "jl", "kab",
    "kec", "tel", "tgl", "vol", "ed", "cet", "etc", "vs", "al",
];

pub struct SentenceSegmenter {
    abbreviations: HashSet<&'static str>,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Split `text` into trimmed, whitespace-collapsed sentences.
    /// Empty or whitespace-only text gives an empty Vec.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i     = 0usize;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if c == '\n' && is_blank_line(&chars, i) {
                push_sentence(&mut sentences, &text[start..pos]);
                while i < chars.len() && chars[i].1.is_whitespace() {
                    i += 1;
                }
                start = chars.get(i).map_or(text.len(), |(p, _)| *p);
                continue;
            }

            if is_terminal(c) {
                let mut j = i + 1;
                while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
                    j += 1;
                }
                let end = chars.get(j).map_or(text.len(), |(p, _)| *p);
                let followed_by_space = j >= chars.len() || chars[j].1.is_whitespace();

                if followed_by_space && (c != '.' || self.period_ends_sentence(&text[start..pos], &chars[j..])) {
                    push_sentence(&mut sentences, &text[start..end]);
                    start = end;
                }
                i = j;
                continue;
            }

            i += 1;
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }

    /// `before` is the sentence so far (up to the period),
    /// `after` the characters following the terminal run.
    fn period_ends_sentence(&self, before: &str, after: &[(usize, char)]) -> bool {
        let last_word = before
            .split_whitespace()
            .next_back()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        if self.abbreviations.contains(last_word.as_str()) {
            return false;
        }

        let mut letters = last_word.chars();
        if let (Some(c), None) = (letters.next(), letters.next()) {
            if c.is_alphabetic() {
                return false;
            }
        }

        let next_visible = after.iter().map(|(_, c)| *c).find(|c| !c.is_whitespace());
        !matches!(next_visible, Some(c) if c.is_lowercase())
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

/// True when the newline at `i` is followed by optional spaces and another newline.
fn is_blank_line(chars: &[(usize, char)], i: usize) -> bool {
    chars[i + 1..]
        .iter()
        .map(|(_, c)| *c)
        .find(|c| !(c.is_whitespace() && *c != '\n'))
        == Some('\n')
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        out.push(collapsed);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        SentenceSegmenter::new().split(text)
    }

    #[test]
    fn test_basic_split() {
        let s = split("Banjir datang. Air naik! Apakah aman? Ya.");
        assert_eq!(s, vec!["Banjir datang.", "Air naik!", "Apakah aman?", "Ya."]);
    }

    #[test]
    fn test_abbreviation_is_not_boundary() {
        let s = split("Contohnya sungai, danau, dll. Semua berisi air.");
        assert_eq!(s.len(), 1);

        let s = split("Ditulis oleh Dr. Sutomo pada tahun itu. Buku terbit.");
        assert_eq!(s, vec!["Ditulis oleh Dr. Sutomo pada tahun itu.", "Buku terbit."]);
    }

    #[test]
    fn test_initials_and_decimals() {
        let s = split("Menurut A. Rahman nilai pH 6.5 cukup. Selesai.");
        assert_eq!(s, vec!["Menurut A. Rahman nilai pH 6.5 cukup.", "Selesai."]);
    }

    #[test]
    fn test_period_after_number_ends_sentence() {
        let s = split("Jumlah sungai besar ada 5. Kemudian airnya bermuara ke laut.");
        assert_eq!(s, vec!["Jumlah sungai besar ada 5.", "Kemudian airnya bermuara ke laut."]);
    }

    #[test]
    fn test_lowercase_continuation() {
        let s = split("Tekanan 2 atm. lalu turun. Selesai.");
        assert_eq!(s, vec!["Tekanan 2 atm. lalu turun.", "Selesai."]);
    }

    #[test]
    fn test_blank_line_is_boundary() {
        let s = split("BAB I PENDAHULUAN\n\nAir adalah sumber kehidupan.");
        assert_eq!(s, vec!["BAB I PENDAHULUAN", "Air adalah sumber kehidupan."]);
    }

    #[test]
    fn test_wrapped_lines_are_joined() {
        let s = split("Drainase berfungsi\nmengalirkan air.");
        assert_eq!(s, vec!["Drainase berfungsi mengalirkan air."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let s = split("Ia berkata \"Cukup.\" Lalu pergi.");
        assert_eq!(s, vec!["Ia berkata \"Cukup.\"", "Lalu pergi."]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split("").is_empty());
        assert!(split("   \n\n  ").is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(split("tanpa titik di akhir"), vec!["tanpa titik di akhir"]);
    }
}
