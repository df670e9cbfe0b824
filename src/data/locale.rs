// ============================================================
// Layer 4 — Indonesian Language Profile
// ============================================================
// Implements LanguageProfile for Bahasa Indonesia:
//
//   tokenize     lowercase, keep letters + whitespace, split
//   is_stopword  fixed list of function words
//   stem         rule-based affix stripping
//
// The stemmer works without a root-word dictionary, so it is an
// approximation: it only has to map inflected forms of the same
// word onto one key for term weighting, not produce dictionary
// roots. Stripping happens in this order:
//
//   1. particle      -lah -kah -tah -pun
//   2. possessive    -nya -ku -mu
//   3. prefix        di- ke- se- ber- ter- me(N)- pe(N)- per-
//                    (a second round allows only ber-/per-/ter-/ke-)
//   4. derivational  -kan always; -an / -i only after a prefix,
//                    and -i only after a consonant
//
// Every step is skipped when it would leave fewer than
// MIN_ROOT_LEN letters.
//
// Reference: Nazief & Adriani (1996), Asian & Williams (2005)

use std::collections::HashSet;

use crate::domain::traits::LanguageProfile;

const MIN_ROOT_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "ada", "adalah", "adanya", "agak", "agar", "akan", "akankah", "akhir", "aku",
    "amat", "anda", "antara", "apa", "apabila", "apakah", "atas", "atau", "bagai",
    "bagaimana", "bagi", "bahkan", "bahwa", "banyak", "beberapa", "begitu", "belum",
    "benar", "berapa", "berbagai", "beri", "bersama", "biasa", "bila", "bisa",
    "boleh", "bukan", "cara", "cukup", "dalam", "dan", "dapat", "dari", "daripada",
    "demikian", "dengan", "di", "dia", "diri", "dua", "hal", "hampir", "hanya",
    "harus", "hingga", "ia", "ialah", "ini", "itu", "jadi", "jika", "juga",
    "jumlah", "justru", "kalau", "kami", "kamu", "kapan", "karena", "kata", "ke",
    "kebanyakan", "kecil", "kembali", "kemudian", "kepada", "ketika", "kini",
    "kita", "lagi", "lain", "lainnya", "lalu", "lama", "lebih", "macam", "maka",
    "makin", "mampu", "mana", "masih", "masing", "mau", "melalui", "memang",
    "memiliki", "menjadi", "merupakan", "mereka", "meski", "mulai", "namun",
    "oleh", "pada", "paling", "para", "pasti", "perlu", "pernah", "pula", "pun",
    "saat", "saja", "salah", "sama", "sampai", "sangat", "satu", "saya", "seakan",
    "sebab", "sebagai", "sebagian", "sebelum", "sebuah", "secara", "sedang",
    "sedangkan", "sedikit", "segala", "sehingga", "sejak", "sekali", "sekitar",
    "selain", "selalu", "selama", "semua", "sendiri", "seperti", "serta",
    "sesuatu", "setelah", "setiap", "siapa", "suatu", "sudah", "supaya", "tadi",
    "tanpa", "tapi", "telah", "tentang", "terhadap", "terjadi", "termasuk",
    "tersebut", "tetapi", "tiap", "tidak", "untuk", "walau", "yaitu", "yakni",
    "yang",
];

const PARTICLES:   &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];

/// Bahasa Indonesia profile: stopword list + affix-stripping stemmer.
pub struct Indonesian {
    stopwords: HashSet<&'static str>,
}

impl Indonesian {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }
}

impl Default for Indonesian {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for Indonesian {
    fn tokenize(&self, text: &str) -> Vec<String> {
        // Digits, punctuation and hyphens all disappear, so "dua-duanya"
        // becomes "duaduanya". Accepted: compounds are rare in course text.
        let letters_only: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic() || c.is_whitespace())
            .collect();

        letters_only
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn stem(&self, word: &str) -> String {
        if letter_count(word) <= MIN_ROOT_LEN {
            return word.to_string();
        }

        let mut w = word.to_string();
        strip_suffix_from(&mut w, PARTICLES);
        strip_suffix_from(&mut w, POSSESSIVES);

        let mut prefixed = false;
        if let Some(rest) = strip_prefix(&w, true) {
            w = rest;
            prefixed = true;
            if let Some(rest) = strip_prefix(&w, false) {
                w = rest;
            }
        }

        // -kan is unambiguous; -an and -i end too many plain roots
        // (jalan, tinggi) to strip without a prefix as evidence.
        if !strip_suffix_from(&mut w, &["kan"])
            && prefixed
            && !strip_suffix_from(&mut w, &["an"])
            && ends_with_consonant_i(&w)
        {
            strip_suffix_from(&mut w, &["i"]);
        }

        w
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

fn letter_count(s: &str) -> usize {
    s.chars().count()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// "-ki", "-ri" are suffixes; "-ai" (pakai, sampai) is part of the root.
fn ends_with_consonant_i(word: &str) -> bool {
    let mut rev = word.chars().rev();
    rev.next() == Some('i') && rev.next().is_some_and(|c| !is_vowel(c))
}

/// Remove the first matching suffix in `suffixes`, if enough remains.
/// Returns true when something was removed.
fn strip_suffix_from(word: &mut String, suffixes: &[&str]) -> bool {
    for suffix in suffixes {
        if let Some(rest) = word.strip_suffix(suffix) {
            if letter_count(rest) >= MIN_ROOT_LEN {
                let keep = rest.len();
                word.truncate(keep);
                return true;
            }
        }
    }
    false
}

/// One round of prefix removal. `first_round` allows the full set;
/// later rounds only the prefixes that stack (di-per-, mem-per-, ber-ke-).
fn strip_prefix(word: &str, first_round: bool) -> Option<String> {
    let candidate = if first_round {
        // per- before pe(N)-, otherwise "perbaiki" reads as pe+rbaiki
        nasal_prefix(word, "me")
            .or_else(|| plain_prefix(word, &["ber", "ter", "per"]))
            .or_else(|| nasal_prefix(word, "pe"))
            .or_else(|| plain_prefix(word, &["di", "ke", "se"]))
    } else {
        plain_prefix(word, &["ber", "per", "ter", "ke"])
    };

    candidate.filter(|root| letter_count(root) >= MIN_ROOT_LEN)
}

fn plain_prefix(word: &str, prefixes: &[&str]) -> Option<String> {
    prefixes
        .iter()
        .find_map(|p| word.strip_prefix(p))
        .map(str::to_string)
}

/// me- / pe- with nasal assimilation. The nasal replaced the first
/// letter of the root, so some forms get that letter back:
///   meny+V → s   (menyapu  → sapu)
///   mem+V  → p   (memakai  → pakai)
///   men+V  → t   (menulis  → tulis)
///   meng   → -   (mengalir → alir, menggali → gali)
///   mem+b/f/v, men+c/d/j/z → -
///   me+l/r/w/y → -
fn nasal_prefix(word: &str, base: &str) -> Option<String> {
    let rest = word.strip_prefix(base)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    let after_first = chars.as_str();
    let second = after_first.chars().next();

    match (first, second) {
        ('n', Some('y')) => {
            let root = &after_first[1..];
            root.chars().next().filter(|c| is_vowel(*c))?;
            Some(format!("s{root}"))
        }
        ('n', Some('g')) => Some(after_first[1..].to_string()),
        ('m', Some(c)) if matches!(c, 'b' | 'f' | 'v') => Some(after_first.to_string()),
        ('m', Some(c)) if is_vowel(c) => Some(format!("p{after_first}")),
        ('n', Some(c)) if matches!(c, 'c' | 'd' | 'j' | 'z') => Some(after_first.to_string()),
        ('n', Some(c)) if is_vowel(c) => Some(format!("t{after_first}")),
        ('l' | 'r' | 'w' | 'y', _) => Some(rest.to_string()),
        _ => None,
    }
}
