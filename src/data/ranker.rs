// ============================================================
// Layer 4 — Sentence Ranker (TF-IDF salience)
// ============================================================
// Picks the most informative sentences of a document.
//
//   text ──► segment ──► drop short sentences ──► normalise
//                                                    │
//                    top N ◄── stable sort ◄── TF-IDF row sums
//
// Each sentence is one "document" of the TF-IDF matrix:
//
//   tf(t, s)  = raw count of stemmed term t in sentence s
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1       (smoothed)
//   w(t, s)   = tf · idf, then each row is L2-normalised
//   score(s)  = Σ_t w(t, s)
//
// L2 normalisation keeps long sentences from winning on length
// alone: a row of k equally weighted terms sums to √k.
// A sentence with no surviving tokens scores 0.
//
// The sort is stable, so equal scores keep document order and the
// ranking is fully deterministic for a given text.
//
// Reference: Salton & Buckley (1988), Term-weighting approaches
//            in automatic text retrieval

use std::collections::{BTreeMap, HashMap};

use crate::data::{locale::Indonesian, normalizer::Normalizer, segmenter::SentenceSegmenter};
use crate::domain::traits::LanguageProfile;

/// How many sentences to keep and how long they must be.
/// A sentence survives when its word count is strictly greater
/// than `min_words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPolicy {
    pub keep_n:    usize,
    pub min_words: usize,
}

impl RankPolicy {
    /// No length filter, top 10 — feeds multiple-choice generation
    pub const LENIENT: RankPolicy = RankPolicy { keep_n: 10, min_words: 0 };

    /// More than 8 words, top 15 — feeds essay generation, which
    /// rejects short sentences anyway and needs a deeper pool
    pub const STRICT: RankPolicy = RankPolicy { keep_n: 15, min_words: 8 };
}

/// A sentence with its salience score and original position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text:       String,
    pub word_count: usize,
    pub position:   usize,
    pub score:      f64,
}

pub struct SentenceRanker<P: LanguageProfile = Indonesian> {
    segmenter:  SentenceSegmenter,
    normalizer: Normalizer<P>,
}

impl SentenceRanker<Indonesian> {
    pub fn indonesian() -> Self {
        Self::new(Indonesian::new())
    }
}

impl<P: LanguageProfile> SentenceRanker<P> {
    pub fn new(profile: P) -> Self {
        Self {
            segmenter:  SentenceSegmenter::new(),
            normalizer: Normalizer::new(profile),
        }
    }

    /// Top `keep_n` sentences of `text`, most salient first.
    /// Zero surviving sentences gives an empty Vec.
    pub fn rank(&self, text: &str, keep_n: usize, min_words: usize) -> Vec<String> {
        let mut scored = self.score_all(text, min_words);
        scored.truncate(keep_n);
        scored.into_iter().map(|s| s.text).collect()
    }

    pub fn rank_with(&self, text: &str, policy: RankPolicy) -> Vec<String> {
        self.rank(text, policy.keep_n, policy.min_words)
    }

    /// Every surviving sentence with its score, sorted by score descending.
    pub fn score_all(&self, text: &str, min_words: usize) -> Vec<ScoredSentence> {
        let sentences: Vec<(usize, String, usize)> = self
            .segmenter
            .split(text)
            .into_iter()
            .enumerate()
            .map(|(position, s)| {
                let words = s.split_whitespace().count();
                (position, s, words)
            })
            .filter(|(_, _, words)| *words > min_words)
            .collect();

        if sentences.is_empty() {
            tracing::debug!("No sentence longer than {} words", min_words);
            return Vec::new();
        }

        let docs: Vec<Vec<String>> = sentences
            .iter()
            .map(|(_, s, _)| self.normalizer.normalize(s).tokens)
            .collect();
        let scores = tfidf_row_sums(&docs);

        let mut scored: Vec<ScoredSentence> = sentences
            .into_iter()
            .zip(scores)
            .map(|((position, text, word_count), score)| ScoredSentence {
                text,
                word_count,
                position,
                score,
            })
            .collect();

        // sort_by is stable: ties stay in document order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "Ranked {} sentences (top score {:.4})",
            scored.len(),
            scored.first().map_or(0.0, |s| s.score),
        );
        scored
    }
}

/// Sum of each row of the L2-normalised, smoothed TF-IDF matrix.
fn tfidf_row_sums(docs: &[Vec<String>]) -> Vec<f64> {
    let n = docs.len() as f64;

    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        let mut seen: Vec<&str> = doc.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    docs.iter()
        .map(|doc| {
            // Ordered so the float sums come out identical run to run
            let mut tf: BTreeMap<&str, f64> = BTreeMap::new();
            for term in doc {
                *tf.entry(term.as_str()).or_insert(0.0) += 1.0;
            }

            let weights: Vec<f64> = tf
                .iter()
                .map(|(term, count)| {
                    let idf = ((1.0 + n) / (1.0 + df[term] as f64)).ln() + 1.0;
                    count * idf
                })
                .collect();

            let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm == 0.0 {
                0.0
            } else {
                weights.iter().map(|w| w / norm).sum()
            }
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Banjir disebabkan oleh curah hujan yang sangat tinggi di wilayah hulu sungai. \
                        Ya. \
                        Fungsi drainase adalah mengalirkan air hujan menuju saluran pembuangan kota dengan lancar.";

    #[test]
    fn test_lenient_keeps_short_sentences() {
        let r = SentenceRanker::indonesian();
        let ranked = r.rank_with(TEXT, RankPolicy::LENIENT);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.contains(&"Ya.".to_string()));
    }

    #[test]
    fn test_strict_filters_short_sentences() {
        let r = SentenceRanker::indonesian();
        let ranked = r.rank_with(TEXT, RankPolicy::STRICT);
        assert_eq!(ranked.len(), 2);
        assert!(!ranked.contains(&"Ya.".to_string()));
    }

    #[test]
    fn test_empty_token_sentence_ranks_last() {
        let r = SentenceRanker::indonesian();
        let scored = r.score_all(TEXT, 0);
        let last = scored.last().unwrap();
        assert_eq!(last.text, "Ya.");
        assert_eq!(last.score, 0.0);
    }

    #[test]
    fn test_scores_sorted_descending() {
        let r = SentenceRanker::indonesian();
        let scored = r.score_all(TEXT, 0);
        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_keep_n_truncates() {
        let r = SentenceRanker::indonesian();
        assert_eq!(r.rank(TEXT, 1, 0).len(), 1);
        assert!(r.rank(TEXT, 0, 0).is_empty());
    }

    #[test]
    fn test_single_sentence() {
        let r = SentenceRanker::indonesian();
        let scored = r.score_all(
            "Erosi tanah terjadi ketika lapisan permukaan terkikis oleh aliran air hujan deras.",
            8,
        );
        assert_eq!(scored.len(), 1);
        assert!(scored[0].score.is_finite());
        assert!(scored[0].score > 0.0);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let r = SentenceRanker::indonesian();
        assert_eq!(r.rank(TEXT, 10, 0), r.rank(TEXT, 10, 0));
    }

    #[test]
    fn test_ties_keep_document_order() {
        let r = SentenceRanker::indonesian();
        // Identical term sets → identical scores
        let text = "Gunung berapi meletus keras. Gunung berapi meletus keras lagi.";
        let scored = r.score_all(text, 0);
        assert_eq!(scored[0].score, scored[1].score);
        assert_eq!(scored[0].position, 0);
        assert_eq!(scored[1].position, 1);
    }

    #[test]
    fn test_no_sentences() {
        let r = SentenceRanker::indonesian();
        assert!(r.rank("", 10, 0).is_empty());
        assert!(r.rank("Terlalu pendek.", 10, 8).is_empty());
    }

    #[test]
    fn test_tfidf_uniform_row() {
        // One document, two distinct terms: each weight 1/√2, sum √2
        let scores = tfidf_row_sums(&[vec!["alpha".into(), "beta".into()]]);
        assert!((scores[0] - 2f64.sqrt()).abs() < 1e-9);
    }
}
