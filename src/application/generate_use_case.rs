// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates one quiz generation, start to finish:
//
//   Step 1: Validate the configuration      (fail fast, nothing analysed)
//   Step 2: Clean the extracted text        (Layer 4 - data)
//   Step 3: Rank sentences by salience      (Layer 4 - data)
//   Step 4: Synthesize questions            (Layer 5 - quiz)
//
// The use case owns no state between calls: every execute() gets its
// own RNG (seeded from the config when a seed is given) and returns a
// freshly built Vec that belongs to the caller.
//
// "No usable sentences" and "fewer questions than requested" are
// logged and returned as-is; only a bad configuration is an error.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    locale::Indonesian,
    preprocessor::Preprocessor,
    ranker::{RankPolicy, SentenceRanker},
};
use crate::domain::error::QuizError;
use crate::domain::question::{Question, QuestionType};
use crate::domain::traits::LanguageProfile;
use crate::quiz::QuestionStrategy;

// ─── Generation Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Upper bound on the number of questions returned
    pub count:         usize,
    pub question_type: QuestionType,
    #[serde(with = "strategy_name")]
    pub strategy:      QuestionStrategy,
    /// Fixed seed for reproducible quizzes; None draws from entropy
    pub seed:          Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count:         5,
            question_type: QuestionType::MultipleChoice,
            strategy:      QuestionStrategy::ConceptBased,
            seed:          None,
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.count == 0 {
            return Err(QuizError::InvalidConfiguration(
                "question count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Which sentences feed the synthesizer.
    /// Only the concept-based essay generator gets the strict pool;
    /// everything else sees every sentence.
    pub fn rank_policy(&self) -> RankPolicy {
        match (self.strategy, self.question_type) {
            (QuestionStrategy::ConceptBased, QuestionType::Essay) => RankPolicy::STRICT,
            _ => RankPolicy::LENIENT,
        }
    }
}

/// Serialises QuestionStrategy by its Display/FromStr name
mod strategy_name {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::quiz::QuestionStrategy;

    pub fn serialize<S: Serializer>(s: &QuestionStrategy, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<QuestionStrategy, D::Error> {
        let name = String::deserialize(de)?;
        name.parse().map_err(D::Error::custom)
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase<P: LanguageProfile = Indonesian> {
    config:       GenerateConfig,
    preprocessor: Preprocessor,
    ranker:       SentenceRanker<P>,
}

impl GenerateUseCase<Indonesian> {
    pub fn new(config: GenerateConfig) -> Self {
        Self::with_profile(config, Indonesian::new())
    }
}

impl<P: LanguageProfile> GenerateUseCase<P> {
    pub fn with_profile(config: GenerateConfig, profile: P) -> Self {
        Self {
            config,
            preprocessor: Preprocessor::new(),
            ranker:       SentenceRanker::new(profile),
        }
    }

    /// Run the pipeline over already-extracted text.
    pub fn execute(&self, raw_text: &str) -> Result<Vec<Question>, QuizError> {
        let cfg = &self.config;

        // ── Step 1: Validate ─────────────────────────────────────────────────
        cfg.validate()?;

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        // ── Step 2: Clean ────────────────────────────────────────────────────
        let text = self.preprocessor.clean(raw_text);

        // ── Step 3: Rank ─────────────────────────────────────────────────────
        let policy    = cfg.rank_policy();
        let sentences = self.ranker.rank_with(&text, policy);
        tracing::info!(
            "Ranked {} sentences (keep {}, > {} words)",
            sentences.len(),
            policy.keep_n,
            policy.min_words,
        );
        if sentences.is_empty() {
            tracing::warn!("No usable sentences in the material; no questions generated");
            return Ok(Vec::new());
        }

        // ── Step 4: Synthesize ───────────────────────────────────────────────
        let synthesizer = cfg.strategy.synthesizer(cfg.question_type);
        let questions   = synthesizer.synthesize(&sentences, cfg.count, &mut rng);

        if questions.len() < cfg.count {
            tracing::warn!(
                "Material exhausted: {} of {} requested {} questions",
                questions.len(),
                cfg.count,
                cfg.question_type,
            );
        } else {
            tracing::info!("Generated {} {} questions ({})", questions.len(), cfg.question_type, cfg.strategy);
        }
        Ok(questions)
    }
}

/// One-shot generation with the default (concept-based) strategy.
pub fn generate(
    raw_text:      &str,
    desired_count: usize,
    question_type: QuestionType,
) -> Result<Vec<Question>, QuizError> {
    GenerateUseCase::new(GenerateConfig {
        count: desired_count,
        question_type,
        ..GenerateConfig::default()
    })
    .execute(raw_text)
}
