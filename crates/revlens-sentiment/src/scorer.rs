//! Polarity scoring boundary and the bundled lexicon scorer.
//!
//! Scoring is an external capability as far as the pipeline is concerned:
//! anything implementing [`PolarityScorer`] can sit behind the seam. The
//! pipeline enforces the contract at the boundary: failures degrade to a
//! neutral score, out-of-range values are clamped.

use thiserror::Error;

use crate::types::SentimentScore;

/// A scorer could not process its input.
///
/// Never fatal to a batch: the pipeline substitutes [`SentimentScore::NEUTRAL`]
/// and continues.
#[derive(Debug, Error)]
#[error("scoring failed: {reason}")]
pub struct ScorerError {
    pub reason: String,
}

/// Maps a text to a polarity/subjectivity pair.
///
/// Implementations must be deterministic pure functions of the input string,
/// with polarity in `[-1.0, 1.0]` and subjectivity in `[0.0, 1.0]`.
pub trait PolarityScorer {
    /// Score one text.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError`] when the input cannot be scored at all.
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError>;
}

/// Review-domain word weights for [`LexiconScorer`].
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The summed score is clamped to `[-1.0, 1.0]`.
const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("wonderful", 0.5),
    ("brilliant", 0.5),
    ("fantastic", 0.5),
    ("superb", 0.5),
    ("masterpiece", 0.6),
    ("perfect", 0.5),
    ("beautiful", 0.4),
    ("enjoyable", 0.4),
    ("entertaining", 0.3),
    ("gripping", 0.4),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("favorite", 0.4),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("charming", 0.3),
    ("delightful", 0.4),
    ("fun", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("worst", -0.6),
    ("horrible", -0.6),
    ("boring", -0.5),
    ("dull", -0.4),
    ("waste", -0.4),
    ("disappointing", -0.5),
    ("disappointment", -0.5),
    ("mess", -0.4),
    ("predictable", -0.3),
    ("forgettable", -0.4),
    ("unwatchable", -0.7),
    ("weak", -0.3),
    ("poor", -0.4),
    ("hate", -0.5),
    ("hated", -0.5),
    ("annoying", -0.4),
    ("mediocre", -0.3),
];

/// Word-weight scorer over the bundled review lexicon.
///
/// Splits text into lowercase words, trims non-alphabetic edges, sums matching
/// weights for polarity, and reports the fraction of opinion-bearing words as
/// subjectivity. Empty or unmatched text scores neutral. Infallible.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, ScorerError> {
        let mut polarity = 0.0_f32;
        let mut opinion_words = 0_usize;
        let mut total_words = 0_usize;

        for word in text.split_whitespace() {
            total_words += 1;
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            for &(lex_word, weight) in LEXICON {
                if w == lex_word {
                    polarity += weight;
                    opinion_words += 1;
                    break;
                }
            }
        }

        if total_words == 0 {
            return Ok(SentimentScore::NEUTRAL);
        }

        #[allow(clippy::cast_precision_loss)]
        let subjectivity = opinion_words as f32 / total_words as f32;
        Ok(SentimentScore::new(polarity, subjectivity))
    }
}
