//! Core domain types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A polarity/subjectivity pair produced by a scorer.
///
/// Polarity is in `[-1.0, 1.0]` (negative = unfavorable), subjectivity in
/// `[0.0, 1.0]` (higher = more opinion-laden). Produced once per input text,
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f32,
    pub subjectivity: f32,
}

impl SentimentScore {
    /// The neutral score substituted when scoring degrades.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Build a score, clamping both components into their contractual ranges.
    #[must_use]
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Three-way sentiment bucket derived from a polarity score and a
/// [`ThresholdPolicy`](crate::ThresholdPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

/// One processed record: the original text, the cleaned text when cleaning
/// was requested, and the derived score and label.
///
/// The label is always a pure function of `score.polarity` and the policy the
/// pipeline ran with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub text: String,
    pub cleaned: Option<String>,
    pub score: SentimentScore,
    pub label: SentimentLabel,
}

/// Per-label counts over one analysis. Always carries all three labels;
/// unobserved labels count zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl AggregateCounts {
    /// Tally a sequence of labels.
    #[must_use]
    pub fn from_labels<'a, I: IntoIterator<Item = &'a SentimentLabel>>(labels: I) -> Self {
        let mut counts = Self::default();
        for label in labels {
            match label {
                SentimentLabel::Positive => counts.positive += 1,
                SentimentLabel::Neutral => counts.neutral += 1,
                SentimentLabel::Negative => counts.negative += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Result of one batch analysis: the ordered rows plus the label tally.
///
/// Lives for one analyze/display/export cycle; nothing is persisted across
/// cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Resolved name of the text column the rows were read from.
    pub column: String,
    pub rows: Vec<ReviewRow>,
    pub counts: AggregateCounts,
}
