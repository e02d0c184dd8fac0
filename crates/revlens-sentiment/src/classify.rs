//! Threshold policies and the polarity-to-label classifier.

use crate::error::SentimentError;
use crate::types::SentimentLabel;

/// Cutoff pair separating Positive/Neutral/Negative.
///
/// Always satisfies `positive_cutoff > negative_cutoff`; construct through
/// [`ThresholdPolicy::new`] or one of the presets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    positive_cutoff: f32,
    negative_cutoff: f32,
}

impl ThresholdPolicy {
    /// Build a policy from explicit cutoffs.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidPolicy`] unless
    /// `positive_cutoff > negative_cutoff`.
    pub fn new(positive_cutoff: f32, negative_cutoff: f32) -> Result<Self, SentimentError> {
        if positive_cutoff > negative_cutoff {
            Ok(Self {
                positive_cutoff,
                negative_cutoff,
            })
        } else {
            Err(SentimentError::InvalidPolicy {
                positive_cutoff,
                negative_cutoff,
            })
        }
    }

    /// The (0.1, -0.1) policy: most scores land outside the neutral band.
    #[must_use]
    pub fn narrow() -> Self {
        Self {
            positive_cutoff: 0.1,
            negative_cutoff: -0.1,
        }
    }

    /// The (0.5, -0.5) policy: only strong scores leave the neutral band.
    #[must_use]
    pub fn wide() -> Self {
        Self {
            positive_cutoff: 0.5,
            negative_cutoff: -0.5,
        }
    }

    #[must_use]
    pub fn positive_cutoff(&self) -> f32 {
        self.positive_cutoff
    }

    #[must_use]
    pub fn negative_cutoff(&self) -> f32 {
        self.negative_cutoff
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::narrow()
    }
}

/// Bucket a polarity score under the given policy.
///
/// Comparisons are strict on both sides: a polarity exactly at either cutoff
/// classifies as Neutral.
#[must_use]
pub fn classify(polarity: f32, policy: ThresholdPolicy) -> SentimentLabel {
    if polarity > policy.positive_cutoff {
        SentimentLabel::Positive
    } else if polarity < policy.negative_cutoff {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
