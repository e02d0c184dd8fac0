//! Flag groups shared by the `text` and `file` subcommands.

use clap::{Args, ValueEnum};
use revlens_sentiment::{CleaningConfig, SentimentError, ThresholdPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PolicyPreset {
    /// Cutoffs at (0.1, -0.1)
    Narrow,
    /// Cutoffs at (0.5, -0.5)
    Wide,
}

#[derive(Debug, Args)]
pub(crate) struct PolicyArgs {
    /// Threshold preset separating the sentiment buckets
    #[arg(long, value_enum, default_value = "narrow", env = "REVLENS_POLICY")]
    pub(crate) policy: PolicyPreset,

    /// Custom positive cutoff; overrides the preset
    #[arg(long, requires = "negative_cutoff", allow_negative_numbers = true)]
    pub(crate) positive_cutoff: Option<f32>,

    /// Custom negative cutoff; overrides the preset
    #[arg(long, requires = "positive_cutoff", allow_negative_numbers = true)]
    pub(crate) negative_cutoff: Option<f32>,
}

impl PolicyArgs {
    /// Resolve flags to a validated policy. Explicit cutoffs win over the
    /// preset.
    pub(crate) fn resolve(&self) -> Result<ThresholdPolicy, SentimentError> {
        match (self.positive_cutoff, self.negative_cutoff) {
            (Some(positive), Some(negative)) => ThresholdPolicy::new(positive, negative),
            _ => Ok(match self.policy {
                PolicyPreset::Narrow => ThresholdPolicy::narrow(),
                PolicyPreset::Wide => ThresholdPolicy::wide(),
            }),
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CleaningArgs {
    /// Score the text as-is, skipping all cleaning
    #[arg(long)]
    pub(crate) raw: bool,

    /// Also strip common English stopwords when cleaning
    #[arg(long, conflicts_with = "raw")]
    pub(crate) stopwords: bool,
}

impl CleaningArgs {
    /// `None` when cleaning is disabled, otherwise the configured toggle set.
    pub(crate) fn config(&self) -> Option<CleaningConfig> {
        if self.raw {
            None
        } else if self.stopwords {
            Some(CleaningConfig::all())
        } else {
            Some(CleaningConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_narrow_resolves_to_narrow_policy() {
        let args = PolicyArgs {
            policy: PolicyPreset::Narrow,
            positive_cutoff: None,
            negative_cutoff: None,
        };
        assert_eq!(args.resolve().unwrap(), ThresholdPolicy::narrow());
    }

    #[test]
    fn preset_wide_resolves_to_wide_policy() {
        let args = PolicyArgs {
            policy: PolicyPreset::Wide,
            positive_cutoff: None,
            negative_cutoff: None,
        };
        assert_eq!(args.resolve().unwrap(), ThresholdPolicy::wide());
    }

    #[test]
    fn explicit_cutoffs_override_the_preset() {
        let args = PolicyArgs {
            policy: PolicyPreset::Narrow,
            positive_cutoff: Some(0.3),
            negative_cutoff: Some(-0.2),
        };
        let policy = args.resolve().unwrap();
        assert_eq!(policy.positive_cutoff(), 0.3);
        assert_eq!(policy.negative_cutoff(), -0.2);
    }

    #[test]
    fn inverted_cutoffs_are_rejected() {
        let args = PolicyArgs {
            policy: PolicyPreset::Narrow,
            positive_cutoff: Some(-0.5),
            negative_cutoff: Some(0.5),
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn raw_disables_cleaning() {
        let args = CleaningArgs {
            raw: true,
            stopwords: false,
        };
        assert!(args.config().is_none());
    }

    #[test]
    fn default_cleaning_keeps_stopwords() {
        let args = CleaningArgs {
            raw: false,
            stopwords: false,
        };
        let config = args.config().unwrap();
        assert!(!config.strip_stopwords);
        assert!(config.lowercase);
    }

    #[test]
    fn stopwords_flag_enables_stopword_removal() {
        let args = CleaningArgs {
            raw: false,
            stopwords: true,
        };
        assert!(args.config().unwrap().strip_stopwords);
    }
}
