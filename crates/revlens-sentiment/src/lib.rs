//! Review sentiment analysis pipeline.
//!
//! Cleans free-text or tabular text with configurable transforms, scores it
//! for polarity and subjectivity behind the [`PolarityScorer`] seam, buckets
//! scores into Positive/Neutral/Negative via a [`ThresholdPolicy`], tallies
//! per-label counts, and serializes the augmented table to CSV.

pub mod classify;
pub mod error;
pub mod export;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod table;
pub mod types;

pub use classify::{classify, ThresholdPolicy};
pub use error::SentimentError;
pub use export::{export_csv, ExportCache};
pub use normalize::{normalize, CleaningConfig};
pub use pipeline::{analyze_table, analyze_text};
pub use scorer::{LexiconScorer, PolarityScorer, ScorerError};
pub use table::{ColumnSpec, Table};
pub use types::{AggregateCounts, AnalysisResult, ReviewRow, SentimentLabel, SentimentScore};
