//! Pipeline orchestration: clean, score, classify, aggregate.

use rayon::prelude::*;

use crate::classify::{classify, ThresholdPolicy};
use crate::error::SentimentError;
use crate::normalize::{normalize, CleaningConfig};
use crate::scorer::PolarityScorer;
use crate::table::{ColumnSpec, Table};
use crate::types::{AggregateCounts, AnalysisResult, ReviewRow, SentimentScore};

/// Analyze a single text: optionally clean, then score and classify.
///
/// When `cleaning` is `Some`, the cleaned text is what gets scored and is
/// kept on the row; otherwise the original text is scored as-is.
///
/// Scoring failures never escape: they degrade to a neutral score with a
/// warning, and out-of-range scorer output is clamped at the boundary.
pub fn analyze_text<S: PolarityScorer>(
    text: &str,
    cleaning: Option<CleaningConfig>,
    policy: ThresholdPolicy,
    scorer: &S,
) -> ReviewRow {
    let cleaned = cleaning.map(|config| normalize(text, config));
    let target = cleaned.as_deref().unwrap_or(text);

    let score = match scorer.score(target) {
        Ok(raw) => SentimentScore::new(raw.polarity, raw.subjectivity),
        Err(e) => {
            tracing::warn!(error = %e, "scoring failed; substituting neutral score");
            SentimentScore::NEUTRAL
        }
    };

    let label = classify(score.polarity, policy);
    ReviewRow {
        text: text.to_string(),
        cleaned,
        score,
        label,
    }
}

/// Run the batch pipeline over a table.
///
/// 1. Resolve the text column; an absent column aborts before any row is
///    processed.
/// 2. Per row: optionally clean, then score and classify. Rows are
///    independent and processed in parallel; output order matches input
///    order. Missing cells read as empty text and score neutral.
/// 3. Tally per-label counts once all rows are done.
///
/// # Errors
///
/// Returns [`SentimentError::MissingColumn`] when the requested column is not
/// in the table. Per-row scoring failures are not errors (see
/// [`analyze_text`]).
pub fn analyze_table<S: PolarityScorer + Sync>(
    table: &Table,
    column: &ColumnSpec,
    cleaning: Option<CleaningConfig>,
    policy: ThresholdPolicy,
    scorer: &S,
) -> Result<AnalysisResult, SentimentError> {
    let (col_index, col_name) = table.resolve_column(column)?;
    let column_name = col_name.to_string();

    let rows: Vec<ReviewRow> = (0..table.len())
        .into_par_iter()
        .map(|row| analyze_text(table.cell(row, col_index), cleaning, policy, scorer))
        .collect();

    let counts = AggregateCounts::from_labels(rows.iter().map(|r| &r.label));

    tracing::debug!(
        column = %column_name,
        rows = rows.len(),
        positive = counts.positive,
        neutral = counts.neutral,
        negative = counts.negative,
        "batch analysis complete"
    );

    Ok(AnalysisResult {
        column: column_name,
        rows,
        counts,
    })
}
