//! CSV serialization of an analysis result.
//!
//! Output is deterministic: identical rows always produce byte-identical
//! CSV, which is what makes the content-hash cache sound.

use sha2::{Digest, Sha256};

use crate::error::SentimentError;
use crate::types::AnalysisResult;

/// Serialize the augmented table to UTF-8 CSV bytes.
///
/// Header layout: the text column under its resolved name, then
/// `<column>_clean` when any row carries cleaned text, then `score`
/// (polarity) and `analysis` (label). No index column is emitted.
///
/// # Errors
///
/// Returns [`SentimentError::Csv`] or [`SentimentError::Io`] if serialization
/// fails.
pub fn export_csv(result: &AnalysisResult) -> Result<Vec<u8>, SentimentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let has_cleaned = result.rows.iter().any(|r| r.cleaned.is_some());
    let clean_header = format!("{}_clean", result.column);

    let mut header = vec![result.column.as_str()];
    if has_cleaned {
        header.push(clean_header.as_str());
    }
    header.push("score");
    header.push("analysis");
    writer.write_record(&header)?;

    for row in &result.rows {
        let score = row.score.polarity.to_string();
        let label = row.label.to_string();
        let mut record = vec![row.text.as_str()];
        if has_cleaned {
            record.push(row.cleaned.as_deref().unwrap_or(""));
        }
        record.push(score.as_str());
        record.push(label.as_str());
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| SentimentError::Io(e.into_error()))
}

/// Memoized CSV export keyed by a content hash of the result.
///
/// Scoped to one display session: hold one `ExportCache` per live result and
/// ask it for bytes as often as needed; serialization reruns only when the
/// result content actually changed.
#[derive(Debug, Default)]
pub struct ExportCache {
    hash: Option<[u8; 32]>,
    bytes: Vec<u8>,
}

impl ExportCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV bytes for `result`, reusing the previous serialization when the
    /// content hash is unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`export_csv`] errors on recomputation.
    pub fn bytes(&mut self, result: &AnalysisResult) -> Result<&[u8], SentimentError> {
        let hash = content_hash(result);
        if self.hash != Some(hash) {
            self.bytes = export_csv(result)?;
            self.hash = Some(hash);
        }
        Ok(&self.bytes)
    }
}

/// SHA-256 over everything that feeds the serialized form.
fn content_hash(result: &AnalysisResult) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(result.column.as_bytes());
    hasher.update([0]);
    for row in &result.rows {
        hasher.update(row.text.as_bytes());
        hasher.update([0]);
        if let Some(cleaned) = &row.cleaned {
            hasher.update([1]);
            hasher.update(cleaned.as_bytes());
        } else {
            hasher.update([0]);
        }
        hasher.update(row.score.polarity.to_le_bytes());
        hasher.update(row.label.to_string().as_bytes());
        hasher.update([0]);
    }
    hasher.finalize().into()
}
