use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("column '{column}' not found in input")]
    MissingColumn { column: String },

    #[error("unsupported file format '.{extension}' (expected csv, xlsx, or xls)")]
    UnsupportedFormat { extension: String },

    #[error("invalid threshold policy: positive cutoff {positive_cutoff} must be greater than negative cutoff {negative_cutoff}")]
    InvalidPolicy {
        positive_cutoff: f32,
        negative_cutoff: f32,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
