//! The `file` subcommand: analyze a tabular file, print a summary, export CSV.

use std::path::PathBuf;

use clap::Args;
use revlens_sentiment::{
    analyze_table, export_csv, AggregateCounts, AnalysisResult, ColumnSpec, LexiconScorer,
    SentimentLabel, Table,
};

use crate::opts::{CleaningArgs, PolicyArgs};

/// Widest bar drawn for the largest label count.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Args)]
pub(crate) struct FileArgs {
    /// Path to a .csv, .xlsx, or .xls file
    pub(crate) path: PathBuf,

    /// Name of the text column to analyze
    #[arg(long, default_value = "review", env = "REVLENS_TEXT_COLUMN")]
    pub(crate) column: String,

    /// Analyze the first column instead of a named one
    #[arg(long, conflicts_with = "column")]
    pub(crate) first_column: bool,

    #[command(flatten)]
    pub(crate) policy: PolicyArgs,

    #[command(flatten)]
    pub(crate) cleaning: CleaningArgs,

    /// Where to write the augmented CSV
    #[arg(long, default_value = "sentiment_results.csv")]
    pub(crate) output: PathBuf,

    /// Number of leading rows to preview (0 disables the preview)
    #[arg(long, default_value_t = 10)]
    pub(crate) preview: usize,
}

pub(crate) fn run(args: &FileArgs) -> anyhow::Result<()> {
    let policy = args.policy.resolve()?;
    let table = Table::from_path(&args.path)?;
    tracing::info!(
        path = %args.path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "table loaded"
    );

    let column = if args.first_column {
        ColumnSpec::First
    } else {
        ColumnSpec::Name(args.column.clone())
    };
    let result = analyze_table(&table, &column, args.cleaning.config(), policy, &LexiconScorer)?;

    print_preview(&result, args.preview);
    print_counts(&result.counts);

    let bytes = export_csv(&result)?;
    std::fs::write(&args.output, &bytes)?;
    println!(
        "wrote {} rows to {}",
        result.rows.len(),
        args.output.display()
    );
    Ok(())
}

fn print_preview(result: &AnalysisResult, limit: usize) {
    if limit == 0 {
        return;
    }
    for row in result.rows.iter().take(limit) {
        let shown = row.cleaned.as_deref().unwrap_or(&row.text);
        println!(
            "{:>8}  {:+.2}  {}",
            row.label.to_string(),
            row.score.polarity,
            shown
        );
    }
    if result.rows.len() > limit {
        println!("... and {} more rows", result.rows.len() - limit);
    }
}

fn print_counts(counts: &AggregateCounts) {
    let max = counts
        .get(SentimentLabel::Positive)
        .max(counts.get(SentimentLabel::Neutral))
        .max(counts.get(SentimentLabel::Negative))
        .max(1);
    println!();
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ] {
        let count = counts.get(label);
        let bar = "#".repeat(count * BAR_WIDTH / max);
        println!("{:>8} {count:>6}  {bar}", label.to_string());
    }
}
