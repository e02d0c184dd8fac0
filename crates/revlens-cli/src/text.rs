//! The `text` subcommand: score one string and print the result.

use clap::Args;
use revlens_sentiment::{analyze_text, LexiconScorer};

use crate::opts::{CleaningArgs, PolicyArgs};

#[derive(Debug, Args)]
pub(crate) struct TextArgs {
    /// The text to analyze
    pub(crate) text: String,

    #[command(flatten)]
    pub(crate) policy: PolicyArgs,

    #[command(flatten)]
    pub(crate) cleaning: CleaningArgs,

    /// Emit the result as JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run(args: &TextArgs) -> anyhow::Result<()> {
    let policy = args.policy.resolve()?;
    let row = analyze_text(&args.text, args.cleaning.config(), policy, &LexiconScorer);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&row)?);
        return Ok(());
    }

    if let Some(cleaned) = &row.cleaned {
        println!("cleaned: {cleaned}");
    }
    println!("polarity: {:.2}", row.score.polarity);
    println!("subjectivity: {:.2}", row.score.subjectivity);
    println!("sentiment: {}", row.label);
    Ok(())
}
