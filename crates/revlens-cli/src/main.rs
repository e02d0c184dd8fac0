mod file;
mod opts;
mod text;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "revlens")]
#[command(about = "Review sentiment analysis from the command line")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Score a single text and print its sentiment
    Text(text::TextArgs),
    /// Analyze a CSV or spreadsheet file and export the augmented table
    File(file::FileArgs),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Text(args) => text::run(&args),
        Commands::File(args) => file::run(&args),
    }
}
