use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar
    pub file: PathBuf,

    /// Sentence to recognize, split on whitespace
    pub sentence: Vec<String>,

    /// Start symbol (default: first in the file)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Print the grammar and every item as it is added to the chart
    #[arg(short, long)]
    pub trace: bool,

    /// Print the populated chart after recognition
    #[arg(short, long)]
    pub chart: bool,

    /// Generate random sentences instead of recognizing one
    #[arg(short, long, value_name = "AMOUNT")]
    pub generate: Option<u32>,
}
