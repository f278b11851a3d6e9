use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the PDF text extraction tool
#[derive(Parser, Debug)]
#[command(name = "pdftext")]
#[command(about = "Extract plain text from a PDF file")]
#[command(version)]
pub struct Cli {
    /// Path to the input PDF file
    pub input: PathBuf,

    /// Path to the output text file
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
