use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};

use pdftext::cli::Cli;
use pdftext::{ExtractError, TextExtractor};

/// Set up logging and tracing
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

/// Exit status for an argument parsing failure. Help and version requests
/// are not errors; anything else is a usage error.
fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let extractor = TextExtractor::new();

    extractor
        .pdf_file_to_text(&cli.input, &cli.output)
        .with_context(|| format!("Failed to extract text from {}", cli.input.display()))?;

    info!("Extracted text to {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    // clap's default status for usage errors is 2, which is reserved here
    // for extraction failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = parse_exit_code(err.kind());
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<ExtractError>()
                .map(ExtractError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exit_codes() {
        assert_eq!(parse_exit_code(ErrorKind::DisplayHelp), 0);
        assert_eq!(parse_exit_code(ErrorKind::DisplayVersion), 0);
        assert_eq!(parse_exit_code(ErrorKind::MissingRequiredArgument), 1);
        assert_eq!(parse_exit_code(ErrorKind::UnknownArgument), 1);
    }
}
