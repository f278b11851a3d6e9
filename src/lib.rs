//! # pdftext
//!
//! A command-line tool that extracts plain text from PDF files.
//!
//! The actual PDF parsing is delegated to the `pdf-extract` crate; this crate
//! contributes argument parsing, input validation, output writing and error
//! reporting around that single call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdftext::TextExtractor;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extractor = TextExtractor::new();
//!     extractor.pdf_file_to_text(Path::new("input.pdf"), Path::new("output.txt"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Components
//!
//! - [`extract`]: input validation and delegation to the extraction library
//! - [`config`]: extraction settings
//! - [`error`]: error types and process exit codes
//! - [`cli`]: command-line argument definitions

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;

pub use config::ExtractionConfig;
pub use error::{ExtractError, Result};
pub use extract::{FileType, TextExtractor};
