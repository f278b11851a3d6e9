use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use pdf_extract::extract_text;
use tracing::{debug, info};

use crate::config::ExtractionConfig;
use crate::error::{ExtractError, Result};

/// Supported file types based on magic number detection
#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    /// PDF document (%PDF signature)
    Pdf,
    /// Plain text file (UTF-8, ASCII, or other text encoding)
    Text,
    /// Unknown or unsupported file type
    Unknown,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Pdf => write!(f, "PDF"),
            FileType::Text => write!(f, "Text"),
            FileType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Magic number signatures for file type detection
pub struct MagicNumbers {
    signatures: HashMap<Vec<u8>, FileType>,
}

impl MagicNumbers {
    pub fn new() -> Self {
        let mut signatures = HashMap::new();

        // PDF signature - %PDF (0x25, 0x50, 0x44, 0x46)
        signatures.insert(vec![0x25, 0x50, 0x44, 0x46], FileType::Pdf);

        Self { signatures }
    }

    /// Detect file type by checking magic numbers
    pub fn detect_from_bytes(&self, bytes: &[u8]) -> FileType {
        for (signature, file_type) in &self.signatures {
            if bytes.len() >= signature.len() && bytes.starts_with(signature) {
                return file_type.clone();
            }
        }

        if self.is_likely_text(bytes) {
            return FileType::Text;
        }

        FileType::Unknown
    }

    /// Heuristic to determine if bytes represent text content
    fn is_likely_text(&self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }

        // UTF-8 BOM
        if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            return true;
        }

        // Sample first 1024 bytes or entire content if smaller
        let sample_size = std::cmp::min(1024, bytes.len());
        let sample = &bytes[0..sample_size];

        // Null bytes are a strong indicator of binary content
        if sample.contains(&0) {
            return false;
        }

        if let Ok(text) = std::str::from_utf8(sample) {
            let printable_count = text
                .chars()
                .filter(|c| c.is_ascii_graphic() || c.is_ascii_whitespace())
                .count();

            let total_chars = text.chars().count();
            if total_chars > 0 {
                let printable_ratio = printable_count as f64 / total_chars as f64;
                return printable_ratio > 0.7;
            }
        }

        false
    }
}

impl Default for MagicNumbers {
    fn default() -> Self {
        Self::new()
    }
}

/// PDF text extractor.
///
/// Validates the input path, hands the file to the `pdf-extract` crate and
/// writes the returned string to disk as UTF-8. All content interpretation
/// happens inside the extraction library.
pub struct TextExtractor {
    config: ExtractionConfig,
    magic_numbers: MagicNumbers,
}

impl TextExtractor {
    /// Create a new extractor with default settings
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a new extractor with custom settings
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self {
            config,
            magic_numbers: MagicNumbers::new(),
        }
    }

    /// Extract text from a PDF file and write it to `output` as UTF-8,
    /// overwriting any previous file. Returns the number of bytes written.
    pub fn pdf_file_to_text(&self, input: &Path, output: &Path) -> Result<u64> {
        self.validate_input(input)?;

        let text = self.extract_text(input)?;
        self.write_output(&text, output)?;

        info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            input.display()
        );
        Ok(text.len() as u64)
    }

    /// Extract text from a PDF file, returning the library's output unmodified
    pub fn extract_text(&self, input: &Path) -> Result<String> {
        debug!("Extracting text from {}", input.display());
        extract_text(input).map_err(|e| ExtractError::Extraction(e.to_string()))
    }

    /// Detect file type from the file's leading bytes
    pub fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let mut header = [0u8; 1024];
        let mut file = fs::File::open(path)?;
        let bytes_read = file.read(&mut header)?;

        Ok(self.magic_numbers.detect_from_bytes(&header[..bytes_read]))
    }

    fn validate_input(&self, input: &Path) -> Result<()> {
        let metadata = fs::metadata(input).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExtractError::InputNotFound(input.to_path_buf()),
            _ => ExtractError::Io(e),
        })?;

        if !metadata.is_file() {
            return Err(ExtractError::NotAFile(input.to_path_buf()));
        }

        if let Some(max_size) = self.config.max_input_size {
            if metadata.len() > max_size {
                return Err(ExtractError::FileTooLarge {
                    size: metadata.len(),
                    max_size,
                });
            }
        }

        let file_type = self.detect_file_type(input)?;
        if file_type != FileType::Pdf {
            return Err(ExtractError::UnsupportedFileType(file_type.to_string()));
        }

        Ok(())
    }

    fn write_output(&self, text: &str, output: &Path) -> Result<()> {
        if self.config.create_output_dirs {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    debug!("Creating output directory {}", parent.display());
                    fs::create_dir_all(parent).map_err(|e| ExtractError::DirectoryCreation {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
            }
        }

        fs::write(output, text.as_bytes())?;
        Ok(())
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
