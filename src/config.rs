use serde::{Deserialize, Serialize};

/// Settings for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum input file size in bytes; unlimited when `None`
    pub max_input_size: Option<u64>,

    /// Create missing parent directories for the output path
    pub create_output_dirs: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_input_size: None,
            create_output_dirs: true,
        }
    }
}
