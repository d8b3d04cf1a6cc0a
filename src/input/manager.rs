//! Input manager: validates the uploaded resume and routes it to the extractor

use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, TextExtractor};
use log::info;
use std::path::Path;

/// Every call re-reads the file; extracted text is never kept between runs.
#[derive(Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeScorerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Unknown => Err(ResumeScorerError::UnsupportedFormat(
                format!("Only PDF resumes are supported: {}", path.display())
            )),
        }
    }

    /// Bytes already in memory (e.g. an upload). Checked by header, not by name.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        match FileType::from_bytes(bytes) {
            FileType::Pdf => PdfExtractor.extract_bytes(bytes),
            FileType::Unknown => Err(ResumeScorerError::UnsupportedFormat(
                "Uploaded data is not a PDF document".to_string()
            )),
        }
    }
}
