//! Text extraction from PDF documents

use crate::error::{Result, ResumeScorerError};
use log::{debug, warn};
use lopdf::Document;
use std::fmt::Display;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(|e| {
            ResumeScorerError::Io(e)
        })?;

        self.extract_bytes(&bytes).map_err(|e| match e {
            ResumeScorerError::Extraction(msg) => ResumeScorerError::Extraction(
                format!("Failed to extract text from PDF '{}': {}", path.display(), msg)
            ),
            other => other,
        })
    }
}

impl PdfExtractor {
    /// Extract the text of every page, in page order.
    ///
    /// Only an unparseable document is an error. A page without a text layer,
    /// or one whose content stream cannot be decoded, contributes nothing.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let doc = Document::load_mem(bytes).map_err(|e| {
            ResumeScorerError::Extraction(format!("Unreadable PDF stream: {}", e))
        })?;

        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        debug!("PDF has {} page(s)", page_numbers.len());

        let pages = page_numbers
            .into_iter()
            .map(|page_number| (page_number, doc.extract_text(&[page_number])));

        Ok(join_pages(pages))
    }

    /// Extract from a seekable stream, leaving it positioned where it started
    /// so the caller can read it again.
    pub fn extract_reader<R: Read + Seek>(&self, reader: &mut R) -> Result<String> {
        let start = reader.stream_position()?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        reader.seek(SeekFrom::Start(start))?;

        self.extract_bytes(&bytes)
    }
}

fn join_pages<I, E>(pages: I) -> String
where
    I: IntoIterator<Item = (u32, std::result::Result<String, E>)>,
    E: Display,
{
    let mut text = String::new();
    for (page_number, page) in pages {
        match page {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("No text extracted from page {}: {}", page_number, e),
        }
    }
    text
}
