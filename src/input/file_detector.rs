//! File type detection

use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Sniff the header. PDF writers may emit a few junk bytes before the
    /// marker, so the first kilobyte is searched.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let head = &bytes[..bytes.len().min(1024)];
        if head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
            FileType::Pdf
        } else {
            FileType::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("cv/resume.pdf")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("resume")), FileType::Unknown);
    }

    #[test]
    fn test_magic_detection() {
        assert_eq!(FileType::from_bytes(b"%PDF-1.7\n..."), FileType::Pdf);
        assert_eq!(FileType::from_bytes(b"\x00\x00%PDF-1.4"), FileType::Pdf);
        assert_eq!(FileType::from_bytes(b"PK\x03\x04"), FileType::Unknown);
        assert_eq!(FileType::from_bytes(b""), FileType::Unknown);
    }
}
