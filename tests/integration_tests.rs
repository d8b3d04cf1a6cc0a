//! Integration tests for the resume scorer

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_scorer::input::file_detector::FileType;
use resume_scorer::input::{InputManager, PdfExtractor};
use resume_scorer::processing::ResumeAnalyzer;
use resume_scorer::ResumeScorerError;
use std::io::Cursor;

/// Page contents used by the PDF builders below.
enum PageContent<'a> {
    Lines(&'a [&'a str]),
    Raw(Stream),
    Dangling,
}

fn text_stream(lines: &[&str]) -> Stream {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new("Td", vec![72.into(), (720 - 14 * i as i64).into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    Stream::new(dictionary! {}, content.encode().unwrap())
}

fn assemble_pdf(pages: Vec<PageContent>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let content_id = match page {
            PageContent::Lines(lines) => doc.add_object(text_stream(lines)),
            PageContent::Raw(stream) => doc.add_object(stream),
            // An object number nothing in the file defines.
            PageContent::Dangling => (9999, 0),
        };
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Build a PDF with one page per entry; each line becomes its own text object.
/// An empty entry produces a page without a text layer.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    assemble_pdf(pages.iter().map(|lines| PageContent::Lines(*lines)).collect())
}

fn sample_resume() -> Vec<u8> {
    build_pdf(&[
        &["Jane Doe", "SUMMARY", "Platform engineer who likes JavaScript"],
        &[],
        &["EDUCATION", "BSc Computer Science", "EXPERIENCE", "Built Rust services"],
        &["SKILLS", "Rust, Go, Kubernetes", "PROJECTS", "resume-scorer"],
    ])
}

#[test]
fn test_pdf_pages_are_extracted_in_order() {
    let text = PdfExtractor.extract_bytes(&sample_resume()).unwrap();

    let summary = text.find("SUMMARY").unwrap();
    let education = text.find("EDUCATION").unwrap();
    let skills = text.find("SKILLS").unwrap();
    assert!(summary < education && education < skills);
    assert!(text.contains("Built Rust services"));
}

#[test]
fn test_textless_pdf_yields_empty_text_and_no_sections() {
    let bytes = build_pdf(&[&[], &[]]);
    let analysis = ResumeAnalyzer::default().analyze_pdf(&bytes, "rust").unwrap();

    assert_eq!(analysis.text, "");
    assert_eq!(analysis.word_count, 0);
    assert_eq!(analysis.sections.found_count(), 0);
    assert_eq!(analysis.keywords.unwrap().missing, vec!["rust"]);
}

#[test]
fn test_undecodable_pages_contribute_nothing() {
    let garbage = Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        vec![0xde, 0xad, 0xbe, 0xef, 0x00, 0x13, 0x37],
    );
    let bytes = assemble_pdf(vec![
        PageContent::Lines(&["SUMMARY one"]),
        PageContent::Raw(garbage),
        PageContent::Dangling,
    ]);

    let text = PdfExtractor.extract_bytes(&bytes).unwrap();
    assert_eq!(text.trim(), "SUMMARY one");
}

#[test]
fn test_reader_is_rewound_for_reuse() {
    let bytes = sample_resume();
    let mut cursor = Cursor::new(bytes.clone());

    let from_reader = PdfExtractor.extract_reader(&mut cursor).unwrap();
    assert_eq!(cursor.position(), 0);
    assert_eq!(from_reader, PdfExtractor.extract_bytes(&bytes).unwrap());

    // A second pass over the same stream sees the same document.
    assert_eq!(PdfExtractor.extract_reader(&mut cursor).unwrap(), from_reader);
}

#[test]
fn test_end_to_end_analysis() {
    let analysis = ResumeAnalyzer::default()
        .analyze_pdf(&sample_resume(), "Java, Kubernetes, Terraform, rust")
        .unwrap();

    assert!(analysis.sections.is_found("summary"));
    assert!(analysis.sections.is_found("education"));
    assert!(analysis.sections.is_found("experience"));
    assert!(analysis.sections.is_found("skills"));

    let keywords = analysis.keywords.unwrap();
    assert_eq!(keywords.matched, vec!["Java", "Kubernetes", "rust"]);
    assert_eq!(keywords.missing, vec!["Terraform"]);
}

#[test]
fn test_skills_without_trailing_header_is_missing() {
    let bytes = build_pdf(&[&["EXPERIENCE", "Built systems...", "SKILLS", "Go, Rust"]]);
    let analysis = ResumeAnalyzer::default().analyze_pdf(&bytes, "").unwrap();

    assert!(analysis.sections.is_found("experience"));
    assert!(!analysis.sections.is_found("skills"));
    assert!(!analysis.sections.is_found("education"));
    assert!(analysis.keywords.is_none());
}

#[test]
fn test_non_pdf_bytes_fail_extraction() {
    let result = ResumeAnalyzer::default().analyze_pdf(b"PK\x03\x04 not a pdf", "rust");
    assert!(matches!(result, Err(ResumeScorerError::Extraction(_))));
}

#[test]
fn test_generated_pdf_is_detected_by_magic() {
    assert_eq!(FileType::from_bytes(&sample_resume()), FileType::Pdf);
}

#[tokio::test]
async fn test_input_manager_reads_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, sample_resume()).unwrap();

    let text = InputManager::new().extract_text(&path).await.unwrap();
    assert!(text.contains("Jane Doe"));
}

#[tokio::test]
async fn test_input_manager_rejects_other_formats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, b"not relevant").unwrap();

    let result = InputManager::new().extract_text(&path).await;
    assert!(matches!(result, Err(ResumeScorerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_input_manager_nonexistent_file() {
    let result = InputManager::new()
        .extract_text(std::path::Path::new("tests/fixtures/nonexistent.pdf"))
        .await;
    assert!(matches!(result, Err(ResumeScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_corrupt_pdf_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"%PDF-1.4 truncated").unwrap();

    match InputManager::new().extract_text(&path).await {
        Err(ResumeScorerError::Extraction(msg)) => assert!(msg.contains("broken.pdf")),
        other => panic!("expected extraction error, got {:?}", other),
    }
}

#[test]
fn test_uploaded_bytes_must_be_pdf() {
    let result = InputManager::new().extract_bytes(b"{\"resume\": true}");
    assert!(matches!(result, Err(ResumeScorerError::UnsupportedFormat(_))));
}
