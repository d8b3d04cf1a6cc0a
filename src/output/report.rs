//! Report structures rendered by the output formatters

use crate::processing::analyzer::Analysis;
use crate::processing::keywords::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one run produced, in presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,

    /// One entry per configured section, in canonical order
    pub sections: Vec<SectionEntry>,

    /// Present only when keywords were supplied
    pub keywords: Option<KeywordSummary>,

    /// AI bullet suggestions, when a credential was supplied and the call succeeded
    pub suggestion: Option<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub word_count: usize,
    pub sections_found: usize,
    pub sections_total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionEntry {
    pub name: String,
    pub found: bool,
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_count: usize,
    pub missing_count: usize,
    pub coverage_percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub resume_file: String,
    pub processing_time_ms: u64,
}

impl From<&MatchResult> for KeywordSummary {
    fn from(result: &MatchResult) -> Self {
        Self {
            matched: result.matched.clone(),
            missing: result.missing.clone(),
            matched_count: result.matched.len(),
            missing_count: result.missing.len(),
            coverage_percentage: (result.coverage() * 100.0).round() as u8,
        }
    }
}

impl AnalysisReport {
    pub fn new(
        analysis: &Analysis,
        suggestion: Option<String>,
        resume_file: &str,
        processing_time_ms: u64,
    ) -> Self {
        let sections: Vec<SectionEntry> = analysis
            .sections
            .iter()
            .map(|s| SectionEntry {
                name: s.name.clone(),
                found: s.found,
                matches: s.matches.clone(),
            })
            .collect();

        Self {
            summary: ReportSummary {
                word_count: analysis.word_count,
                sections_found: analysis.sections.found_count(),
                sections_total: sections.len(),
            },
            sections,
            keywords: analysis.keywords.as_ref().map(KeywordSummary::from),
            suggestion,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.to_string(),
                processing_time_ms,
            },
        }
    }
}

/// "skills" -> "Skills"
pub fn display_name(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
