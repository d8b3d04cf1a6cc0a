//! Analysis engine: composes extraction, section detection and keyword matching

use crate::config::Config;
use crate::error::Result;
use crate::input::text_extractor::PdfExtractor;
use crate::llm::suggester::Suggester;
use crate::processing::keywords::{parse_keywords, KeywordMatcher, MatchResult};
use crate::processing::sections::{SectionDetector, SectionReport};
use crate::processing::text_processor;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Result of one analysis run. Nothing here outlives the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub text: String,
    pub word_count: usize,
    pub sections: SectionReport,
    /// `None` when no keywords were supplied.
    pub keywords: Option<MatchResult>,
}

pub struct ResumeAnalyzer {
    detector: SectionDetector,
    matcher: KeywordMatcher,
}

impl ResumeAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            detector: SectionDetector::from_config(&config.sections)?,
            matcher: KeywordMatcher::new(),
        })
    }

    pub fn with_detector(detector: SectionDetector) -> Self {
        Self {
            detector,
            matcher: KeywordMatcher::new(),
        }
    }

    /// Extract the PDF and analyze it. Only extraction can fail.
    pub fn analyze_pdf(&self, document: &[u8], keyword_input: &str) -> Result<Analysis> {
        let text = PdfExtractor.extract_bytes(document)?;
        Ok(self.analyze_text(text, keyword_input))
    }

    /// `keyword_input` is raw comma-separated text; blank input skips matching.
    pub fn analyze_text(&self, text: String, keyword_input: &str) -> Analysis {
        let word_count = text_processor::word_count(&text);
        let sections = self.detector.detect(&text_processor::normalize(&text));
        debug!(
            "Detected {}/{} sections in {} words",
            sections.found_count(),
            sections.sections.len(),
            word_count
        );

        let keywords = parse_keywords(keyword_input);
        let keywords = if keywords.is_empty() {
            None
        } else {
            let result = self.matcher.match_keywords(&text, &keywords);
            info!("Matched {} of {} keywords", result.matched.len(), result.total());
            Some(result)
        };

        Analysis {
            text,
            word_count,
            sections,
            keywords,
        }
    }

    /// Hands the full extracted text to the suggestion service; errors are
    /// returned exactly as the service produced them.
    pub async fn suggest<S: Suggester>(
        &self,
        suggester: &S,
        analysis: &Analysis,
        credential: &str,
    ) -> Result<String> {
        suggester.summarize(&analysis.text, credential).await
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::with_detector(SectionDetector::default())
    }
}
