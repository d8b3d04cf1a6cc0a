//! Resume text analysis module

pub mod text_processor;
pub mod sections;
pub mod keywords;
pub mod analyzer;

pub use analyzer::{Analysis, ResumeAnalyzer};
pub use keywords::{parse_keywords, KeywordMatcher, MatchResult};
pub use sections::{SectionDetector, SectionReport, SectionStatus};
