//! Resume section detection
//!
//! A section counts as present when one of its header synonyms is followed,
//! anywhere later in the text, by one of its terminator synonyms. This is a
//! presence heuristic over plain text, not a layout parse: unrelated text
//! between the two headers still counts, and the last section in the table
//! is only found when something follows it.

use crate::config::{SectionConfig, SectionRule};
use crate::error::{Result, ResumeScorerError};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Detection outcome for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStatus {
    pub name: String,
    pub found: bool,
    /// Raw substrings spanning header to terminator, in document order.
    pub matches: Vec<String>,
}

/// One status per configured section, in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub sections: Vec<SectionStatus>,
}

impl SectionReport {
    pub fn get(&self, name: &str) -> Option<&SectionStatus> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Unknown section names are reported as not found.
    pub fn is_found(&self, name: &str) -> bool {
        self.get(name).map(|s| s.found).unwrap_or(false)
    }

    pub fn found_count(&self) -> usize {
        self.sections.iter().filter(|s| s.found).count()
    }

    pub fn missing_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| !s.found)
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionStatus> {
        self.sections.iter()
    }
}

struct CompiledRule {
    name: String,
    pattern: Regex,
}

pub struct SectionDetector {
    rules: Vec<CompiledRule>,
}

impl SectionDetector {
    pub fn new(rules: &[SectionRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    name: rule.name.clone(),
                    pattern: build_pattern(rule)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn from_config(config: &SectionConfig) -> Result<Self> {
        Self::new(&config.rules)
    }

    /// Matching is case-insensitive, so callers may pass raw or lowercased text.
    pub fn detect(&self, text: &str) -> SectionReport {
        let sections = self
            .rules
            .iter()
            .map(|rule| {
                let matches: Vec<String> = rule
                    .pattern
                    .find_iter(text)
                    .map(|m| m.as_str().to_string())
                    .collect();

                SectionStatus {
                    name: rule.name.clone(),
                    found: !matches.is_empty(),
                    matches,
                }
            })
            .collect();

        SectionReport { sections }
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }
}

impl Default for SectionDetector {
    fn default() -> Self {
        Self::from_config(&SectionConfig::default())
            .expect("Built-in section rules must compile")
    }
}

/// `(?is)(?:h1|h2).*?(?:t1|t2)`: header, shortest run of anything, terminator.
fn build_pattern(rule: &SectionRule) -> Result<Regex> {
    let headers = alternation(&rule.name, "header", &rule.headers)?;
    let terminators = alternation(&rule.name, "terminator", &rule.terminators)?;

    Ok(Regex::new(&format!("(?is)(?:{}).*?(?:{})", headers, terminators))?)
}

fn alternation(section: &str, kind: &str, synonyms: &[String]) -> Result<String> {
    if synonyms.is_empty() || synonyms.iter().any(|s| s.trim().is_empty()) {
        return Err(ResumeScorerError::Configuration(format!(
            "Section '{}' has an empty {} list or a blank {} synonym",
            section, kind, kind
        )));
    }

    Ok(synonyms
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|"))
}
