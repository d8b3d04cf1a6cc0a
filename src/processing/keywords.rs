//! Keyword matching against extracted resume text
//!
//! Matching is case-insensitive substring containment, not token matching:
//! "java" is reported as present in a resume that only mentions "JavaScript".

use aho_corasick::AhoCorasick;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partition of the keyword list. Both sides keep the input order and
/// together contain every input keyword exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Fraction of keywords found, 0.0 for an empty list.
    pub fn coverage(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.matched.len() as f32 / self.total() as f32
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Split comma-separated keyword input, trimming each entry.
///
/// Blank input, including whitespace only, means "no keywords" and yields an
/// empty list. Any input containing a comma is split as given, so `" , "`
/// yields two empty keywords. Empty entries and duplicates are kept.
pub fn parse_keywords(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    input.split(',').map(|kw| kw.trim().to_string()).collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn match_keywords(&self, text: &str, keywords: &[String]) -> MatchResult {
        let haystack = text.to_lowercase();
        let lowered: Vec<String> = keywords.iter().map(|kw| kw.to_lowercase()).collect();

        // Duplicate keywords share one automaton pattern.
        let mut patterns: Vec<&str> = Vec::new();
        let mut pattern_ids: HashMap<&str, usize> = HashMap::new();
        let keyword_patterns: Vec<Option<usize>> = lowered
            .iter()
            .map(|kw| {
                if kw.is_empty() {
                    return None;
                }
                Some(*pattern_ids.entry(kw.as_str()).or_insert_with(|| {
                    patterns.push(kw.as_str());
                    patterns.len() - 1
                }))
            })
            .collect();

        let present = find_present(&haystack, &patterns);

        let mut result = MatchResult::default();
        for (keyword, pattern) in keywords.iter().zip(keyword_patterns) {
            // The empty string is contained in every text.
            let found = pattern.map(|id| present[id]).unwrap_or(true);
            if found {
                result.matched.push(keyword.clone());
            } else {
                result.missing.push(keyword.clone());
            }
        }

        result
    }
}

fn find_present(haystack: &str, patterns: &[&str]) -> Vec<bool> {
    let mut present = vec![false; patterns.len()];
    if patterns.is_empty() {
        return present;
    }

    match AhoCorasick::new(patterns) {
        Ok(automaton) => {
            let mut remaining = patterns.len();
            for mat in automaton.find_overlapping_iter(haystack) {
                let id = mat.pattern().as_usize();
                if !present[id] {
                    present[id] = true;
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }
        Err(e) => {
            warn!("Keyword automaton unavailable ({}), falling back to linear search", e);
            for (id, pattern) in patterns.iter().enumerate() {
                present[id] = haystack.contains(pattern);
            }
        }
    }

    present
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = KeywordMatcher::new().match_keywords("I used python daily", &keywords(&["Python"]));
        assert_eq!(result.matched, vec!["Python"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_substring_semantics_are_intentional() {
        let result = KeywordMatcher::new().match_keywords("I love JavaScript", &keywords(&["Java"]));
        assert_eq!(result.matched, vec!["Java"]);
    }

    #[test]
    fn test_partition_preserves_order() {
        let list = keywords(&["Kubernetes", "Rust", "Terraform", "Go", "AWS"]);
        let text = "Shipped Rust services on AWS, some Go tooling.";
        let result = KeywordMatcher::new().match_keywords(text, &list);

        assert_eq!(result.matched, vec!["Rust", "Go", "AWS"]);
        assert_eq!(result.missing, vec!["Kubernetes", "Terraform"]);
        assert_eq!(result.total(), list.len());
    }

    #[test]
    fn test_empty_keyword_list() {
        let result = KeywordMatcher::new().match_keywords("anything", &[]);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.coverage(), 0.0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = keywords(&["sql", "SQL", "excel", "sql"]);
        let result = KeywordMatcher::new().match_keywords("PostgreSQL", &list);

        assert_eq!(result.matched, vec!["sql", "SQL", "sql"]);
        assert_eq!(result.missing, vec!["excel"]);
    }

    #[test]
    fn test_overlapping_keywords_all_found() {
        let list = keywords(&["script", "javascript", "java", "typescript"]);
        let result = KeywordMatcher::new().match_keywords("javascript", &list);

        assert_eq!(result.matched, vec!["script", "javascript", "java"]);
        assert_eq!(result.missing, vec!["typescript"]);
    }

    #[test]
    fn test_empty_keyword_is_always_matched() {
        let result = KeywordMatcher::new().match_keywords("", &keywords(&["", "rust"]));
        assert_eq!(result.matched, vec![""]);
        assert_eq!(result.missing, vec!["rust"]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let result = KeywordMatcher::new().match_keywords("Erfahrung mit ÜBERSETZUNG", &keywords(&["übersetzung"]));
        assert_eq!(result.matched, vec!["übersetzung"]);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let matcher = KeywordMatcher::new();
        let list = keywords(&["docker", "rust", "go", "helm"]);
        let text = "Docker, Rust and Golang";

        assert_eq!(matcher.match_keywords(text, &list), matcher.match_keywords(text, &list));
    }

    #[test]
    fn test_coverage() {
        let result = KeywordMatcher::new().match_keywords("rust go", &keywords(&["rust", "go", "java", "c#"]));
        assert!((result.coverage() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_keywords(" Rust, Go ,AWS "), vec!["Rust", "Go", "AWS"]);
        assert_eq!(parse_keywords("a,,b"), vec!["a", "", "b"]);
        assert_eq!(parse_keywords("single"), vec!["single"]);
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords("   ").is_empty());
        assert_eq!(parse_keywords(" , "), vec!["", ""]);
    }
}
