//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub sections: SectionConfig,
    pub suggestion: SuggestionConfig,
    pub output: OutputConfig,
}

/// Canonical section order. Each rule is tried independently; the order of
/// `rules` is the order sections are reported in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub rules: Vec<SectionRule>,
}

/// One section of the detection table: a header synonym must appear, followed
/// somewhere later by one of the terminator synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRule {
    pub name: String,
    pub headers: Vec<String>,
    pub terminators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl SectionRule {
    pub fn new(name: &str, headers: &[&str], terminators: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            terminators: terminators.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                SectionRule::new(
                    "summary",
                    &["summary", "about me"],
                    &["education", "experience", "skills", "projects"],
                ),
                SectionRule::new("education", &["education"], &["experience", "skills", "projects"]),
                SectionRule::new("experience", &["experience"], &["skills", "projects", "certifications"]),
                // Skills is only found when a certifications/projects header follows it.
                SectionRule::new("skills", &["skills"], &["certifications", "projects"]),
            ],
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            chunk_size: 1000,
            chunk_overlap: 100,
            timeout_secs: 120,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: SectionConfig::default(),
            suggestion: SuggestionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load the config file, writing defaults to it on first run.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.suggestion.chunk_size <= self.suggestion.chunk_overlap {
            return Err(ResumeScorerError::Configuration(format!(
                "suggestion.chunk_size ({}) must be greater than suggestion.chunk_overlap ({})",
                self.suggestion.chunk_size, self.suggestion.chunk_overlap
            )));
        }
        for rule in &self.sections.rules {
            if rule.headers.is_empty() || rule.terminators.is_empty() {
                return Err(ResumeScorerError::Configuration(format!(
                    "Section rule '{}' needs at least one header and one terminator",
                    rule.name
                )));
            }
        }
        Ok(())
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.rules.iter().map(|r| r.name.as_str()).collect()
    }
}
