//! CLI interface for the resume scorer

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Score a PDF resume against job description keywords")]
#[command(long_about = "Extract text from a PDF resume, check which standard sections are present, report which job keywords it covers, and optionally ask an LLM for bullet-point suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume
    Analyze {
        /// Path to resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description keywords, comma-separated
        #[arg(short, long)]
        keywords: Option<String>,

        /// API key for AI bullet suggestions; suggestions are skipped without one
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show the matched text for each section
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
