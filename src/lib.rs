//! Resume scorer library: PDF text extraction, section detection, keyword
//! coverage and optional AI suggestions for a single resume.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;

pub use error::{Result, ResumeScorerError};
pub use config::Config;
pub use processing::{Analysis, ResumeAnalyzer};
