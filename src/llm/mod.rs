//! LLM integration module

pub mod prompts;
pub mod splitter;
pub mod suggester;

pub use suggester::{OpenAiSuggester, Suggester};
