//! Prompt for the "stuff" summarization strategy: every chunk goes into one request

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub summary: String,
    pub chunk_separator: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            summary: SUMMARY_TEMPLATE.to_string(),
            chunk_separator: "\n\n".to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_summary(&self, chunks: &[String]) -> String {
        self.summary.replace("{text}", &chunks.join(&self.chunk_separator))
    }
}

const SUMMARY_TEMPLATE: &str = r#"Write a concise summary of the following:


"{text}"


CONCISE SUMMARY:"#;
