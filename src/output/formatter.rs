//! Output formatters: console, JSON and Markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScorerError};
use crate::output::report::*;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_status(&self, found: bool) -> String {
        match (found, self.use_colors) {
            (true, true) => format!("✅ {}", "Section found.".color(Color::Green)),
            (false, true) => format!("❌ {}", "Section missing.".color(Color::Red)),
            (true, false) => "[ok] Section found.".to_string(),
            (false, false) => "[--] Section missing.".to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Resume: {} | Generated: {} | Processing time: {}ms\n",
            report.metadata.resume_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        output.push_str(&format!("Total Words: {}\n", report.summary.word_count));

        output.push_str(&self.format_header(
            &format!(
                "Sections ({}/{})",
                report.summary.sections_found, report.summary.sections_total
            ),
            2,
        ));
        for section in &report.sections {
            output.push_str(&format!(
                "📌 {:<12} {}\n",
                display_name(&section.name),
                self.format_status(section.found)
            ));
            if self.detailed {
                for matched in &section.matches {
                    let one_line = matched.split_whitespace().collect::<Vec<_>>().join(" ");
                    output.push_str(&format!(
                        "     {}\n",
                        self.colorize(&crate::processing::text_processor::preview(&one_line, 80), Color::BrightBlack)
                    ));
                }
            }
        }

        if let Some(keywords) = &report.keywords {
            output.push_str(&self.format_header("🔎 Keyword Match", 2));
            output.push_str(&format!(
                "Coverage: {}%\n",
                self.colorize(&keywords.coverage_percentage.to_string(), coverage_color(keywords.coverage_percentage))
            ));
            output.push_str(&format!(
                "Matched ({}): {}\n",
                keywords.matched_count,
                self.colorize(&keywords.matched.join(", "), Color::Green)
            ));
            output.push_str(&format!(
                "Missing ({}): {}\n",
                keywords.missing_count,
                self.colorize(&keywords.missing.join(", "), Color::Red)
            ));
        }

        if let Some(suggestion) = &report.suggestion {
            output.push_str(&self.format_header("🤖 AI Bullet Suggestions", 2));
            output.push_str(suggestion);
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

fn coverage_color(percentage: u8) -> Color {
    match percentage {
        75..=100 => Color::Green,
        50..=74 => Color::Yellow,
        _ => Color::Red,
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume Analysis\n\n");

        if self.include_metadata {
            let file_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Resume:** `{}` | **Generated:** {} | **Version:** {}\n\n",
                file_name,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.scorer_version
            ));
        }

        output.push_str(&format!("**Total Words:** {}\n\n", report.summary.word_count));

        output.push_str("## Sections\n\n");
        output.push_str("| Section | Status |\n");
        output.push_str("|---------|--------|\n");
        for section in &report.sections {
            let status = if section.found { "✅ Found" } else { "❌ Missing" };
            output.push_str(&format!("| {} | {} |\n", display_name(&section.name), status));
        }
        output.push('\n');

        if let Some(keywords) = &report.keywords {
            output.push_str("## 🔎 Keyword Match\n\n");
            output.push_str(&format!("**Coverage:** {}%\n\n", keywords.coverage_percentage));
            output.push_str(&format!(
                "**Matched ({}):** {}\n\n",
                keywords.matched_count,
                keywords.matched.join(", ")
            ));
            output.push_str(&format!(
                "**Missing ({}):** {}\n\n",
                keywords.missing_count,
                keywords.missing.join(", ")
            ));
        }

        if let Some(suggestion) = &report.suggestion {
            output.push_str("## 🤖 AI Bullet Suggestions\n\n");
            for line in suggestion.lines() {
                output.push_str(&format!("> {}\n", line));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeScorerError::OutputFormatting(format!("Failed to write report to {}: {}", file_path.display(), e))
    })
}

/// Where `--save` should write: a directory gets a generated file name inside it.
pub fn resolve_save_path(save: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, resume_name, true))
    } else {
        save.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
