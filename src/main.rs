//! Resume scorer: PDF resume analysis against job description keywords

use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info, warn};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::Config;
use resume_scorer::config::OutputFormat;
use resume_scorer::error::ResumeScorerError;
use resume_scorer::input::InputManager;
use resume_scorer::llm::OpenAiSuggester;
use resume_scorer::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use resume_scorer::output::AnalysisReport;
use resume_scorer::processing::ResumeAnalyzer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(path).with_context(|| format!("Failed to load configuration from {}", path.display()))
}

fn save_report(rendered: &str, save: &Path, format: &OutputFormat, resume: &Path) -> anyhow::Result<PathBuf> {
    let target = resolve_save_path(save, format, &resume.display().to_string());
    save_report_to_file(rendered, &target)
        .with_context(|| format!("Failed to save report to {}", target.display()))?;
    Ok(target)
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            keywords,
            api_key,
            output,
            save,
            detailed,
            no_color,
        } => {
            analyze(
                &config,
                &resume,
                keywords.as_deref().unwrap_or(""),
                api_key.as_deref(),
                output.as_deref(),
                save,
                detailed,
                no_color,
            )
            .await
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", content);
                Ok(())
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
                Ok(())
            }

            Some(ConfigAction::Reset) => {
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to reset configuration at {}", config_path.display()))?;
                println!("✅ Configuration reset to defaults: {}", config_path.display());
                Ok(())
            }
        },
    }
}

#[allow(clippy::too_many_arguments)]
async fn analyze(
    config: &Config,
    resume: &Path,
    keyword_input: &str,
    api_key: Option<&str>,
    output: Option<&str>,
    save: Option<PathBuf>,
    detailed: bool,
    no_color: bool,
) -> anyhow::Result<()> {
    cli::validate_file_extension(resume, &["pdf"])
        .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;

    let output_format = match output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeScorerError::InvalidInput)?,
        None => config.output.format,
    };

    let started = Instant::now();
    info!("Starting resume analysis for {}", resume.display());

    let text = InputManager::new().extract_text(resume).await?;
    let analyzer = ResumeAnalyzer::new(config)?;
    let analysis = analyzer.analyze_text(text, keyword_input);

    let mut suggestion_error = None;
    let suggestion = match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => {
            let suggester = OpenAiSuggester::new(config.suggestion.clone())?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Requesting AI bullet suggestions...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let result = analyzer.suggest(&suggester, &analysis, key).await;
            spinner.finish_and_clear();

            match result {
                Ok(text) => Some(text),
                Err(e) => {
                    suggestion_error = Some(e);
                    None
                }
            }
        }
        None => {
            info!("No API key supplied, skipping AI suggestions");
            None
        }
    };

    let report = AnalysisReport::new(
        &analysis,
        suggestion,
        &resume.display().to_string(),
        started.elapsed().as_millis() as u64,
    );

    let generator = ReportGenerator::with_options(
        config.output.color_output && !no_color,
        detailed || config.output.detailed,
        true,
        true,
    );
    let rendered = generator.generate_report(&report, &output_format)?;
    println!("{}", rendered);

    if let Some(save) = save {
        let path = save_report(&rendered, &save, &output_format, resume)?;
        println!("💾 Report saved to {}", path.display());
    }

    // The analysis is still shown when the suggestion call fails; the error is reported last.
    if let Some(e) = suggestion_error {
        warn!("AI suggestions unavailable");
        return Err(e.into());
    }

    Ok(())
}
