//! Resume reviewer: AI-powered resume review and job description matching

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod llm;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{Result, ResumeReviewerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info};
use output::report::ReportBuilder;
use processing::analyzer::ReviewEngine;
use processing::chunker::truncate_chars;
use processing::highlighter::highlight_missing_keywords;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            job,
            demo,
            output,
            no_report,
        } => {
            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt", "md"])
                .map_err(|e| ResumeReviewerError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["pdf", "docx", "txt", "md"]).map_err(
                    |e| {
                        ResumeReviewerError::InvalidInput(format!("Job description file: {}", e))
                    },
                )?;
            }

            if role.trim().is_empty() {
                println!("{}", "⚠ Please enter a target job role.".yellow());
                return Ok(());
            }

            println!("🔎 Analyzing resume for role: {}", role.bold());
            if demo {
                println!(
                    "{}",
                    "⚠ Running in demo mode. No API calls will be made.".yellow()
                );
            }

            // Text extraction
            let mut input_manager = InputManager::new();

            println!("📄 Processing resume: {}", resume.display());
            let full_resume_text = input_manager.extract_text(&resume).await?;
            let resume_text =
                truncate_chars(&full_resume_text, config.processing.resume_char_cap).to_string();

            let jd_text = match &job {
                Some(job_path) => {
                    println!("📥 Processing job description: {}", job_path.display());
                    let full_jd_text = input_manager.extract_text(job_path).await?;
                    truncate_chars(&full_jd_text, config.processing.job_description_char_cap)
                        .to_string()
                }
                None => String::new(),
            };

            info!(
                "Extracted {} resume characters, {} job description characters",
                resume_text.chars().count(),
                jd_text.chars().count()
            );

            // Analysis (demo or live)
            let spinner = stage_spinner();
            let engine = ReviewEngine::new(config.clone());
            let analysis = engine
                .analyze(&resume_text, &jd_text, &role, demo, |stage| {
                    spinner.set_message(stage.to_string());
                })
                .await?;
            spinner.finish_and_clear();

            let highlighted_resume = highlight_missing_keywords(&resume_text, &analysis.review);

            // The match section only surfaces when a job description was supplied
            let jd_match = if job.is_some() {
                analysis.jd_match.as_str()
            } else {
                ""
            };

            // Display results
            println!("\n{}", "📊 Resume Review".bold());
            println!("{}", analysis.review);

            println!("\n{}", "🖋 Highlighted Resume".bold());
            println!("{}", highlighted_resume);

            if !jd_match.is_empty() {
                println!("\n{}", "📌 JD Match Score".bold());
                println!("{}", jd_match);
            }

            // PDF report
            if !no_report {
                let report_bytes = ReportBuilder::new().render(&analysis.review, &role, jd_match)?;
                let report_path =
                    output.unwrap_or_else(|| PathBuf::from(&config.output.report_filename));
                std::fs::write(&report_path, &report_bytes)?;
                println!("\n📥 Report written to {}", report_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Model: {}", config.api.model);
                println!("Credential env var: {}", config.api.api_key_env);
                println!(
                    "Timeouts: {}s per chunk, {}s per review/match call",
                    config.api.chunk_timeout_secs, config.api.review_timeout_secs
                );
                println!("Chunk size: {} characters", config.processing.chunk_size);
                println!(
                    "Character caps: resume {}, job description {}",
                    config.processing.resume_char_cap, config.processing.job_description_char_cap
                );
                println!("Report filename: {}", config.output.report_filename);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn stage_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Processing your resume...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
