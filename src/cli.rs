//! CLI interface for the resume reviewer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-reviewer")]
#[command(about = "AI-powered resume review and job description matching tool")]
#[command(
    long_about = "Review a resume with a hosted LLM, highlight missing keywords, optionally match it against a job description, and export a PDF report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume, optionally against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job role, e.g. "Data Analyst"
        #[arg(long)]
        role: String,

        /// Path to job description file (optional)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Run without API calls, returning canned outputs
        #[arg(short, long)]
        demo: bool,

        /// Where to write the PDF report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip writing the PDF report
        #[arg(long)]
        no_report: bool,
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

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
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
