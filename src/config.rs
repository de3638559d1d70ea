//! Configuration management for the resume reviewer

use crate::error::{Result, ResumeReviewerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Model variant used for all generate calls.
    pub model: String,
    /// Environment variable holding the API credential.
    pub api_key_env: String,
    /// Timeout for each chunk-summarization call, in seconds.
    pub chunk_timeout_secs: u64,
    /// Timeout for the review and match calls, in seconds.
    pub review_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Resume text is split into chunks of this many characters.
    pub chunk_size: usize,
    /// Only the first N characters of the resume are analyzed.
    pub resume_char_cap: usize,
    /// Only the first N characters of the job description are analyzed.
    pub job_description_char_cap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report_filename: String,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                model: "gemini-1.5-flash".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                chunk_timeout_secs: 30,
                review_timeout_secs: 60,
            },
            processing: ProcessingConfig {
                chunk_size: 800,
                resume_char_cap: 2000,
                job_description_char_cap: 1500,
            },
            output: OutputConfig {
                report_filename: "resume_review.pdf".to_string(),
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeReviewerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeReviewerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-reviewer")
            .join("config.toml")
    }
}
