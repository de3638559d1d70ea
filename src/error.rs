//! Error handling for the resume reviewer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeReviewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API credential missing: {0}")]
    MissingCredential(String),

    #[error("Model API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Report generation error: {0}")]
    Report(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

pub type Result<T> = std::result::Result<T, ResumeReviewerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeReviewerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeReviewerError::AnalysisFailed(err.to_string())
    }
}

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for ResumeReviewerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeReviewerError::Api(err.to_string())
    }
}
