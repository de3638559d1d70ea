//! Review orchestration: demo and live analysis paths

use crate::config::Config;
use crate::error::{Result, ResumeReviewerError};
use crate::llm::client::GeminiClient;
use crate::llm::prompts;
use crate::processing::chunker::chunk_text;
use log::{info, warn};
use std::future::Future;
use std::time::Duration;

/// Fixed demo-mode outputs and per-call fallback responses.
pub const DEMO_REVIEW: &str =
    "Demo Review: Strong resume but missing AWS, Tableau, and SQL for Data Analyst roles.";
pub const DEMO_JD_MATCH: &str =
    "Demo JD Match: 75% match. Improve cloud skills for better alignment.";
pub const CHUNK_FALLBACK_SUMMARY: &str = "Demo: Candidate skilled in Python, ML, and DA.";
pub const REVIEW_FALLBACK: &str =
    "Demo Review: Strong resume but missing AWS, Tableau, and cloud skills.";
pub const JD_MATCH_FALLBACK: &str = "Demo JD Match: 70% match. Missing SQL and Tableau.";

/// The two text blobs an analysis produces. `jd_match` stays empty when no job
/// description was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAnalysis {
    pub review: String,
    pub jd_match: String,
}

/// Coordinates chunking, summarization, review, and job description matching
/// against the hosted model.
pub struct ReviewEngine {
    config: Config,
}

impl ReviewEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Analyze a resume, optionally against a job description. `progress` is
    /// called once per user-visible stage.
    pub async fn analyze(
        &self,
        resume_text: &str,
        jd_text: &str,
        job_role: &str,
        demo_mode: bool,
        progress: impl Fn(&str),
    ) -> Result<ReviewAnalysis> {
        if demo_mode {
            info!("Demo mode enabled, no API calls will be made");
            return Ok(ReviewAnalysis {
                review: DEMO_REVIEW.to_string(),
                jd_match: DEMO_JD_MATCH.to_string(),
            });
        }

        self.analyze_live(resume_text, jd_text, job_role, progress).await
    }

    async fn analyze_live(
        &self,
        resume_text: &str,
        jd_text: &str,
        job_role: &str,
        progress: impl Fn(&str),
    ) -> Result<ReviewAnalysis> {
        // Setup failures are fatal and happen before any network call.
        let api_key = std::env::var(&self.config.api.api_key_env).map_err(|_| {
            ResumeReviewerError::MissingCredential(format!(
                "{} is not set; export it or rerun with --demo",
                self.config.api.api_key_env
            ))
        })?;
        let client = GeminiClient::new(api_key, self.config.api.model.clone())?;
        info!("Model client initialized for {}", client.model());

        let chunk_timeout = Duration::from_secs(self.config.api.chunk_timeout_secs);
        let call_timeout = Duration::from_secs(self.config.api.review_timeout_secs);

        progress("Summarizing resume in chunks...");
        let chunks = chunk_text(resume_text, self.config.processing.chunk_size);
        let resume_summary = condense_resume(chunks, chunk_timeout, |chunk| {
            let prompt = prompts::summarize_prompt(&chunk);
            let client = &client;
            async move { client.generate(&prompt).await }
        })
        .await;

        progress("Analyzing resume...");
        let review = call_with_fallback(
            client.generate(&prompts::review_prompt(&resume_summary, job_role)),
            call_timeout,
            REVIEW_FALLBACK,
            "Resume review",
        )
        .await;

        let jd_match = if jd_text.is_empty() {
            String::new()
        } else {
            progress("Comparing with job description...");
            call_with_fallback(
                client.generate(&prompts::match_prompt(&resume_summary, jd_text)),
                call_timeout,
                JD_MATCH_FALLBACK,
                "Job description match",
            )
            .await
        };

        Ok(ReviewAnalysis { review, jd_match })
    }
}

/// Summarize each chunk in order, one call at a time, and join the summaries
/// with a single space. A failed call only costs that chunk its summary.
pub async fn condense_resume<F, Fut>(chunks: Vec<String>, timeout: Duration, generate: F) -> String
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut summaries = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let summary = call_with_fallback(
            generate(chunk),
            timeout,
            CHUNK_FALLBACK_SUMMARY,
            "Chunk summarization",
        )
        .await;
        summaries.push(summary);
    }
    summaries.join(" ")
}

/// Run one model call with a bounded timeout, substituting `fallback` on any
/// failure. Call failures never abort the surrounding analysis.
pub async fn call_with_fallback<F>(
    call: F,
    timeout: Duration,
    fallback: &str,
    stage: &str,
) -> String
where
    F: Future<Output = Result<String>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("{} failed ({}), using fallback response", stage, e);
            fallback.to_string()
        }
        Err(_) => {
            warn!("{} timed out after {:?}, using fallback response", stage, timeout);
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_mode_returns_fixed_literals() {
        let engine = ReviewEngine::new(Config::default());
        let analysis = engine
            .analyze("Python, Excel", "", "Data Analyst", true, |_| {})
            .await
            .unwrap();

        assert_eq!(analysis.review, DEMO_REVIEW);
        assert_eq!(analysis.jd_match, DEMO_JD_MATCH);
    }

    #[tokio::test]
    async fn test_demo_mode_ignores_inputs() {
        let engine = ReviewEngine::new(Config::default());
        let a = engine.analyze("", "", "", true, |_| {}).await.unwrap();
        let b = engine
            .analyze("entirely different resume", "some jd", "SRE", true, |_| {})
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_call_with_fallback_passes_through_success() {
        let result = call_with_fallback(
            async { Ok("model output".to_string()) },
            Duration::from_secs(1),
            "fallback",
            "test",
        )
        .await;
        assert_eq!(result, "model output");
    }

    #[tokio::test]
    async fn test_call_with_fallback_substitutes_on_error() {
        let result = call_with_fallback(
            async { Err::<String, _>(ResumeReviewerError::Api("boom".to_string())) },
            Duration::from_secs(1),
            "fallback",
            "test",
        )
        .await;
        assert_eq!(result, "fallback");
    }

    #[tokio::test]
    async fn test_call_with_fallback_substitutes_on_timeout() {
        let result = call_with_fallback(
            async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok("too late".to_string())
            },
            Duration::from_millis(10),
            "fallback",
            "test",
        )
        .await;
        assert_eq!(result, "fallback");
    }

    #[tokio::test]
    async fn test_all_chunk_failures_condense_to_repeated_fallback() {
        let chunks = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let condensed = condense_resume(chunks, Duration::from_secs(1), |_| async {
            Err::<String, _>(ResumeReviewerError::Api("unavailable".to_string()))
        })
        .await;

        let expected = vec![CHUNK_FALLBACK_SUMMARY; 3].join(" ");
        assert_eq!(condensed, expected);
    }

    #[tokio::test]
    async fn test_condense_joins_summaries_in_order() {
        let chunks = vec!["first".to_string(), "second".to_string()];
        let condensed = condense_resume(chunks, Duration::from_secs(1), |chunk| {
            let summary = format!("summary of {}", chunk);
            async move { Ok(summary) }
        })
        .await;
        assert_eq!(condensed, "summary of first summary of second");
    }
}
