//! Prompt templates for resume review and job description matching

/// Prompt for summarizing a single resume chunk.
pub fn summarize_prompt(chunk: &str) -> String {
    format!("Summarize this resume chunk:\n\n{}", chunk)
}

/// Full review prompt. The "Missing Keywords:" and "Improvements:" labels are
/// parsed downstream by the highlighter, so they must not drift.
pub fn review_prompt(resume_summary: &str, job_role: &str) -> String {
    format!(
        "You are an ATS (Applicant Tracking System) and career advisor.\n\
         Analyze this resume for a **{job_role}** role.\n\n\
         Resume:\n\
         {resume_summary}\n\n\
         Provide, in order:\n\
         1. ATS score (out of 100)\n\
         2. A section labelled \"Missing Keywords:\" listing the keywords/tools/skills missing for {job_role}, one per line\n\
         3. A section labelled \"Improvements:\" with 5 bullet-point actionable improvements\n\
         4. A 2-line summary of your review\n"
    )
}

/// Job description match prompt.
pub fn match_prompt(resume_summary: &str, jd_text: &str) -> String {
    format!(
        "Compare this resume with the job description and provide:\n\
         1. JD match score (%) out of 100\n\
         2. Key strengths\n\
         3. Gaps that must be addressed\n\
         Resume:\n\
         {resume_summary}\n\n\
         Job Description:\n\
         {jd_text}\n"
    )
}
