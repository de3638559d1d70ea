//! Missing-keyword extraction from review text and emphasis markup

use log::debug;
use regex::Regex;

/// Section label emitted by the review prompt. The highlighter and the prompt
/// template must agree on this text.
const KEYWORDS_LABEL: &str = "Missing Keywords:";

/// The keywords section ends at the next section label, or end of text.
const SECTION_END_LABEL: &str = "Improvements";

/// Find `needle` in `haystack[from..]`, ignoring ASCII case. Returns the byte
/// offset of the match start. The labels are pure ASCII, so a byte-level match
/// always lands on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() || from > h.len() - n.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Extract the text between the "Missing Keywords:" label and the next section
/// label. A missing label means no keywords, never an error.
fn missing_keywords_section(review_text: &str) -> Option<&str> {
    let label_start = find_ignore_ascii_case(review_text, KEYWORDS_LABEL, 0)?;
    let section_start = label_start + KEYWORDS_LABEL.len();
    let section_end = find_ignore_ascii_case(review_text, SECTION_END_LABEL, section_start)
        .unwrap_or(review_text.len());
    Some(&review_text[section_start..section_end])
}

/// Wrap every case-insensitive whole-word occurrence of the review's missing
/// keywords in `**` emphasis markup, preserving the original casing in the
/// resume text. Keywords are applied in the order they appear in the review,
/// each against the progressively annotated text.
pub fn highlight_missing_keywords(resume_text: &str, review_text: &str) -> String {
    let section = match missing_keywords_section(review_text) {
        Some(section) => section,
        None => return resume_text.to_string(),
    };

    let keywords: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    debug!("Highlighting {} missing keywords", keywords.len());

    let mut highlighted = resume_text.to_string();
    for keyword in keywords {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                debug!("Skipping unhighlightable keyword '{}': {}", keyword, e);
                continue;
            }
        };
        highlighted = re.replace_all(&highlighted, "**${0}**").to_string();
    }
    highlighted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_label_returns_resume_unchanged() {
        let resume = "Python developer with SQL experience";
        let review = "Solid resume. Consider adding cloud skills.";
        assert_eq!(highlight_missing_keywords(resume, review), resume);
    }

    #[test]
    fn test_wraps_case_insensitive_whole_words() {
        let resume = "Wrote sql queries and automated reports.";
        let review = "Missing Keywords:\nSQL\nAWS\nImprovements: add certifications";
        let highlighted = highlight_missing_keywords(resume, review);
        assert_eq!(highlighted, "Wrote **sql** queries and automated reports.");
    }

    #[test]
    fn test_original_casing_is_preserved() {
        let resume = "Tableau dashboards, more TABLEAU work";
        let review = "Missing Keywords:\ntableau\nImprovements: none";
        let highlighted = highlight_missing_keywords(resume, review);
        assert_eq!(highlighted, "**Tableau** dashboards, more **TABLEAU** work");
    }

    #[test]
    fn test_whole_word_boundary_excludes_substrings() {
        let resume = "Administered MySQL databases";
        let review = "Missing Keywords:\nSQL\nImprovements: none";
        // "SQL" inside "MySQL" is not a whole-word occurrence
        assert_eq!(highlight_missing_keywords(resume, review), resume);
    }

    #[test]
    fn test_multiple_keywords_applied_in_order() {
        let resume = "Knows aws and sql.";
        let review = "Missing Keywords:\nSQL\nAWS\nImprovements: none";
        let highlighted = highlight_missing_keywords(resume, review);
        assert_eq!(highlighted, "Knows **aws** and **sql**.");
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        let resume = "No sql here? Actually sql is here.";
        let review = "MISSING KEYWORDS:\nsql\nimprovements follow";
        let highlighted = highlight_missing_keywords(resume, review);
        assert!(highlighted.contains("**sql**"));
    }

    #[test]
    fn test_section_without_end_label_runs_to_end_of_text() {
        let resume = "Deployed on AWS.";
        let review = "Missing Keywords:\nAWS";
        let highlighted = highlight_missing_keywords(resume, review);
        assert_eq!(highlighted, "Deployed on **AWS**.");
    }

    #[test]
    fn test_blank_section_is_a_noop() {
        let resume = "Plain resume text";
        let review = "Missing Keywords:\n\n\nImprovements: none";
        assert_eq!(highlight_missing_keywords(resume, review), resume);
    }
}
