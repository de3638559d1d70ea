//! PDF report generation

use crate::error::{Result, ResumeReviewerError};
use crate::processing::chunker::chunk_text;
use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_SIZE_PT: f32 = 14.0;
const HEADING_SIZE_PT: f32 = 12.0;
const BODY_SIZE_PT: f32 = 11.0;

/// Body width in characters at 11pt Helvetica on an A4 page with margins.
const MAX_LINE_CHARS: usize = 95;

/// Rough average Helvetica glyph width as a fraction of the font size, used
/// only for centering the title.
const AVG_GLYPH_WIDTH: f32 = 0.5;
const PT_TO_MM: f32 = 0.352_778;

/// One laid-out report line. Layout is computed up front so it can be tested
/// without parsing PDF bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Title(String),
    Heading(String),
    Body(String),
    Blank,
}

/// Lay out the report: centered title, metadata lines, the review under its
/// heading, and the match analysis under its own heading only when non-empty.
pub fn report_lines(
    review_text: &str,
    job_role: &str,
    jd_match_text: &str,
    generated_at: &str,
) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::Title("AI Resume Review Report".to_string()),
        ReportLine::Blank,
        ReportLine::Body(format!("Generated: {}", generated_at)),
        ReportLine::Body(format!("Target Job Role: {}", job_role)),
        ReportLine::Blank,
        ReportLine::Heading("Resume Review:".to_string()),
    ];
    lines.extend(
        wrap_text(review_text, MAX_LINE_CHARS)
            .into_iter()
            .map(ReportLine::Body),
    );

    if !jd_match_text.is_empty() {
        lines.push(ReportLine::Blank);
        lines.push(ReportLine::Heading(
            "Job Description Match Analysis:".to_string(),
        ));
        lines.extend(
            wrap_text(jd_match_text, MAX_LINE_CHARS)
                .into_iter()
                .map(ReportLine::Body),
        );
    }

    lines
}

/// Word-wrap text to `max_chars` columns, preserving paragraph breaks.
/// Words longer than a full line are hard-split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end();
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = chunk_text(word, max_chars);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            } else if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Builtin Helvetica is WinAnsi-encoded; characters outside Latin-1 would
/// corrupt the text stream, so they degrade to '?' instead.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            c if c.is_control() => ' ',
            c if (c as u32) < 0x100 => c,
            _ => '?',
        })
        .collect()
}

/// Renders review results into a paginated PDF document.
pub struct ReportBuilder {
    bottom_margin_mm: f32,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            bottom_margin_mm: MARGIN_MM,
        }
    }

    /// Render the report and serialize it to PDF bytes. Pages break
    /// automatically when the cursor reaches the bottom margin.
    pub fn render(&self, review_text: &str, job_role: &str, jd_match_text: &str) -> Result<Vec<u8>> {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let lines = report_lines(review_text, job_role, jd_match_text, &generated_at);

        let (doc, first_page, first_layer) = PdfDocument::new(
            "AI Resume Review Report",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ResumeReviewerError::Report(format!("Failed to load font: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ResumeReviewerError::Report(format!("Failed to load font: {}", e)))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;

        for line in &lines {
            if cursor_mm < self.bottom_margin_mm + LINE_HEIGHT_MM {
                let (page, new_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(page).get_layer(new_layer);
                cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
            }

            match line {
                ReportLine::Blank => {}
                ReportLine::Title(text) => {
                    let text = sanitize(text);
                    let width_mm =
                        text.chars().count() as f32 * TITLE_SIZE_PT * AVG_GLYPH_WIDTH * PT_TO_MM;
                    let x = ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM);
                    layer.use_text(text, TITLE_SIZE_PT, Mm(x), Mm(cursor_mm), &bold);
                }
                ReportLine::Heading(text) => {
                    layer.use_text(
                        sanitize(text),
                        HEADING_SIZE_PT,
                        Mm(MARGIN_MM),
                        Mm(cursor_mm),
                        &bold,
                    );
                }
                ReportLine::Body(text) => {
                    if !text.is_empty() {
                        layer.use_text(
                            sanitize(text),
                            BODY_SIZE_PT,
                            Mm(MARGIN_MM),
                            Mm(cursor_mm),
                            &regular,
                        );
                    }
                }
            }
            cursor_mm -= LINE_HEIGHT_MM;
        }

        doc.save_to_bytes()
            .map_err(|e| ResumeReviewerError::Report(format!("Failed to serialize PDF: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(lines: &[ReportLine]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|line| match line {
                ReportLine::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_match_heading_omitted_when_empty() {
        let lines = report_lines("review body", "Data Analyst", "", "2026-01-01 10:00");
        assert_eq!(headings(&lines), vec!["Resume Review:"]);
    }

    #[test]
    fn test_match_heading_included_with_text() {
        let lines = report_lines(
            "review body",
            "Data Analyst",
            "80% match. Strong Python.",
            "2026-01-01 10:00",
        );
        assert_eq!(
            headings(&lines),
            vec!["Resume Review:", "Job Description Match Analysis:"]
        );
        assert!(lines
            .iter()
            .any(|l| matches!(l, ReportLine::Body(text) if text.contains("80% match"))));
    }

    #[test]
    fn test_layout_carries_role_and_review() {
        let lines = report_lines("Needs more SQL.", "Data Analyst", "", "2026-01-01 10:00");
        assert!(lines
            .iter()
            .any(|l| matches!(l, ReportLine::Body(text) if text == "Target Job Role: Data Analyst")));
        assert!(lines
            .iter()
            .any(|l| matches!(l, ReportLine::Body(text) if text.contains("Needs more SQL"))));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "word ".repeat(100);
        for line in wrap_text(&text, 40) {
            assert!(line.chars().count() <= 40);
        }
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        let text = "a".repeat(120);
        let lines = wrap_text(&text, 40);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() <= 40));
    }

    #[test]
    fn test_wrap_text_keeps_paragraph_breaks() {
        let lines = wrap_text("first paragraph\n\nsecond paragraph", 40);
        assert_eq!(
            lines,
            vec![
                "first paragraph".to_string(),
                String::new(),
                "second paragraph".to_string(),
            ]
        );
    }

    #[test]
    fn test_sanitize_replaces_non_latin_chars() {
        assert_eq!(sanitize("score: 90, résumé"), "score: 90, résumé");
        assert_eq!(sanitize("skills: 日本語"), "skills: ???");
        assert_eq!(sanitize("tab\there"), "tab here");
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = ReportBuilder::new()
            .render("A short review.", "Data Analyst", "")
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_paginates_long_reviews() {
        let review = "This line pads the review out to force a page break.\n".repeat(200);
        let bytes = ReportBuilder::new()
            .render(&review, "Data Analyst", "75% match")
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
