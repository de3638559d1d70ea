//! Text extraction from various file formats

use crate::error::{Result, ResumeReviewerError};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeReviewerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeReviewerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeReviewerError::Io)?;

        let doc = docx_rs::read_docx(&bytes).map_err(|e| {
            ResumeReviewerError::DocxExtraction(format!(
                "Failed to read DOCX '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut paragraphs = Vec::new();
        for child in doc.document.children.iter() {
            collect_docx_text(child, &mut paragraphs);
        }
        Ok(paragraphs.join("\n"))
    }
}

/// Collect paragraph text in document order. Table cells are flattened into
/// paragraphs too, so resumes laid out as tables still extract.
fn collect_docx_text(child: &docx_rs::DocumentChild, out: &mut Vec<String>) {
    match child {
        docx_rs::DocumentChild::Paragraph(p) => {
            out.push(paragraph_text(p));
        }
        docx_rs::DocumentChild::Table(table) => {
            for row in &table.rows {
                let docx_rs::TableChild::TableRow(tr) = row;
                for cell in &tr.cells {
                    let docx_rs::TableRowChild::TableCell(tc) = cell;
                    for tc_child in &tc.children {
                        if let docx_rs::TableCellContent::Paragraph(p) = tc_child {
                            out.push(paragraph_text(p));
                        }
                    }
                }
            }
        }
        _ => {}
    }
}

fn paragraph_text(p: &docx_rs::Paragraph) -> String {
    let mut line = String::new();
    for run_child in &p.children {
        if let docx_rs::ParagraphChild::Run(run) = run_child {
            for rc in &run.children {
                if let docx_rs::RunChild::Text(t) = rc {
                    line.push_str(&t.text);
                }
            }
        }
    }
    line
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeReviewerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeReviewerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = self.html_to_text(&html_output);
        Ok(text)
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}
