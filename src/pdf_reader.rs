use std::collections::BTreeMap;
use std::path::Path;

use lopdf::Document;
use lopdf::Object;
use lopdf::content::Content;

use crate::error::ExtractError;
use crate::model::PageText;
use crate::section::numeric_second_token;

/// pdf-extract emits the whole document with form-feed page breaks.
fn split_text_into_pages(raw_text: &str) -> Vec<String> {
    let mut pages = raw_text
        .split('\u{000C}')
        .map(str::to_string)
        .collect::<Vec<_>>();
    if pages.last().is_some_and(String::is_empty) {
        pages.pop();
    }
    pages
}

/// Ranks extraction candidates by how much they look like a statistics
/// page: count-bearing lines (numeric second token) dominate, ordinary
/// non-empty lines break ties.
fn extraction_quality_score(text: &str) -> i64 {
    if text.trim().is_empty() {
        return i64::MIN / 4;
    }

    let mut non_empty_lines = 0_i64;
    let mut statistic_lines = 0_i64;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        non_empty_lines += 1;
        if numeric_second_token(line).is_some() {
            statistic_lines += 1;
        }
    }

    statistic_lines * 50 + non_empty_lines
}

fn choose_best_text(candidates: &[String]) -> String {
    candidates
        .iter()
        .max_by_key(|text| extraction_quality_score(text))
        .cloned()
        .unwrap_or_default()
}

/// Walks the page's content stream directly, starting a fresh line on each
/// text-positioning operator. This keeps the report's one-statistic-per-line
/// layout intact where whole-document extraction merges lines.
fn extract_text_from_page_content(document: &Document, page_id: lopdf::ObjectId) -> Option<String> {
    fn collect_text(text: &mut String, encoding: Option<&str>, operands: &[Object]) {
        for operand in operands {
            match operand {
                Object::String(bytes, _) => {
                    text.push_str(&Document::decode_text(encoding, bytes));
                }
                Object::Array(items) => {
                    collect_text(text, encoding, items);
                    text.push(' ');
                }
                Object::Integer(value) => {
                    if *value < -100 {
                        text.push(' ');
                    }
                }
                _ => {}
            }
        }
    }

    let raw_content = document.get_page_content(page_id).ok()?;
    let content = Content::decode(&raw_content).ok()?;
    let encodings = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect::<BTreeMap<Vec<u8>, &str>>();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_encoding = None;
    for operation in content.operations {
        match operation.operator.as_str() {
            "Tf" => {
                if let Some(font_name) = operation
                    .operands
                    .first()
                    .and_then(|operand| operand.as_name().ok())
                {
                    current_encoding = encodings.get(font_name).copied();
                }
            }
            "Tj" | "TJ" | "'" | "\"" => {
                collect_text(&mut current, current_encoding, &operation.operands);
            }
            "T*" | "Td" | "TD" | "ET" => {
                if !current.trim().is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
            _ => {}
        }
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Reads every page of the document as text, choosing per page the best of
/// up to three extraction candidates. Pages are returned in document order
/// with zero-based indices; range filtering happens in the caller.
pub(crate) fn read_pdf_pages(input_pdf: &Path) -> Result<Vec<PageText>, ExtractError> {
    let document = Document::load(input_pdf)?;
    let pages_map = document.get_pages();

    let pdf_extract_pages = pdf_extract::extract_text(input_pdf)
        .ok()
        .map(|text| split_text_into_pages(&text))
        .filter(|pages| pages.len() == pages_map.len());

    let mut pages = Vec::new();
    for (index, (page_no, page_id)) in pages_map.iter().enumerate() {
        let mut candidates = Vec::new();
        if let Some(text) = pdf_extract_pages
            .as_ref()
            .and_then(|extracted| extracted.get(index).cloned())
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }
        if let Some(text) = extract_text_from_page_content(&document, *page_id) {
            candidates.push(text);
        }
        if let Some(text) = document
            .extract_text(&[*page_no])
            .ok()
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }

        pages.push(PageText {
            index,
            text: choose_best_text(&candidates),
        });
    }

    if pages.is_empty() {
        return Err(ExtractError::NoPagesExtracted);
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::{choose_best_text, extraction_quality_score, split_text_into_pages};

    #[test]
    fn splits_form_feed_delimited_pages() {
        let pages = split_text_into_pages("p1\u{000C}p2\u{000C}");
        assert_eq!(pages, vec!["p1", "p2"]);
    }

    #[test]
    fn prefers_candidate_with_statistic_lines() {
        let merged = "Male 600 Female 634 all on one line".to_string();
        let line_oriented = "Male 600\nFemale 634".to_string();
        let best = choose_best_text(&[merged.clone(), line_oriented.clone()]);
        assert_eq!(best, line_oriented);
    }

    #[test]
    fn empty_text_scores_lowest() {
        assert!(extraction_quality_score("  \n ") < extraction_quality_score("anything at all"));
    }
}
