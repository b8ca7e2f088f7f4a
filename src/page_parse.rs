use crate::config::ReportConfig;
use crate::dimensions::DIMENSIONS;
use crate::error::ExtractError;
use crate::model::{PageRecord, ReportPage};
use crate::section::{extract_section, numeric_second_token};

const FOOTNOTE_MARKER: &str = "includes";

/// Title continuation labels that render on their own line below the title.
fn is_title_continuation(line: &str) -> bool {
    line == "Starters" || line == "Supervisees"
}

/// Everything after the last case-insensitive `includes` marker, with the
/// closing parenthesis of the footnote trimmed off.
fn footnote_after_includes(line: &str) -> Option<String> {
    let position = line.to_lowercase().rfind(FOOTNOTE_MARKER)?;
    let mut footnote = line[position + FOOTNOTE_MARKER.len()..].trim();
    if let Some(stripped) = footnote.strip_suffix(')') {
        footnote = stripped.trim();
    }
    Some(footnote.to_string())
}

/// Splits a dashed title into district and group type. Titles without a
/// dash belong to the report-wide aggregate pages and take the fallback
/// district label instead.
fn split_district_group(title: &str) -> Option<(String, String)> {
    let mut parts = title.split(['–', '—']);
    let district = parts.next()?.trim().to_string();
    let group_type = parts.next()?.trim().to_string();
    Some((district, group_type))
}

/// Titles and footnotes never carry a digit in their third character; the
/// first line that does is the first genuine data row.
fn is_data_row(line: &str) -> bool {
    line.chars().nth(2).is_some_and(|ch| ch.is_ascii_digit())
}

/// Parses one standard statistics page into a flat record: identity fields
/// from the title block, the total count from the first data row, then the
/// nine dimension sections in their fixed order.
///
/// # Errors
///
/// Fails with [`ExtractError::PageLayout`] when the page is missing the
/// expected title block, total row, or `Gender` anchor, and propagates
/// [`ExtractError::SectionShape`] from the section walk.
pub fn parse_standard_page(
    page: &ReportPage,
    config: &ReportConfig,
) -> Result<PageRecord, ExtractError> {
    let lines = &page.lines;

    let mut title = lines
        .first()
        .ok_or(ExtractError::PageLayout {
            page: page.index,
            context: "read the page title",
        })?
        .trim()
        .to_string();

    let second_line = lines.get(1).map_or("", |line| line.trim());
    if is_title_continuation(second_line) {
        title.push(' ');
        title.push_str(second_line);
    }

    let including_locations = footnote_after_includes(second_line)
        .or_else(|| {
            lines
                .get(2)
                .and_then(|line| footnote_after_includes(line.trim()))
        })
        .unwrap_or_default();

    let (district, group_type) = split_district_group(&title).unwrap_or_else(|| {
        (
            config.fallback_district.clone(),
            title
                .replace(&config.group_type_infix, " ")
                .trim()
                .to_string(),
        )
    });

    let mut cursor = 1;
    while !lines.get(cursor).is_some_and(|line| is_data_row(line)) {
        if cursor >= lines.len() {
            return Err(ExtractError::PageLayout {
                page: page.index,
                context: "locate the first data row",
            });
        }
        cursor += 1;
    }

    let total_count =
        numeric_second_token(&lines[cursor]).ok_or(ExtractError::PageLayout {
            page: page.index,
            context: "parse the total count",
        })?;

    while !lines.get(cursor).is_some_and(|line| line.contains("Gender")) {
        if cursor >= lines.len() {
            return Err(ExtractError::PageLayout {
                page: page.index,
                context: "find the Gender section header",
            });
        }
        cursor += 1;
    }
    cursor += 1;

    let mut sections = Vec::with_capacity(DIMENSIONS.len());
    for dimension in &DIMENSIONS {
        let (counts, next_cursor) = extract_section(lines, cursor, dimension, page.index)?;
        sections.push(counts);
        cursor = next_cursor;
    }

    Ok(PageRecord {
        district,
        group_type,
        including_locations,
        total_count,
        sections,
    })
}
