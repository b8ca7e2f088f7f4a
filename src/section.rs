use crate::dimensions::Dimension;
use crate::error::ExtractError;
use crate::model::SectionCounts;

/// Second whitespace token of the line with thousands separators stripped,
/// if it is purely numeric. Anything else (footnotes, wrapped narrative
/// text, short lines) yields `None` and the line is skipped.
pub(crate) fn numeric_second_token(line: &str) -> Option<u64> {
    let token = line.trim().split_whitespace().nth(1)?;
    let digits = token.replace(',', "");
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Consumes one section of a page's line sequence, classifying each numeric
/// data line into the dimension's category slots by ordered first-match
/// substring lookup. Unmatched data lines fall into the trailing catch-all
/// slot when the dimension declares one, and are dropped otherwise.
///
/// Returns one count per slot (zero when never seen) and the cursor advanced
/// one line past the line containing the stop keyword.
///
/// # Errors
///
/// Fails with [`ExtractError::SectionShape`] when more numeric data lines
/// were consumed than the dimension has slots, which means the keyword set
/// or stop keyword does not fit this page's layout.
pub fn extract_section(
    lines: &[String],
    mut cursor: usize,
    dimension: &Dimension,
    page: usize,
) -> Result<(SectionCounts, usize), ExtractError> {
    let slots = dimension.slot_count();
    let mut counts = vec![0_u64; slots];
    let mut data_lines = 0_usize;

    while cursor < lines.len() && !lines[cursor].contains(dimension.stop_keyword) {
        let line = &lines[cursor];
        let Some(count) = numeric_second_token(line) else {
            cursor += 1;
            continue;
        };

        let slot = dimension
            .keywords
            .iter()
            .position(|keyword| line.contains(keyword))
            .or_else(|| dimension.include_other.then_some(slots - 1));
        if let Some(slot) = slot {
            counts[slot] = count;
        }

        data_lines += 1;
        cursor += 1;
    }

    if data_lines > slots {
        return Err(ExtractError::SectionShape {
            page,
            dimension: dimension.label,
            data_lines,
            slots,
        });
    }

    // Step past the stop line itself.
    cursor += 1;

    Ok((counts, cursor))
}
