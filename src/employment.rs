use crate::model::EmploymentTable;
use crate::table_parse::normalize_rows;
use crate::warning::{ExtractWarning, WarningCode};

/// Fixed column set of the employment CSV; the rendered table's own header
/// rows are artifacts and get replaced by these.
pub const EMPLOYMENT_HEADERS: [&str; 9] = [
    "Community Supervision Location",
    "Unemployed",
    "Unemployed %",
    "Employed <47%",
    "Employed <47% (%)",
    "Employed 47–77%",
    "Employed 47–77% (%)",
    "Employed >77%",
    "Employed >77% (%)",
];

/// Normalizes the employment page's extracted cell rows: the first two rows
/// are header artifacts and the last row is a footer, all three are dropped;
/// remaining rows are padded to the fixed nine-column width.
pub(crate) fn normalize_employment_table(
    rows: &[Vec<String>],
    page: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> EmploymentTable {
    let body = if rows.len() >= 4 {
        normalize_rows(&rows[2..rows.len() - 1], EMPLOYMENT_HEADERS.len())
    } else {
        warnings.push(
            ExtractWarning::new(
                WarningCode::EmploymentTableTooShort,
                format!(
                    "employment table has only {} row(s); expected header rows, data and a footer",
                    rows.len()
                ),
            )
            .with_page(page),
        );
        Vec::new()
    };

    EmploymentTable {
        headers: EMPLOYMENT_HEADERS.iter().map(ToString::to_string).collect(),
        rows: body,
    }
}
