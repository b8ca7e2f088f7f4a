//! Extracts the per-district statistics of the FY2020 Community Recidivism
//! Report into two flat CSV files: a one-row-per-page summary and the
//! employment-during-follow-up table from the single page that renders an
//! actual table.

mod config;
mod csv_out;
mod dimensions;
mod employment;
mod error;
mod model;
mod page_parse;
mod pdf_reader;
mod section;
mod table_parse;
mod warning;

use std::path::Path;

use tracing::{debug, warn};

use crate::csv_out::{write_employment_csv, write_summary_csv};
use crate::table_parse::split_line_into_cells;

pub use config::{PageFailureMode, ReportConfig};
pub use csv_out::{employment_csv_string, summary_csv_string};
pub use dimensions::{DIMENSIONS, Dimension, IDENTITY_FIELDS, summary_csv_headers};
pub use employment::EMPLOYMENT_HEADERS;
pub use error::ExtractError;
pub use model::{EmploymentTable, PageRecord, PageText, ReportPage, SectionCounts};
pub use page_parse::parse_standard_page;
pub use section::extract_section;
pub use warning::{ExtractWarning, WarningCode};

/// Everything extracted from one document, before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub records: Vec<PageRecord>,
    pub employment: Option<EmploymentTable>,
    pub warnings: Vec<ExtractWarning>,
}

/// Run summary returned to the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub record_count: usize,
    pub employment_row_count: usize,
    pub warnings: Vec<ExtractWarning>,
}

/// Builds all page records and the employment table from the document's
/// page texts, in document order.
///
/// Pages outside the configured range are ignored; pages with no
/// extractable text and the known image-table pages are skipped with a
/// warning. A page whose first line matches the employment title is routed
/// to table normalization instead of record parsing.
///
/// # Errors
///
/// Propagates per-page parse errors when the configured failure mode is
/// [`PageFailureMode::Halt`]; under [`PageFailureMode::SkipAndWarn`] the
/// failed page becomes a warning instead.
pub fn extract_report_from_pages(
    pages: &[PageText],
    config: &ReportConfig,
) -> Result<ReportData, ExtractError> {
    config.validate()?;

    let mut records = Vec::new();
    let mut employment = None;
    let mut warnings = Vec::new();

    for page in pages {
        if page.index < config.page_start || page.index > config.page_end {
            continue;
        }

        if page.text.trim().is_empty() {
            warnings.push(
                ExtractWarning::new(WarningCode::PageNotText, "page has no extractable text")
                    .with_page(page.index),
            );
            continue;
        }

        if config.image_table_pages.contains(&page.index) {
            warnings.push(
                ExtractWarning::new(
                    WarningCode::ImageTablePage,
                    "table is rendered as an image; its data cannot be recovered from text",
                )
                .with_page(page.index),
            );
            continue;
        }

        let report_page = ReportPage::from_page_text(page);
        let Some(first_line) = report_page.lines.first() else {
            warnings.push(
                ExtractWarning::new(WarningCode::PageNotText, "page has no usable lines")
                    .with_page(page.index),
            );
            continue;
        };

        if first_line.trim() == config.employment_title {
            let rows = report_page
                .lines
                .iter()
                .map(|line| split_line_into_cells(line))
                .filter(|cells| cells.len() >= 2)
                .collect::<Vec<_>>();
            let table = employment::normalize_employment_table(&rows, page.index, &mut warnings);
            debug!(page = page.index, rows = table.rows.len(), "employment table extracted");
            employment = Some(table);
            continue;
        }

        match page_parse::parse_standard_page(&report_page, config) {
            Ok(record) => {
                debug!(
                    page = page.index,
                    district = %record.district,
                    group_type = %record.group_type,
                    "page record extracted"
                );
                records.push(record);
            }
            Err(error) => match config.failure_mode {
                PageFailureMode::Halt => return Err(error),
                PageFailureMode::SkipAndWarn => {
                    warn!(page = page.index, %error, "skipping malformed page");
                    warnings.push(
                        ExtractWarning::new(WarningCode::PageFailed, error.to_string())
                            .with_page(page.index),
                    );
                }
            },
        }
    }

    if records.is_empty() {
        warnings.push(ExtractWarning::new(
            WarningCode::NoRecordsExtracted,
            "no standard statistics pages were found in the configured range",
        ));
    }

    Ok(ReportData {
        records,
        employment,
        warnings,
    })
}

/// Full pipeline: read the PDF, build the records, write both CSV files to
/// the configured paths.
///
/// # Errors
///
/// Fails on PDF load problems, page parse errors under
/// [`PageFailureMode::Halt`], and CSV write errors.
pub fn extract_report_to_csv(
    input_pdf: &Path,
    config: &ReportConfig,
) -> Result<ExtractionReport, ExtractError> {
    let pages = pdf_reader::read_pdf_pages(input_pdf)?;
    let data = extract_report_from_pages(&pages, config)?;

    if let Some(parent) = config.summary_csv_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    write_summary_csv(&config.summary_csv_path, &data.records)?;

    let employment_row_count = if let Some(table) = &data.employment {
        if let Some(parent) = config.employment_csv_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        write_employment_csv(&config.employment_csv_path, table)?;
        table.rows.len()
    } else {
        0
    };

    Ok(ExtractionReport {
        record_count: data.records.len(),
        employment_row_count,
        warnings: data.warnings,
    })
}
