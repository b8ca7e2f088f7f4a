use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to load PDF: {0}")]
    PdfLoad(#[from] lopdf::Error),

    #[error(
        "page {page}: {dimension} section consumed {data_lines} data line(s) \
         but has only {slots} category slot(s); keyword set or stop keyword \
         does not match this page's layout"
    )]
    SectionShape {
        page: usize,
        dimension: &'static str,
        data_lines: usize,
        slots: usize,
    },

    #[error("page {page}: could not {context}")]
    PageLayout { page: usize, context: &'static str },

    #[error("no pages with extractable text in the configured range")]
    NoPagesExtracted,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
