/// Raw text of one document page, as produced by the PDF reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Zero-based position of the page in the document.
    pub index: usize,
    pub text: String,
}

/// The line view of one page handed to the parsing core. The last line of
/// every page is a running footer and is dropped when building this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub index: usize,
    pub lines: Vec<String>,
}

impl ReportPage {
    #[must_use]
    pub fn from_page_text(page: &PageText) -> Self {
        let mut lines = page
            .text
            .lines()
            .map(str::to_string)
            .collect::<Vec<_>>();
        lines.pop();
        Self {
            index: page.index,
            lines,
        }
    }
}

/// Counts for one statistical dimension, one slot per declared category
/// (catch-all included), in declared order. Unseen categories stay zero.
pub type SectionCounts = Vec<u64>;

/// The flat record extracted from one standard statistics page. `sections`
/// is aligned index-for-index with [`crate::dimensions::DIMENSIONS`], so
/// every record flattens to the same CSV column set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub district: String,
    pub group_type: String,
    pub including_locations: String,
    pub total_count: u64,
    pub sections: Vec<SectionCounts>,
}

/// The employment-during-follow-up table from the one page that renders an
/// actual table instead of line-oriented statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmploymentTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
