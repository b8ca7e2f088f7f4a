use std::collections::BTreeSet;
use std::path::PathBuf;

/// What to do when a standard page fails its shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFailureMode {
    /// Abort the whole run on the first malformed page. Matches the
    /// historical behavior of the report scraper.
    #[default]
    Halt,
    /// Record a warning for the failed page and keep going with the rest.
    SkipAndWarn,
}

/// Run configuration. The defaults reproduce the FY2020 Community
/// Recidivism Report layout: page indices are zero-based positions in the
/// document, and the two image-table pages carry data that text extraction
/// cannot recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub page_start: usize,
    pub page_end: usize,
    pub image_table_pages: BTreeSet<usize>,
    pub employment_title: String,
    pub fallback_district: String,
    pub group_type_infix: String,
    pub summary_csv_path: PathBuf,
    pub employment_csv_path: PathBuf,
    pub failure_mode: PageFailureMode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_start: 9,
            page_end: 103,
            image_table_pages: BTreeSet::from([11, 12]),
            employment_title:
                "Recidivating FY2020 Community Starters: Employment During Follow-up Period"
                    .to_string(),
            fallback_district: "FY2020".to_string(),
            group_type_infix: " FY2020 ".to_string(),
            summary_csv_path: PathBuf::from(
                "data/recidivating_fy2020_community_starters_summary.csv",
            ),
            employment_csv_path: PathBuf::from(
                "data/recidivating_fy2020_community_starters_employment.csv",
            ),
            failure_mode: PageFailureMode::Halt,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), crate::ExtractError> {
        if self.page_end < self.page_start {
            return Err(crate::ExtractError::InvalidConfig(format!(
                "page_end ({}) is smaller than page_start ({})",
                self.page_end, self.page_start
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PageFailureMode, ReportConfig};

    #[test]
    fn default_config_matches_fy2020_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.page_start, 9);
        assert_eq!(config.page_end, 103);
        assert!(config.image_table_pages.contains(&11));
        assert!(config.image_table_pages.contains(&12));
        assert_eq!(config.failure_mode, PageFailureMode::Halt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_page_range() {
        let config = ReportConfig {
            page_start: 10,
            page_end: 5,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
