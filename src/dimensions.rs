//! Static description of the nine statistical dimensions on a standard
//! report page, in the order they appear in the rendered body. Adding or
//! adjusting a dimension is a data change here, not a code change in the
//! section walker.

/// One statistical dimension: the ordered category keywords matched against
/// data lines, the header text of the next section (which terminates this
/// one), and the output column names for each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    /// Short name used in diagnostics.
    pub label: &'static str,
    /// Ordered, first-match-wins substring keywords.
    pub keywords: &'static [&'static str],
    /// A line containing this substring ends the section.
    pub stop_keyword: &'static str,
    /// Whether a trailing catch-all slot absorbs unmatched data lines.
    pub include_other: bool,
    /// Summary CSV column name per slot, catch-all last.
    pub fields: &'static [&'static str],
}

impl Dimension {
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.keywords.len() + self.include_other as usize
    }
}

/// Identity columns preceding the count columns in the summary CSV.
pub const IDENTITY_FIELDS: [&str; 4] =
    ["District", "Group Type", "Including Locations", "Total Count"];

// Column spellings are preserved from the published dataset.
pub const DIMENSIONS: [Dimension; 9] = [
    Dimension {
        label: "gender",
        keywords: &["Male", "Female"],
        stop_keyword: "Criminal History",
        include_other: true,
        fields: &["Male Count", "Female Count", "Other Gender Count"],
    },
    Dimension {
        label: "prior terms",
        keywords: &["one term", "two terms", "three terms"],
        stop_keyword: "DOC",
        include_other: true,
        fields: &[
            "One Term Count",
            "Two Term Count",
            "Three Term Count",
            "Zero Term Count",
        ],
    },
    Dimension {
        label: "offense type",
        keywords: &["Violent", "Property", "Drug"],
        stop_keyword: "Age",
        include_other: true,
        fields: &[
            "Violent Offense Count",
            "Property Offense Count",
            "Drug Offense Count",
            "Other Offense Count",
        ],
    },
    Dimension {
        label: "age band",
        keywords: &[
            "younger than age 30",
            "ages 30 and 44",
            "ages 45 and 54",
        ],
        stop_keyword: "Supervision",
        include_other: true,
        fields: &[
            "Age Below 30 Count",
            "Age 30-44 Count",
            "Age 45-54 Count",
            "Age 55 and Above Count",
        ],
    },
    Dimension {
        label: "supervision level",
        keywords: &["Low", "Medium", "High", "Elevated"],
        stop_keyword: "Multiple Drugs",
        include_other: true,
        fields: &[
            "Low Supervision Count",
            "Medium Supervision Count",
            "High Supervision Count",
            "Elevated Supervision Count",
            "No Supervision Count",
        ],
    },
    Dimension {
        label: "drug panel",
        keywords: &[
            "opioids and cocaine",
            "negative for opioids or cocaine",
            "opioids only",
            "cocaine only",
            "not tested for opioids or cocaine",
        ],
        stop_keyword: "Meth",
        include_other: true,
        fields: &[
            "Opiod and Cocaine Count",
            "Negative for Opiod or Cocaine Count",
            "Opiod Only Count",
            "Cocaine Only Count",
            "No Opiod Cocaine Test Count",
            "No Drug Test Count",
        ],
    },
    Dimension {
        label: "meth panel",
        keywords: &["positive"],
        stop_keyword: "COMPAS",
        include_other: true,
        fields: &["Positive Meth Count", "Negative Meth Count"],
    },
    Dimension {
        label: "COMPAS risk",
        keywords: &["Low", "Medium", "High"],
        stop_keyword: "Gang",
        include_other: true,
        fields: &[
            "Low COMPAS Count",
            "Medium COMPAS Count",
            "High COMPAS Count",
            "No COMPAS Count",
        ],
    },
    Dimension {
        label: "gang affiliation",
        keywords: &["had a known gang affiliation"],
        stop_keyword: "Employment",
        include_other: true,
        fields: &["Gang Affiliation Count", "No Gang Affiliation Count"],
    },
];

/// Flat header row of the summary CSV: identity columns followed by every
/// dimension's count columns in declared order.
#[must_use]
pub fn summary_csv_headers() -> Vec<&'static str> {
    let mut headers = IDENTITY_FIELDS.to_vec();
    for dimension in &DIMENSIONS {
        headers.extend_from_slice(dimension.fields);
    }
    headers
}
