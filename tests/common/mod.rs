use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Writes a minimal text PDF with one content stream per page, one `Tj`
/// per line. Mirrors the line-per-text-block layout of the real report
/// closely enough for the extraction pipeline to read it back.
pub fn create_test_pdf(path: &Path, pages: &[Vec<&str>]) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();

    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("TL", vec![16.into()]),
            Operation::new("Td", vec![50.into(), 780.into()]),
        ];

        for (index, line) in lines.iter().enumerate() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            if index + 1 < lines.len() {
                operations.push(Operation::new("T*", vec![]));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| (*id).into()).collect::<Vec<_>>(),
            "Count" => i64::try_from(page_ids.len())?,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    doc.save(path)?;
    Ok(())
}

/// A complete standard statistics page in the report's layout. Titles stay
/// ASCII (no dash) so the record takes the report-wide district fallback;
/// the dashed-title path is covered by unit tests.
pub fn standard_page_lines(group: &'static str, footer: &'static str) -> Vec<&'static str> {
    let mut lines = vec![
        group,
        "(Includes every community supervision county)",
        "FY2020: 1,234 adults started community supervision",
        "Gender",
        "Male 600",
        "Female 634",
    ];
    lines.extend_from_slice(&[
        "Criminal History",
        "Served 400 one term",
        "Served 300 two terms",
        "Served 200 three terms",
        "DOC Facility History",
        "Committed 500 Violent offenses",
        "Committed 300 Property offenses",
        "Committed 200 Drug offenses",
        "Committed 234 another offense type",
        "Age at Start of Follow-up",
        "Were 400 younger than age 30",
        "Were 500 between ages 30 and 44",
        "Were 234 between ages 45 and 54",
        "Were 100 aged 55 or older",
        "Supervision Level",
        "Assigned 300 Low supervision",
        "Assigned 400 Medium supervision",
        "Assigned 300 High supervision",
        "Assigned 134 Elevated supervision",
        "Assigned 100 no assigned level",
        "Multiple Drugs Tested",
        "Tested 100 positive for opioids and cocaine",
        "Tested 600 negative for opioids or cocaine",
        "Tested 200 positive for opioids only",
        "Tested 100 positive for cocaine only",
        "Were 134 not tested for opioids or cocaine",
        "Were 100 never tested for any substance",
        "Meth Test Results",
        "Tested 150 positive for methamphetamine",
        "Tested 1,084 negative for methamphetamine",
        "COMPAS Risk Score",
        "Scored 400 Low on the assessment",
        "Scored 400 Medium on the assessment",
        "Scored 334 High on the assessment",
        "Had 100 no recorded score",
        "Gang Affiliation",
        "Offenders 90 had a known gang affiliation",
        "Offenders 1,144 with no known affiliation",
        "Employment During Follow-up",
    ]);
    lines.push(footer);
    lines
}

/// The one page that renders an actual employment table.
pub fn employment_page_lines() -> Vec<&'static str> {
    vec![
        "Recidivating FY2020 Community Starters: Employment During Follow-up Period",
        "Location  Unemployed  Unemployed %",
        "during  the  follow-up  period",
        "Northern District  120  10.2%  340  28.8%  410  34.7%  310  26.3%",
        "Western District  95  8.8%  300  27.9%  380  35.3%  301  28.0%",
        "Source: DOC  follow-up survey",
        "Page 12",
    ]
}
