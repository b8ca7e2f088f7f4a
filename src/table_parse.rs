/// Splits a rendered table line into cells on tab characters and runs of
/// two or more spaces. Single spaces stay inside a cell so that location
/// names like "Northern District" survive intact.
pub(crate) fn split_line_into_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut whitespace_run = 0_usize;

    for ch in trimmed.chars() {
        if ch == '\t' {
            if !current.trim().is_empty() {
                cells.push(current.trim().to_string());
                current.clear();
            }
            whitespace_run = 0;
            continue;
        }

        if ch.is_whitespace() {
            whitespace_run += 1;
            if whitespace_run >= 2 {
                if !current.trim().is_empty() {
                    cells.push(current.trim().to_string());
                    current.clear();
                }
                continue;
            }
            current.push(' ');
            continue;
        }

        whitespace_run = 0;
        current.push(ch);
    }

    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }

    cells
}

/// Right-pads every row to `width` cells so ragged extraction output still
/// lines up under a fixed header.
pub(crate) fn normalize_rows(rows: &[Vec<String>], width: usize) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            let mut out = row.clone();
            out.resize(width, String::new());
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_rows, split_line_into_cells};

    #[test]
    fn splits_double_space_separated_cells() {
        let cells = split_line_into_cells("Northern District  120  10.2%  340");
        assert_eq!(cells, vec!["Northern District", "120", "10.2%", "340"]);
    }

    #[test]
    fn splits_tab_separated_cells() {
        let cells = split_line_into_cells("A\tB\tC");
        assert_eq!(cells, vec!["A", "B", "C"]);
    }

    #[test]
    fn single_spaces_stay_inside_a_cell() {
        let cells = split_line_into_cells("Community Supervision Location  12");
        assert_eq!(cells, vec!["Community Supervision Location", "12"]);
    }

    #[test]
    fn normalizes_ragged_rows() {
        let rows = vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string()],
        ];
        let normalized = normalize_rows(&rows, 3);
        assert_eq!(normalized[0], vec!["a", "", ""]);
        assert_eq!(normalized[1], vec!["b", "c", ""]);
    }
}
