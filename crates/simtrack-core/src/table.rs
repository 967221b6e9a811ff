//! Tabular rendering of session history.

use comfy_table::{Cell, Table};

use crate::model::SessionRecord;

/// Column headers, one per record field.
pub const HEADERS: [&str; 6] = [
    "Module",
    "Accuracy (%)",
    "Time (s)",
    "Errors",
    "Complexity",
    "Emotional state",
];

/// Build a table with one row per record, in the order given.
pub fn results_table(records: &[SessionRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(HEADERS.to_vec());

    for record in records {
        table.add_row(vec![
            Cell::new(record.module()),
            Cell::new(record.accuracy()),
            Cell::new(record.duration_secs()),
            Cell::new(record.errors()),
            Cell::new(record.complexity()),
            Cell::new(record.emotional_state()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmotionalState;

    #[test]
    fn rows_follow_record_order() {
        let records = vec![
            SessionRecord::new("Tumor Resection", 91, 512, 1, 5, EmotionalState::Anxious),
            SessionRecord::new("Advanced Suturing", 74, 333, 4, 3, EmotionalState::Relaxed),
        ];
        let rendered = results_table(&records).to_string();

        for header in HEADERS {
            assert!(rendered.contains(header), "missing header {header}");
        }
        let first = rendered.find("Tumor Resection").unwrap();
        let second = rendered.find("Advanced Suturing").unwrap();
        assert!(first < second);
        assert!(rendered.contains("Anxious"));
        assert!(rendered.contains("512"));
    }

    #[test]
    fn empty_table_has_only_headers() {
        let table = results_table(&[]);
        assert_eq!(table.row_iter().count(), 0);
    }
}
