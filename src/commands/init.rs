//! Seed the bank from the embedded starter rows

use crate::store::{Row, SEED_ROWS, Sheet};

/// Result of seeding the bank
pub struct InitResult {
    pub sections: usize,
}

/// Build a fresh sheet from the embedded seed rows
#[must_use]
pub fn seed_sheet() -> (Sheet, InitResult) {
    let rows: Vec<Row> = SEED_ROWS
        .iter()
        .map(|&(category, description, words)| Row::new(category, description, words))
        .collect();

    let result = InitResult {
        sections: rows.len(),
    };
    (Sheet::from_rows(rows), result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_sheet_carries_every_embedded_row() {
        let (sheet, result) = seed_sheet();

        assert_eq!(sheet.len(), SEED_ROWS.len());
        assert_eq!(result.sections, SEED_ROWS.len());
        assert_eq!(sheet.data_rows().count(), SEED_ROWS.len());
    }

    #[test]
    fn seed_sheet_preserves_order() {
        let (sheet, _) = seed_sheet();
        assert_eq!(sheet.rows()[0].category, SEED_ROWS[0].0);
        assert_eq!(
            sheet.rows()[sheet.len() - 1].category,
            SEED_ROWS[SEED_ROWS.len() - 1].0
        );
    }
}
