//! Sequential pack numbering
//!
//! Gives every named row a `P{n}:` prefix. Existing prefixes (including
//! stacked ones left by repeated runs) are stripped first, so renumbering
//! is idempotent.

use crate::core::category::strip_pack_prefix;
use crate::store::Sheet;

/// Result of a numbering run
pub struct NumberResult {
    pub numbered: usize,
}

/// Renumber every non-empty category cell as `P1:`, `P2:`, …
pub fn renumber(sheet: &mut Sheet) -> NumberResult {
    let mut pack_number = 1usize;

    for row in sheet.rows_mut() {
        if row.category.trim().is_empty() {
            continue;
        }

        let clean = strip_pack_prefix(&row.category);
        row.category = format!("P{pack_number}: {clean}");
        pack_number += 1;
    }

    NumberResult {
        numbered: pack_number - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Row;

    fn sheet() -> Sheet {
        Sheet::from_rows(vec![
            Row::new("1A. SHORT A", "cat pattern", "cat, bat"),
            Row::new("", "", ""),
            Row::new("P7: 1B. SHORT E", "bed pattern", "bed, red"),
        ])
    }

    #[test]
    fn numbers_named_rows_sequentially() {
        let mut sheet = sheet();
        let result = renumber(&mut sheet);

        assert_eq!(result.numbered, 2);
        assert_eq!(sheet.rows()[0].category, "P1: 1A. SHORT A");
        assert_eq!(sheet.rows()[2].category, "P2: 1B. SHORT E");
    }

    #[test]
    fn skips_unnamed_rows_without_consuming_numbers() {
        let mut sheet = sheet();
        renumber(&mut sheet);
        assert_eq!(sheet.rows()[1].category, "");
    }

    #[test]
    fn renumbering_is_idempotent() {
        let mut sheet = sheet();
        renumber(&mut sheet);
        let first: Vec<String> = sheet.rows().iter().map(|r| r.category.clone()).collect();

        renumber(&mut sheet);
        let second: Vec<String> = sheet.rows().iter().map(|r| r.category.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn strips_stacked_prefixes() {
        let mut sheet = Sheet::from_rows(vec![Row::new("P3: P9: X", "d", "a, b")]);
        renumber(&mut sheet);
        assert_eq!(sheet.rows()[0].category, "P1: X");
    }
}
