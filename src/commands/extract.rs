//! Extract the bank into the JSON pack array the app consumes

use crate::core::category::strip_pack_prefix;
use crate::core::word::parse_words;
use crate::core::Pack;
use crate::store::Sheet;

/// Flatten bank rows into sequentially numbered pack records
///
/// Ids restart from 1 on every extraction; any stale `P{n}:` prefixes in
/// the bank are stripped so titles carry exactly one fresh number. With a
/// `limit`, only the first `limit` packs are returned.
#[must_use]
pub fn extract_packs(sheet: &Sheet, limit: Option<usize>) -> Vec<Pack> {
    let mut packs = Vec::new();

    for row in sheet.data_rows() {
        if limit.is_some_and(|limit| packs.len() >= limit) {
            break;
        }

        let words = parse_words(&row.words);
        let clean = strip_pack_prefix(&row.category);
        let id = packs.len() as u32 + 1;

        let description = if row.description.trim().is_empty() {
            format!("{} words", words.len())
        } else {
            row.description.clone()
        };

        packs.push(Pack {
            id,
            title: format!("P{id}: {clean}"),
            description,
            category: Some(clean),
            sub_pack: None,
            sub_pack_description: None,
            words: words.iter().map(|word| word.text().to_string()).collect(),
        });
    }

    packs
}

/// Total words across a pack array
#[must_use]
pub fn total_words(packs: &[Pack]) -> usize {
    packs.iter().map(Pack::word_count).sum()
}
