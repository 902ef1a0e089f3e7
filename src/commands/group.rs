//! Regroup extracted packs into ordered, named sub-packs
//!
//! The sub-pack table encodes the teaching progression: easiest material
//! first, statutory spelling lists last. Packs are matched by base category
//! (title decorations like `" - Pack 2"` ignored), renumbered in sub-pack
//! order, and annotated for the app's sub-pack navigation.

use crate::core::category::pack_base_name;
use crate::core::Pack;

/// One ordered sub-pack: display name, blurb, member base categories
pub struct SubPack {
    pub name: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
}

/// The teaching order, easiest to hardest
pub const SUB_PACK_ORDER: &[SubPack] = &[
    SubPack {
        name: "Year 1 High Frequency Words",
        description: "Most common words - great starting point!",
        categories: &["0A. YEAR 1 HIGH FREQUENCY"],
    },
    SubPack {
        name: "Short Vowels",
        description: "Basic phonics - short a, e, i, o, u sounds",
        categories: &[
            "1. SHORT VOWEL A",
            "1. SHORT VOWEL E",
            "1. SHORT VOWEL I",
            "1. SHORT VOWEL O",
            "1. SHORT VOWEL U",
        ],
    },
    SubPack {
        name: "Consonant Blends",
        description: "Two or more consonants together",
        categories: &[
            "2. L-BLENDS",
            "2. R-BLENDS",
            "2. S-BLENDS",
            "2. 3-LETTER BLENDS",
        ],
    },
    SubPack {
        name: "Digraphs",
        description: "Two letters making one sound",
        categories: &[
            "3. DIGRAPH CH",
            "3. DIGRAPH SH",
            "3. DIGRAPH TH (unvoiced)",
            "3. DIGRAPH WH",
            "3. DIGRAPH PH",
        ],
    },
    SubPack {
        name: "Special Endings",
        description: "NG, NK, CK, TCH, DGE endings",
        categories: &["6A. NG/NK ENDINGS", "7. CK/TCH/DGE"],
    },
    SubPack {
        name: "Magic E & Long Vowels",
        description: "Long vowel sounds with magic e",
        categories: &["7. MAGIC E / SPLIT DIGRAPHS"],
    },
    SubPack {
        name: "Long Vowel Teams",
        description: "Two vowels making long sounds",
        categories: &[
            "4. AI/AY (long A)",
            "4. EE/EA (long E)",
            "4. IGH/IE/Y (long I)",
            "4. OA/OW (long O)",
            "4. UE/EW (long U)",
        ],
    },
    SubPack {
        name: "R-Controlled Vowels",
        description: "Vowels changed by the letter R",
        categories: &["6. AR", "6. OR", "6. ER/IR/UR"],
    },
    SubPack {
        name: "Special Vowel Patterns",
        description: "Unique vowel combinations",
        categories: &[
            "5. AU/AW",
            "5. OI/OY",
            "5. OU/OW (cow sound)",
            "8. OO (two sounds)",
            "8. OUGH/AUGH",
        ],
    },
    SubPack {
        name: "Word Endings",
        description: "Common suffixes and endings",
        categories: &[
            "9. -S/-ES ENDINGS",
            "9. -ING ENDINGS",
            "9. -ED ENDINGS",
            "9. -LE ENDINGS",
            "6B. Y as /ee/ ENDING",
        ],
    },
    SubPack {
        name: "Advanced Patterns",
        description: "Soft C/G, silent letters, AL pattern",
        categories: &["8. SOFT C/G", "7. SILENT LETTERS", "6D. AL PATTERN"],
    },
    SubPack {
        name: "Multi-Syllable Words",
        description: "Building longer words",
        categories: &[
            "10. TWO SYLLABLES",
            "11. THREE SYLLABLES",
            "12. FOUR+ SYLLABLES",
        ],
    },
    SubPack {
        name: "Year 2 Exception Words",
        description: "Tricky words for Year 2",
        categories: &["0B. YEAR 2 COMMON EXCEPTION"],
    },
    SubPack {
        name: "Year 3/4 Exception Words",
        description: "Challenging words for Years 3-4",
        categories: &["0C. YEAR 3/4 COMMON EXCEPTION"],
    },
    SubPack {
        name: "Advanced Vocabulary",
        description: "Complex and academic words",
        categories: &["13. ADVANCED WORDS"],
    },
    SubPack {
        name: "Year 5/6 Spelling Words",
        description: "Most challenging statutory spellings",
        categories: &["0D. YEAR 5/6 STATUTORY SPELLING"],
    },
];

/// Result of regrouping
pub struct GroupResult {
    pub packs: Vec<Pack>,
    /// Packs per sub-pack, in table order
    pub counts: Vec<(&'static str, usize)>,
    /// Input packs whose category matched no sub-pack
    pub dropped: usize,
}

/// Renumber and annotate packs in sub-pack order
#[must_use]
pub fn regroup(all_packs: &[Pack]) -> GroupResult {
    let mut packs = Vec::new();
    let mut counts = Vec::new();
    let mut id = 1u32;

    for sub_pack in SUB_PACK_ORDER {
        let mut members = 0usize;

        for pack in all_packs {
            let category = pack.category.as_deref().unwrap_or("");
            if !sub_pack.categories.contains(&pack_base_name(category)) {
                continue;
            }

            let mut regrouped = pack.clone();
            regrouped.id = id;
            regrouped.title = format!("P{id}: {category}");
            regrouped.sub_pack = Some(sub_pack.name.to_string());
            regrouped.sub_pack_description = Some(sub_pack.description.to_string());

            packs.push(regrouped);
            id += 1;
            members += 1;
        }

        counts.push((sub_pack.name, members));
    }

    GroupResult {
        dropped: all_packs.len() - packs.len(),
        packs,
        counts,
    }
}
