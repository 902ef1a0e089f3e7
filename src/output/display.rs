//! Display functions for command results

use crate::commands::{
    GroupResult, InitResult, LevelsResult, NumberResult, PacksResult, PreviewLine, SplitResult,
    StatsResult, SyncResult,
};
use crate::commands::extract::total_words;
use crate::core::Pack;
use colored::Colorize;
use std::path::Path;

fn rule() -> String {
    "═".repeat(70)
}

/// Print the result of seeding the bank
pub fn print_init_summary(result: &InitResult, path: &Path) {
    println!("{}", "Seed word bank written!".green().bold());
    println!("  Sections:  {}", result.sections);
    println!("  File:      {}", path.display());
    println!("  Each section has 10-30 words for easier progress tracking");
}

/// Print the result of a numbering run
pub fn print_number_summary(result: &NumberResult) {
    if result.numbered == 0 {
        println!("{}", "No named rows to number".yellow());
        return;
    }

    println!(
        "{}",
        format!("Numbered packs P1 through P{}", result.numbered)
            .green()
            .bold()
    );
    println!("  Total packs numbered: {}", result.numbered);
}

/// Print the result of a splitting run
pub fn print_split_summary(result: &SplitResult, max_words: usize) {
    println!("{}", "Split word bank created!".green().bold());
    println!("  Sections in:   {}", result.rows_in);
    println!("  Sections out:  {}", result.rows_out);
    println!(
        "  Split:         {} oversized {} into max {max_words} words each",
        result.categories_split,
        if result.categories_split == 1 {
            "section"
        } else {
            "sections"
        }
    );
    println!("  ALL words preserved, in order");
}

/// Print the result of a pack rebuild
pub fn print_packs_summary(result: &PacksResult, pack_size: usize) {
    for (category, count) in &result.skipped {
        println!(
            "{}",
            format!("  WARNING: skipping {category} - too few words ({count})").yellow()
        );
    }

    println!("\n{}", rule().cyan());
    println!(" {} ", "PACK REBUILD COMPLETE".bright_cyan().bold());
    println!("{}", rule().cyan());
    println!("  Categories processed:  {}", result.categories);
    println!("  Word packs created:    {}", result.packs);
    println!("  Pack size:             ~{pack_size} words each");
}

/// Print the result of a leveling run
pub fn print_levels_summary(result: &LevelsResult, report_path: &Path) {
    println!(
        "Found {} duplicate words",
        result.duplicates.len().to_string().bright_yellow()
    );
    for (word, categories) in result.duplicates.iter().take(10) {
        let homes = categories
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        println!("  '{word}' appears in: {homes}...");
    }

    println!("\n{}", "Reorganization complete!".green().bold());
    println!("  Total sections: {}", result.sections);
    println!("  Words organized by difficulty levels:");
    println!("    - Level 1A/1B/1C = Easy (same difficulty, split for size)");
    println!("    - Level 2 = Medium difficulty");
    println!("    - Level 3 = Hard difficulty");
    println!("  Duplicates removed (kept first occurrence)");
    println!("  Duplicate report: {}", report_path.display());
}

/// Print the result of a JSON extraction
pub fn print_extract_summary(packs: &[Pack], path: &Path) {
    for pack in packs.iter().take(5) {
        println!(
            "  P{}: {} ({} words)",
            pack.id,
            pack.category.as_deref().unwrap_or(&pack.title),
            pack.word_count()
        );
    }

    println!("\n{}", "Extraction complete!".green().bold());
    println!("  Packs:        {}", packs.len());
    println!("  Total words:  {}", total_words(packs));
    println!("  Saved to:     {}", path.display());
}

/// Print the result of a regrouping run
pub fn print_group_summary(result: &GroupResult, input_count: usize, path: &Path) {
    for (name, count) in &result.counts {
        println!("  {name}: {count} packs");
    }

    println!("\n  Total regrouped: {} packs", result.packs.len());
    println!("  Total words: {}", total_words(&result.packs));

    if result.dropped > 0 {
        println!(
            "{}",
            format!(
                "  WARNING: pack count mismatch! Input: {input_count}, regrouped: {}",
                result.packs.len()
            )
            .yellow()
            .bold()
        );
    } else {
        println!("{}", "  SUCCESS: all packs accounted for!".green());
    }

    println!("  Saved to: {}", path.display());
}

/// Print the result of a sync run
pub fn print_sync_summary(result: &SyncResult) {
    for (id, title, word_count) in &result.updated {
        println!("  Updated P{id}: {title} ({word_count} words)");
    }

    println!(
        "\n{}",
        "SUCCESS! The bank now mirrors the live app data"
            .green()
            .bold()
    );
    println!("  Updated {} packs", result.updated.len());
}

/// Print the word bank statistics table
pub fn print_stats(result: &StatsResult) {
    println!("{}", rule().cyan());
    println!(" {} ", "WORD BANK ANALYSIS".bright_cyan().bold());
    println!("{}", rule().cyan());
    println!("{:<50} {:>10}", "Category", "Word Count");
    println!("{}", "-".repeat(70));

    for line in &result.per_category {
        println!("{:<50} {:>10}", line.category, line.words);
    }

    println!("{}", "-".repeat(70));
    println!("  Total sections:     {}", result.sections);
    println!("  Total word entries: {}", result.entries);
    println!("  Unique words:       {}", result.unique);
}

/// Print the bank preview
pub fn print_preview(lines: &[PreviewLine], total_rows: usize) {
    println!("{}", rule().cyan());
    println!(" {} ", "WORD BANK - PREVIEW".bright_cyan().bold());
    println!("{}", rule().cyan());

    for line in lines {
        println!(
            "{:<45} | {} words",
            line.category.bold(),
            line.word_count
        );
        if !line.preview.is_empty() {
            println!("  {}", line.preview);
        }
        println!();
    }

    println!("{}", rule().cyan());
    println!("Total rows: {total_rows}");
}
