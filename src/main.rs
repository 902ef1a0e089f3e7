//! Phonics Word Bank - CLI
//!
//! One subcommand per maintenance operation on the word bank. Every run is
//! a whole-file batch: read the bank, transform, write it back (or emit a
//! JSON snapshot), then print a summary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phonics_wordbank::commands::{
    collect_stats, extract_packs, extract_word_packs, levels, preview_rows, rebuild_packs,
    regroup, renumber, reorganize, seed_sheet, split_bank, sync,
};
use phonics_wordbank::config::{
    DEFAULT_BANK_FILE, DEFAULT_EXPORT_FILE, DEFAULT_GROUPED_FILE, DUPLICATE_REPORT_FILE,
    LEVEL_CHUNK_SIZE, MIN_PACK_WORDS, PREVIEW_ROWS, PREVIEW_WORDS, SIMPLE_PACK_SIZE,
    SPLIT_CHUNK_SIZE,
};
use phonics_wordbank::core::Pack;
use phonics_wordbank::output::display;
use phonics_wordbank::store::Sheet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "wordbank",
    about = "Build, reshape, and export the phonics word bank behind the reading app",
    version,
    author
)]
struct Cli {
    /// Bank file to operate on
    #[arg(short, long, global = true, default_value = DEFAULT_BANK_FILE)]
    bank: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the embedded seed word bank, replacing the bank file
    Init,

    /// Renumber every category as P1:, P2:, ... (idempotent)
    Number,

    /// Split oversized rows into (Part i/n) rows
    Split {
        /// Maximum words per row
        #[arg(short, long, default_value_t = SPLIT_CHUNK_SIZE)]
        max: usize,
    },

    /// Rebuild clean, alphabetized packs from base categories
    Packs {
        /// Words per pack
        #[arg(short, long, default_value_t = SIMPLE_PACK_SIZE)]
        size: usize,

        /// Skip categories with fewer unique words than this
        #[arg(short, long, default_value_t = MIN_PACK_WORDS)]
        min: usize,
    },

    /// Reorganize the bank by difficulty level
    Levels {
        /// Words per leveled section
        #[arg(short, long, default_value_t = LEVEL_CHUNK_SIZE)]
        size: usize,
    },

    /// Extract the bank into a JSON pack array
    Extract {
        /// Output JSON file
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,

        /// Only extract the first N packs
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Regroup an extracted JSON pack array into ordered sub-packs
    Group {
        /// Input JSON file (an `extract` snapshot)
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long, default_value = DEFAULT_GROUPED_FILE)]
        output: PathBuf,
    },

    /// Overwrite bank rows from the app's embedded word packs
    Sync {
        /// App source file containing the wordPacks literal
        #[arg(short, long, default_value = "app.js")]
        source: PathBuf,
    },

    /// Per-category word counts and bank totals
    Stats,

    /// Show the first rows of the bank
    Preview {
        /// Rows to show
        #[arg(short, long, default_value_t = PREVIEW_ROWS)]
        rows: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => run_init(&cli.bank),
        Commands::Number => run_number(&cli.bank),
        Commands::Split { max } => run_split(&cli.bank, max),
        Commands::Packs { size, min } => run_packs(&cli.bank, size, min),
        Commands::Levels { size } => run_levels(&cli.bank, size),
        Commands::Extract { output, limit } => run_extract(&cli.bank, &output, limit),
        Commands::Group { input, output } => run_group(&input, &output),
        Commands::Sync { source } => run_sync(&cli.bank, &source),
        Commands::Stats => run_stats(&cli.bank),
        Commands::Preview { rows } => run_preview(&cli.bank, rows),
    }
}

fn load_bank(path: &Path) -> Result<Sheet> {
    Sheet::load(path).with_context(|| format!("could not read bank file {}", path.display()))
}

fn save_bank(sheet: &Sheet, path: &Path) -> Result<()> {
    sheet
        .save(path)
        .with_context(|| format!("could not write bank file {}", path.display()))
}

fn run_init(bank: &Path) -> Result<()> {
    let (sheet, result) = seed_sheet();
    save_bank(&sheet, bank)?;
    display::print_init_summary(&result, bank);
    Ok(())
}

fn run_number(bank: &Path) -> Result<()> {
    let mut sheet = load_bank(bank)?;
    let result = renumber(&mut sheet);
    save_bank(&sheet, bank)?;
    display::print_number_summary(&result);
    Ok(())
}

fn run_split(bank: &Path, max: usize) -> Result<()> {
    let sheet = load_bank(bank)?;
    let result = split_bank(&sheet, max);
    save_bank(&result.sheet, bank)?;
    display::print_split_summary(&result, max);
    Ok(())
}

fn run_packs(bank: &Path, size: usize, min: usize) -> Result<()> {
    let sheet = load_bank(bank)?;
    let result = rebuild_packs(&sheet, size, min);
    save_bank(&result.sheet, bank)?;
    display::print_packs_summary(&result, size);
    Ok(())
}

fn run_levels(bank: &Path, size: usize) -> Result<()> {
    let sheet = load_bank(bank)?;
    let result = reorganize(&sheet, size);
    save_bank(&result.sheet, bank)?;

    let report_path = bank
        .parent()
        .map_or_else(|| PathBuf::from(DUPLICATE_REPORT_FILE), |dir| dir.join(DUPLICATE_REPORT_FILE));
    fs::write(&report_path, levels::duplicate_report(&result.duplicates))
        .with_context(|| format!("could not write {}", report_path.display()))?;

    display::print_levels_summary(&result, &report_path);
    Ok(())
}

fn run_extract(bank: &Path, output: &Path, limit: Option<usize>) -> Result<()> {
    let sheet = load_bank(bank)?;
    println!("Reading bank with {} rows...", sheet.len());

    let packs = extract_packs(&sheet, limit);
    write_packs(&packs, output)?;

    display::print_extract_summary(&packs, output);
    Ok(())
}

fn run_group(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("could not read {}", input.display()))?;
    let all_packs: Vec<Pack> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a valid pack array", input.display()))?;
    println!("Loaded {} packs", all_packs.len());

    let result = regroup(&all_packs);
    write_packs(&result.packs, output)?;

    display::print_group_summary(&result, all_packs.len(), output);
    Ok(())
}

fn run_sync(bank: &Path, source: &Path) -> Result<()> {
    println!("Reading {}...", source.display());
    let content = fs::read_to_string(source)
        .with_context(|| format!("could not read app source {}", source.display()))?;
    let packs = extract_word_packs(&content)?;
    println!("Found {} packs in the app source", packs.len());

    let mut sheet = load_bank(bank)?;
    let result = sync::apply(&mut sheet, &packs)?;
    save_bank(&sheet, bank)?;

    display::print_sync_summary(&result);
    Ok(())
}

fn run_stats(bank: &Path) -> Result<()> {
    let sheet = load_bank(bank)?;
    display::print_stats(&collect_stats(&sheet));
    Ok(())
}

fn run_preview(bank: &Path, rows: usize) -> Result<()> {
    let sheet = load_bank(bank)?;
    let lines = preview_rows(&sheet, rows, PREVIEW_WORDS);
    display::print_preview(&lines, sheet.len());
    Ok(())
}

fn write_packs(packs: &[Pack], path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(packs).context("could not serialize packs")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("could not write {}", path.display()))
}
