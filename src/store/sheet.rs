//! The tabular word bank store
//!
//! A plain tab-separated file stands in for the spreadsheet: one header
//! line (`Category | Pattern/Description | Words`), then one row per line
//! with three columns. The file is the only durable state; every save is a
//! full rewrite through a temp file persisted over the target, so a failed
//! run never leaves a half-written bank behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER: &str = "Category\tPattern/Description\tWords";

/// One stored row: category, pattern/description, comma-joined words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub category: String,
    pub description: String,
    pub words: String,
}

impl Row {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        words: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            words: words.into(),
        }
    }

    /// Whether this row carries data
    ///
    /// Rows missing a category or words are decoration or padding, skipped
    /// by every read path.
    #[must_use]
    pub fn is_data(&self) -> bool {
        !self.category.trim().is_empty() && !self.words.trim().is_empty()
    }
}

/// An in-memory word bank, loaded whole and saved whole
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    rows: Vec<Row>,
}

impl Sheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load a bank file
    ///
    /// The first line is the header and is not a row. Short lines pad
    /// missing columns with empty cells, like blank spreadsheet cells.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;

        let rows = content
            .lines()
            .skip(1)
            .map(|line| {
                let mut cells = line.splitn(3, '\t');
                Row {
                    category: cells.next().unwrap_or_default().to_string(),
                    description: cells.next().unwrap_or_default().to_string(),
                    words: cells.next().unwrap_or_default().to_string(),
                }
            })
            .collect();

        Ok(Self { rows })
    }

    /// Save the bank, replacing the target file atomically
    ///
    /// # Errors
    /// Returns an I/O error if the temp file cannot be written or persisted
    /// over the target.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());

        let mut temp = match parent {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };

        writeln!(temp, "{HEADER}")?;
        for row in &self.rows {
            writeln!(temp, "{}\t{}\t{}", row.category, row.description, row.words)?;
        }

        temp.persist(path)?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Overwrite the row at `index`, growing the sheet with blank rows as
    /// needed (the spreadsheet equivalent of writing past the last row)
    pub fn set_row(&mut self, index: usize, row: Row) {
        if index >= self.rows.len() {
            self.rows.resize(index + 1, Row::default());
        }
        self.rows[index] = row;
    }

    /// Rows that carry data, in order
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_data())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
