//! Diary rows and the table reader that produces them.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Column names of a Letterboxd `reviews.csv` export.
pub mod columns {
    /// Watch date (`YYYY-MM-DD`)
    pub const DATE: &str = "Date";
    /// Film title
    pub const NAME: &str = "Name";
    /// Release year
    pub const YEAR: &str = "Year";
    /// Link to the entry on Letterboxd
    pub const URI: &str = "Letterboxd URI";
    /// Star rating, empty when unrated
    pub const RATING: &str = "Rating";
    /// `Yes` for rewatches
    pub const REWATCH: &str = "Rewatch";
    /// Free-text review, may be empty
    pub const REVIEW: &str = "Review";
    /// Comma-separated tags (not rendered)
    pub const TAGS: &str = "Tags";
    /// Diary date (not rendered)
    pub const WATCHED_DATE: &str = "Watched Date";

    /// Every column an export is expected to carry.
    pub const EXPECTED: [&str; 9] = [
        DATE,
        NAME,
        YEAR,
        URI,
        RATING,
        REWATCH,
        REVIEW,
        TAGS,
        WATCHED_DATE,
    ];
}

/// One diary entry: header name to cell value.
///
/// Columns are not checked when the row is read; a missing column is
/// reported by [`Record::field`] on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
    line: u64,
}

impl Record {
    /// Creates a record from `(column, value)` pairs.
    #[must_use]
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>, line: u64) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            line,
        }
    }

    /// Returns the value of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the row has no such column.
    pub fn field(&self, column: &str) -> Result<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_column(column, self.line))
    }

    /// Source line of the row (1-based, header is line 1).
    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    /// Watch date as exported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn date(&self) -> Result<&str> {
        self.field(columns::DATE)
    }

    /// Film title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn name(&self) -> Result<&str> {
        self.field(columns::NAME)
    }

    /// Release year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn year(&self) -> Result<&str> {
        self.field(columns::YEAR)
    }

    /// Letterboxd link.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn uri(&self) -> Result<&str> {
        self.field(columns::URI)
    }

    /// Rating, `None` when the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn rating(&self) -> Result<Option<&str>> {
        self.field(columns::RATING).map(non_empty)
    }

    /// True only for the exact `Yes` marker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn is_rewatch(&self) -> Result<bool> {
        self.field(columns::REWATCH).map(|v| v == "Yes")
    }

    /// Review text, `None` when the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column is absent.
    pub fn review(&self) -> Result<Option<&str>> {
        self.field(columns::REVIEW).map(non_empty)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Reads diary records from a comma-delimited table with a header row.
pub struct RecordReader<R> {
    reader: csv::Reader<R>,
    source: PathBuf,
}

impl RecordReader<File> {
    /// Opens the table at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_reader(file, path))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wraps any reader; `source` names it in error messages.
    #[must_use]
    pub fn from_reader(reader: R, source: impl Into<PathBuf>) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        Self {
            reader,
            source: source.into(),
        }
    }

    /// Reads every row in file order.
    ///
    /// Short rows are kept; their trailing columns are simply absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or parsed.
    pub fn read_all(mut self) -> Result<Vec<Record>> {
        let headers = self
            .reader
            .headers()
            .map_err(|e| Error::csv(&self.source, e))?
            .clone();

        let missing: Vec<&str> = columns::EXPECTED
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            warn!(
                "{} has no {} column(s); rows will fail when they are needed",
                self.source.display(),
                missing.join(", ")
            );
        }

        let mut records = Vec::new();
        for row in self.reader.records() {
            let row = row.map_err(|e| Error::csv(&self.source, e))?;
            let line = row.position().map_or(0, csv::Position::line);
            records.push(Record::new(headers.iter().zip(row.iter()), line));
        }

        debug!(
            "Read {} records from {}",
            records.len(),
            self.source.display()
        );
        Ok(records)
    }
}
