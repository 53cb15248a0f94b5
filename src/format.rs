//! Review body rendering.
//!
//! The body has four parts separated by blank lines:
//!
//! ```text
//! # Parasite (2019)
//!
//! ⭐ 5 🔄
//!
//! *Keine Bewertung*
//!
//! [Auf Letterboxd ansehen](https://letterboxd.com/...)
//! ```

use crate::error::{Error, Result};
use crate::record::Record;
use chrono::NaiveDate;

const STAR: &str = "⭐";
const REWATCH_MARK: &str = "🔄";
const NO_RATING: &str = "-";
const NO_REVIEW: &str = "*Keine Bewertung*";
const LINK_LABEL: &str = "Auf Letterboxd ansehen";

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Rendered body of one review plus the derived display date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReview {
    /// Markdown body
    pub body: String,
    /// Watch date as `DD.MM.YYYY`
    pub display_date: String,
}

/// Renders the body of `record`.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] if a rendered column is absent and
/// [`Error::DateParse`] if `Date` is not `YYYY-MM-DD`.
pub fn format_review(record: &Record) -> Result<FormattedReview> {
    let display_date = display_date(record)?;

    let rating = record.rating()?.unwrap_or(NO_RATING);
    let rewatch = if record.is_rewatch()? {
        format!(" {REWATCH_MARK}")
    } else {
        String::new()
    };
    let review = record.review()?.unwrap_or(NO_REVIEW);

    let body = format!(
        "# {name} ({year})\n\n\
         {STAR} {rating}{rewatch}\n\n\
         {review}\n\n\
         [{LINK_LABEL}]({uri})",
        name = record.name()?,
        year = record.year()?,
        uri = record.uri()?,
    );

    Ok(FormattedReview { body, display_date })
}

/// Reformats the record's `Date` cell as `DD.MM.YYYY`.
fn display_date(record: &Record) -> Result<String> {
    let raw = record.date()?;
    let date = NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
        .map_err(|e| Error::date_parse(raw, record.line(), e))?;
    Ok(date.format(DISPLAY_DATE_FORMAT).to_string())
}
