use crate::error::Result;
use crate::format::format_review;
use crate::record::Record;
use crate::slug::sanitize_filename;
use crate::template::{Substitutions, Template};

const FILE_EXTENSION: &str = "md";
const TITLE_PREFIX: &str = "Review: ";

/// A rendered document ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name relative to the output directory
    pub filename: String,
    /// Final document text
    pub content: String,
}

/// Builds the document for one record.
///
/// The file name is `{sanitized-title}-{sanitized-year}.md`; the `{{SLUG}}`
/// value is the same stem lower-cased. Both parts go through
/// [`sanitize_filename`], so the name never contains a path separator.
///
/// # Errors
///
/// Returns an error if the record lacks a rendered column or its date
/// cannot be parsed.
pub fn assemble(record: &Record, template: &Template) -> Result<Document> {
    let name = record.name()?;
    let stem = format!(
        "{}-{}",
        sanitize_filename(name),
        sanitize_filename(record.year()?)
    );

    let formatted = format_review(record)?;

    let values = Substitutions {
        review_text: formatted.body,
        date: record.date()?.to_string(),
        display_date: formatted.display_date,
        slug: stem.to_lowercase(),
        title: format!("{TITLE_PREFIX}{name}"),
    };

    Ok(Document {
        filename: format!("{stem}.{FILE_EXTENSION}"),
        content: template.render(&values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::columns;
    use crate::template::Placeholder;

    fn record(name: &str, date: &str) -> Record {
        Record::new(
            [
                (columns::DATE, date),
                (columns::NAME, name),
                (columns::YEAR, "2019"),
                (columns::URI, "https://example/parasite"),
                (columns::RATING, "5"),
                (columns::REWATCH, "No"),
                (columns::REVIEW, ""),
                (columns::TAGS, ""),
                (columns::WATCHED_DATE, date),
            ],
            2,
        )
    }

    #[test]
    fn test_minimal_template_is_body() {
        let doc = assemble(&record("Parasite", "2023-05-01"), &Template::new("{{REVIEWTEXT}}")).unwrap();

        assert_eq!(doc.filename, "Parasite-2019.md");
        assert_eq!(
            doc.content,
            "# Parasite (2019)\n\n⭐ 5\n\n*Keine Bewertung*\n\n[Auf Letterboxd ansehen](https://example/parasite)"
        );
    }

    #[test]
    fn test_front_matter_values() {
        let template = Template::new(
            "---\ntitle: \"{{TITLE}}\"\ndate: {{DATE}}\nslug: {{SLUG}}\nshown: {{DISPLAY_DATE}}\n---\n\n{{REVIEWTEXT}}\n",
        );
        let doc = assemble(&record("Die Hard: Die Härter!", "2023-05-01"), &template).unwrap();

        for placeholder in Placeholder::ALL {
            assert!(!doc.content.contains(placeholder.token()));
        }
        assert!(doc.content.starts_with(
            "---\ntitle: \"Review: Die Hard: Die Härter!\"\ndate: 2023-05-01\nslug: die-hard-die-härter-2019\nshown: 01.05.2023\n---\n\n# Die Hard: Die Härter! (2019)\n"
        ));
        assert!(doc.content.ends_with("(https://example/parasite)\n"));
    }

    #[test]
    fn test_filename_keeps_case_slug_lowercases() {
        let doc = assemble(&record("The Thing", "2023-05-01"), &Template::new("{{SLUG}}")).unwrap();
        assert_eq!(doc.filename, "The-Thing-2019.md");
        assert_eq!(doc.content, "the-thing-2019");
    }

    #[test]
    fn test_same_title_and_year_same_filename() {
        let template = Template::new("{{REVIEWTEXT}}");
        let first = assemble(&record("Parasite", "2023-05-01"), &template).unwrap();
        let second = assemble(&record("Parasite", "2024-01-09"), &template).unwrap();
        assert_eq!(first.filename, second.filename);
    }

    #[test]
    fn test_year_cannot_escape_output_dir() {
        let record = Record::new(
            [
                (columns::DATE, "2023-05-01"),
                (columns::NAME, "X"),
                (columns::YEAR, "../../escaped"),
                (columns::URI, "u"),
                (columns::RATING, ""),
                (columns::REWATCH, "No"),
                (columns::REVIEW, ""),
            ],
            2,
        );

        let doc = assemble(&record, &Template::new("{{REVIEWTEXT}}")).unwrap();
        assert_eq!(doc.filename, "X-escaped.md");
        assert!(doc.content.starts_with("# X (../../escaped)\n"));
    }

    #[test]
    fn test_bad_date_fails() {
        let result = assemble(&record("Parasite", "not-a-date"), &Template::new("{{DATE}}"));
        assert!(result.unwrap_err().is_date_parse());
    }
}
