use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A placeholder recognized in template documents.
///
/// Markers use the bracketed `{{TOKEN}}` form and are matched literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Formatted review body
    ReviewText,
    /// Raw `Date` cell as exported
    Date,
    /// `Date` reformatted as `DD.MM.YYYY`
    DisplayDate,
    /// Lower-cased `{title}-{year}` slug
    Slug,
    /// Document title (`Review: {Name}`)
    Title,
}

impl Placeholder {
    /// All placeholders in substitution order.
    pub const ALL: [Self; 5] = [
        Self::ReviewText,
        Self::Date,
        Self::DisplayDate,
        Self::Slug,
        Self::Title,
    ];

    /// Returns the literal marker for this placeholder.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::ReviewText => "{{REVIEWTEXT}}",
            Self::Date => "{{DATE}}",
            Self::DisplayDate => "{{DISPLAY_DATE}}",
            Self::Slug => "{{SLUG}}",
            Self::Title => "{{TITLE}}",
        }
    }
}

/// Values substituted for each placeholder of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    /// Value for `{{REVIEWTEXT}}`
    pub review_text: String,
    /// Value for `{{DATE}}`
    pub date: String,
    /// Value for `{{DISPLAY_DATE}}`
    pub display_date: String,
    /// Value for `{{SLUG}}`
    pub slug: String,
    /// Value for `{{TITLE}}`
    pub title: String,
}

impl Substitutions {
    /// Returns the value bound to `placeholder`.
    #[must_use]
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::ReviewText => &self.review_text,
            Placeholder::Date => &self.date,
            Placeholder::DisplayDate => &self.display_date,
            Placeholder::Slug => &self.slug,
            Placeholder::Title => &self.title,
        }
    }
}

/// A template document loaded once and shared by every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Creates a template from in-memory text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads a template document from disk.
    ///
    /// The contents are not inspected; placeholders are only located when
    /// rendering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file is missing or unreadable.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!("Loaded template {} ({} bytes)", path.display(), text.len());
        Ok(Self::new(text))
    }

    /// Returns the raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the recognized placeholders occurring in the template.
    #[must_use]
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.text.contains(p.token()))
            .collect()
    }

    /// Replaces every occurrence of every recognized placeholder.
    ///
    /// Markers that are not recognized are left untouched.
    #[must_use]
    pub fn render(&self, values: &Substitutions) -> String {
        Placeholder::ALL
            .into_iter()
            .fold(self.text.clone(), |text, placeholder| {
                text.replace(placeholder.token(), values.get(placeholder))
            })
    }
}
