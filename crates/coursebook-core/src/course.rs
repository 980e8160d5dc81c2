//! Course records and the ordered catalog they are rendered from

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One course shown as a card in the catalog.
///
/// Plain value: two records are the same course when every field matches.
/// `prerequisites` is free text ("None" or another course's title) and is
/// never resolved against the rest of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub title: String,
    pub code: String,
    pub credit_hours: u32,
    pub description: String,
    #[serde(default = "default_prerequisites")]
    pub prerequisites: String,
    /// Attribution line shown under the title
    pub credit: String,
}

fn default_prerequisites() -> String {
    "None".to_string()
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        credit_hours: u32,
        description: impl Into<String>,
        prerequisites: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            credit_hours,
            description: description.into(),
            prerequisites: prerequisites.into(),
            credit: credit.into(),
        }
    }
}

/// Ordered, fixed list of courses.
///
/// Order is the render order. Codes are not checked for uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Parse a catalog from TOML made of `[[courses]]` tables.
    ///
    /// `origin` is only used to label errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(content).map_err(|e| Error::catalog(origin, e.message()))?;

        if let Some(course) = catalog.courses.iter().find(|c| c.credit_hours == 0) {
            return Err(Error::catalog(
                origin,
                format!("course {} must have at least one credit hour", course.code),
            ));
        }

        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::catalog(path, e.to_string()))?;
        let catalog = Self::from_toml_str(&content, path)?;
        tracing::debug!("Loaded {} courses from {:?}", catalog.len(), path);
        Ok(catalog)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
