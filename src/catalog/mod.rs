use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::Deserialize;

use crate::error::CatalogError;

static CATALOG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/catalog");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Subject {
    pub code: String,
    pub credit: f64,
}

/// Reference list of subjects and nominal credits for one course.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub name: String,
    pub subjects: Vec<Subject>,
}

impl Course {
    pub fn total_credits(&self) -> f64 {
        self.subjects.iter().map(|s| s.credit).sum()
    }
}

/// All bundled courses, sorted by name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        let courses = CATALOG_DIR
            .files()
            .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
            .map(|f| {
                let file_name = f.path().display().to_string();
                let contents = f
                    .contents_utf8()
                    .ok_or_else(|| CatalogError::Encoding(file_name.clone()))?;
                serde_json::from_str::<Course>(contents).map_err(|source| CatalogError::Parse {
                    file: file_name,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();

        Ok(Self { courses })
    }

    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course_names(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.courses
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }
}
