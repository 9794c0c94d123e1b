//! The fixed set of graded assignment categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five assignment types scored in the course.
///
/// Variants are declared in report order, so the derived `Ord` is also the
/// order grades are rendered and summed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(rename = "quiz_1")]
    Quiz1,
    #[serde(rename = "quiz_2")]
    Quiz2,
    Midterm,
    Project,
    Final,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Quiz1,
        Category::Quiz2,
        Category::Midterm,
        Category::Project,
        Category::Final,
    ];

    /// JSON key used in grades and weights files.
    pub fn key(self) -> &'static str {
        match self {
            Category::Quiz1 => "quiz_1",
            Category::Quiz2 => "quiz_2",
            Category::Midterm => "midterm",
            Category::Project => "project",
            Category::Final => "final",
        }
    }

    /// Human-readable label used when rendering grades.
    pub fn label(self) -> &'static str {
        match self {
            Category::Quiz1 => "Quiz 1",
            Category::Quiz2 => "Quiz 2",
            Category::Midterm => "Midterm Exam",
            Category::Project => "Project",
            Category::Final => "Final Exam",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Comma-separated list of every JSON key, for error hints.
    pub fn key_list() -> String {
        Self::ALL.map(Category::key).join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
