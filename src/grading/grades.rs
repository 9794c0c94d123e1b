//! Per-category scores and loading them from a JSON file.
//!
//! Expected file format (every key optional, unknown keys ignored):
//!
//! ```json
//! {
//!   "quiz_1": 85,
//!   "quiz_2": 90,
//!   "midterm": 88,
//!   "project": 95,
//!   "final": 92
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::{GradesError, Result};
use crate::grading::category::Category;

/// Scores keyed by category. A category with no entry has not been submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grades {
    scores: BTreeMap<Category, f64>,
}

impl Grades {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.scores.get(&category).copied()
    }

    pub fn set(&mut self, category: Category, score: f64) {
        self.scores.insert(category, score);
    }

    pub fn clear(&mut self, category: Category) {
        self.scores.remove(&category);
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Categories without a score, in report order.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.scores.contains_key(c))
            .collect()
    }

    /// Present `(category, score)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.scores.iter().map(|(c, s)| (*c, *s))
    }

    /// Replaces every score at once.
    ///
    /// Categories not yielded by `scores` become absent, so
    /// `set_all([(Category::Midterm, 88.0)])` also drops an earlier quiz score.
    pub fn set_all<I>(&mut self, scores: I)
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        self.scores = scores.into_iter().collect();
    }

    /// Applies the known keys of `source` on top of the current scores.
    ///
    /// Keys missing from `source` keep their current value and unknown keys
    /// are ignored. An explicit `null` clears the score. Nothing is applied
    /// if any known key holds something other than a number or `null`.
    pub fn merge(&mut self, source: &Map<String, Value>) -> Result<()> {
        let mut updates = Vec::new();

        for category in Category::ALL {
            let Some(value) = source.get(category.key()) else {
                continue;
            };
            let score = match value {
                Value::Null => None,
                Value::Number(n) => n.as_f64(),
                other => {
                    return Err(GradesError::InvalidScore {
                        key: category.key().to_string(),
                        value: other.clone(),
                    });
                }
            };
            updates.push((category, score));
        }

        for (category, score) in updates {
            match score {
                Some(score) => self.set(category, score),
                None => self.clear(category),
            }
        }

        let ignored = source
            .keys()
            .filter(|k| Category::from_key(k).is_none())
            .count();
        debug!(applied = source.len() - ignored, ignored, "Merged grades");

        Ok(())
    }

    /// Reads `path` as a JSON object and merges it into these grades.
    ///
    /// # Errors
    ///
    /// [`GradesError::NotFound`] if the file does not exist, and
    /// [`GradesError::Parse`] or [`GradesError::NotAnObject`] for bad content.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_from_json(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = read_json_object(path)?;
        self.merge(&source)
    }
}

/// Reads a file that must hold a single JSON object.
pub(crate) fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| GradesError::from_io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|source| GradesError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(GradesError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

impl fmt::Display for Grades {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("No grades submitted yet.");
        }

        let grades = self
            .iter()
            .map(|(category, score)| format!("{}: {}", category.label(), score))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "GRADES --- {}", grades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test source must be an object"),
        }
    }

    #[test]
    fn test_new_grades_are_empty() {
        let grades = Grades::new();
        assert!(grades.is_empty());
        assert_eq!(grades.missing(), Category::ALL.to_vec());
    }

    #[test]
    fn test_merge_keeps_existing_values() {
        let mut grades = Grades::new();
        grades.set(Category::Quiz1, 85.0);

        grades.merge(&object(json!({ "midterm": 88 }))).unwrap();

        assert_eq!(grades.get(Category::Quiz1), Some(85.0));
        assert_eq!(grades.get(Category::Midterm), Some(88.0));
        assert_eq!(grades.get(Category::Final), None);
    }

    #[test]
    fn test_merge_overwrites_present_keys() {
        let mut grades = Grades::new();
        grades.set(Category::Project, 70.0);

        grades.merge(&object(json!({ "project": 95.5 }))).unwrap();

        assert_eq!(grades.get(Category::Project), Some(95.5));
    }

    #[test]
    fn test_merge_ignores_unknown_keys() {
        let mut grades = Grades::new();
        grades
            .merge(&object(json!({ "homework": 100, "quiz_2": 90 })))
            .unwrap();

        assert_eq!(grades.iter().collect::<Vec<_>>(), vec![(Category::Quiz2, 90.0)]);
    }

    #[test]
    fn test_merge_null_clears_score() {
        let mut grades = Grades::new();
        grades.set(Category::Final, 92.0);

        grades.merge(&object(json!({ "final": null }))).unwrap();

        assert_eq!(grades.get(Category::Final), None);
    }

    #[test]
    fn test_merge_rejects_non_numeric_score() {
        let mut grades = Grades::new();
        grades.set(Category::Quiz1, 85.0);

        let err = grades
            .merge(&object(json!({ "quiz_2": 90, "midterm": "eighty" })))
            .unwrap_err();

        assert!(matches!(err, GradesError::InvalidScore { ref key, .. } if key == "midterm"));
        // Nothing from the rejected source is applied
        assert_eq!(grades.get(Category::Quiz2), None);
        assert_eq!(grades.get(Category::Quiz1), Some(85.0));
    }

    #[test]
    fn test_set_all_replaces_every_score() {
        let mut grades = Grades::new();
        grades.set(Category::Quiz1, 85.0);

        grades.set_all([(Category::Midterm, 88.0), (Category::Project, 95.0)]);

        assert_eq!(grades.get(Category::Quiz1), None);
        assert_eq!(grades.get(Category::Midterm), Some(88.0));
        assert_eq!(grades.get(Category::Project), Some(95.0));
    }

    #[test]
    fn test_set_all_empty_clears_everything() {
        let mut grades = Grades::new();
        grades.set(Category::Final, 75.0);
        grades.set_all(Vec::<(Category, f64)>::new());
        assert!(grades.is_empty());
    }

    #[test]
    fn test_display_no_grades() {
        assert_eq!(Grades::new().to_string(), "No grades submitted yet.");
    }

    #[test]
    fn test_display_single_grade() {
        let mut grades = Grades::new();
        grades.set(Category::Quiz1, 85.0);

        let rendered = grades.to_string();

        assert!(rendered.contains("Quiz 1: 85"));
        for category in [Category::Quiz2, Category::Midterm, Category::Project, Category::Final] {
            assert!(!rendered.contains(category.label()));
        }
    }

    #[test]
    fn test_display_lists_present_grades_in_order() {
        let mut grades = Grades::new();
        grades.set(Category::Final, 92.0);
        grades.set(Category::Quiz1, 85.0);
        grades.set(Category::Midterm, 88.5);

        assert_eq!(
            grades.to_string(),
            "GRADES --- Quiz 1: 85, Midterm Exam: 88.5, Final Exam: 92"
        );
    }

    #[test]
    fn test_serializes_as_key_map() {
        let mut grades = Grades::new();
        grades.set(Category::Quiz2, 90.0);
        assert_eq!(serde_json::to_value(&grades).unwrap(), json!({ "quiz_2": 90.0 }));
    }
}
