//! Course percentage and letter grade calculations.
//!
//! All functions are pure: they read a snapshot of [`Grades`] and
//! [`GradeWeights`] and return a value.

use crate::grading::category::Category;
use crate::grading::grade::{LetterGrade, grade};
use crate::grading::grades::Grades;
use crate::grading::weights::GradeWeights;

/// Weighted course percentage in `[0, 1]`.
///
/// Returns `None` if any category has no score. Missing work makes the
/// result incomplete; it is never a partial sum or a renormalized average.
pub fn calculate_course_percentage(grades: &Grades, weights: &GradeWeights) -> Option<f64> {
    Category::ALL.into_iter().try_fold(0.0, |total, category| {
        let score = grades.get(category)?;
        Some(total + score / 100.0 * weights.get(category))
    })
}

/// Weighted course percentage assuming every missing score is 100.
pub fn calculate_optimistic_course_percentage(grades: &Grades, weights: &GradeWeights) -> f64 {
    Category::ALL
        .into_iter()
        .map(|category| {
            let fraction = grades.get(category).map_or(1.0, |score| score / 100.0);
            fraction * weights.get(category)
        })
        .sum()
}

/// Letter grade for a course percentage.
///
/// Callers check for an incomplete percentage before calling this.
pub fn calculate_letter_grade(percentage: f64) -> LetterGrade {
    grade(percentage)
}
