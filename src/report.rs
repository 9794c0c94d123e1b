//! The outcome of one grade calculation run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::calculator::{
    calculate_course_percentage, calculate_letter_grade, calculate_optimistic_course_percentage,
};
use crate::grading::category::Category;
use crate::grading::grade::LetterGrade;
use crate::grading::grades::Grades;
use crate::grading::weights::GradeWeights;

pub const INCOMPLETE_MESSAGE: &str =
    "Can't calculate overall course grade without all individual grades.";

/// Grades, weights and the computed course results.
#[derive(Debug, Serialize)]
pub struct CourseReport {
    pub generated_at: DateTime<Utc>,
    pub grades: Grades,
    pub missing: Vec<Category>,
    pub weights: GradeWeights,
    /// `None` while any category is unscored.
    pub percentage: Option<f64>,
    pub letter_grade: Option<LetterGrade>,
    pub optimistic_percentage: f64,
    pub optimistic_letter_grade: LetterGrade,
}

impl CourseReport {
    pub fn build(grades: &Grades, weights: &GradeWeights) -> Self {
        let percentage = calculate_course_percentage(grades, weights);
        let optimistic_percentage = calculate_optimistic_course_percentage(grades, weights);

        CourseReport {
            generated_at: Utc::now(),
            grades: grades.clone(),
            missing: grades.missing(),
            weights: weights.clone(),
            percentage,
            letter_grade: percentage.map(calculate_letter_grade),
            optimistic_percentage,
            optimistic_letter_grade: calculate_letter_grade(optimistic_percentage),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.percentage.is_some()
    }

    /// The three console lines: submitted grades, actual result, optimistic result.
    pub fn lines(&self) -> Vec<String> {
        let actual = match (self.percentage, self.letter_grade) {
            (Some(pct), Some(letter)) => format!(
                "The letter grade with an overall {}% is {}",
                format_percent(pct),
                letter
            ),
            _ => INCOMPLETE_MESSAGE.to_string(),
        };

        let optimistic = format!(
            "If all other assignments are 100%, the overall course would be {}%, which is a {}",
            format_percent(self.optimistic_percentage),
            self.optimistic_letter_grade
        );

        vec![self.grades.to_string(), actual, optimistic]
    }
}

/// Absorbs float noise such as `8789.999999999998` for an exact `0.879`.
const TRUNCATE_EPSILON: f64 = 1e-9;

/// Formats a `[0, 1]` proportion as a percentage with two decimals.
///
/// Truncates instead of rounding, so the shown value never reaches a band
/// threshold the proportion itself is below.
pub fn format_percent(p: f64) -> String {
    let hundredths = (p * 10_000.0 + TRUNCATE_EPSILON).floor();
    format!("{:.2}", hundredths / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades_from(scores: &[(Category, f64)]) -> Grades {
        let mut grades = Grades::new();
        grades.set_all(scores.iter().copied());
        grades
    }

    #[test]
    fn test_complete_report_lines() {
        let grades = grades_from(&[
            (Category::Quiz1, 90.0),
            (Category::Quiz2, 80.0),
            (Category::Midterm, 85.0),
            (Category::Project, 95.0),
            (Category::Final, 88.0),
        ]);
        let report = CourseReport::build(&grades, &GradeWeights::default());

        assert!(report.is_complete());
        assert!(report.missing.is_empty());
        assert_eq!(report.letter_grade, Some(LetterGrade::BPlus));

        let lines = report.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "GRADES --- Quiz 1: 90, Quiz 2: 80, Midterm Exam: 85, Project: 95, Final Exam: 88"
        );
        assert_eq!(lines[1], "The letter grade with an overall 87.90% is B+");
        assert_eq!(
            lines[2],
            "If all other assignments are 100%, the overall course would be 87.90%, which is a B+"
        );
    }

    #[test]
    fn test_incomplete_report_lines() {
        let grades = grades_from(&[(Category::Quiz1, 85.0)]);
        let report = CourseReport::build(&grades, &GradeWeights::default());

        assert!(!report.is_complete());
        assert_eq!(report.letter_grade, None);
        assert_eq!(report.missing.len(), 4);

        let lines = report.lines();
        assert_eq!(lines[0], "GRADES --- Quiz 1: 85");
        assert_eq!(lines[1], INCOMPLETE_MESSAGE);
        assert_eq!(
            lines[2],
            "If all other assignments are 100%, the overall course would be 98.50%, which is a A"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = CourseReport::build(&Grades::new(), &GradeWeights::default());
        let lines = report.lines();
        assert_eq!(lines[0], "No grades submitted yet.");
        assert_eq!(lines[1], INCOMPLETE_MESSAGE);
        assert_eq!(report.optimistic_letter_grade, LetterGrade::A);
    }

    #[test]
    fn test_report_json_shape() {
        let grades = grades_from(&[(Category::Midterm, 88.0)]);
        let report = CourseReport::build(&grades, &GradeWeights::default());

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["grades"]["midterm"], 88.0);
        assert!(value["percentage"].is_null());
        assert!(value["letter_grade"].is_null());
        assert_eq!(value["missing"][0], "quiz_1");
        assert_eq!(value["weights"]["final"], 0.3);
        assert_eq!(value["optimistic_letter_grade"], "A");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.879), "87.90");
        assert_eq!(format_percent(1.0), "100.00");
        assert_eq!(format_percent(0.0), "0.00");
    }

    #[test]
    fn test_format_percent_truncates() {
        assert_eq!(format_percent(0.89996), "89.99");
        assert_eq!(format_percent(0.92999), "92.99");
        assert_eq!(format_percent(0.12345), "12.34");
    }

    #[test]
    fn test_percent_just_below_band_is_not_shown_on_threshold() {
        let grades = grades_from(&Category::ALL.map(|c| (c, 89.996)));
        let report = CourseReport::build(&grades, &GradeWeights::default());

        assert_eq!(report.letter_grade, Some(LetterGrade::BPlus));
        let lines = report.lines();
        assert_eq!(lines[1], "The letter grade with an overall 89.99% is B+");
        assert!(lines[2].ends_with("89.99%, which is a B+"));
    }
}
