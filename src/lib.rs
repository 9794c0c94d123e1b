pub mod error;
pub mod grading;
pub mod output;
pub mod report;

pub use error::GradesError;
pub use grading::calculator::{
    calculate_course_percentage, calculate_letter_grade, calculate_optimistic_course_percentage,
};
pub use grading::category::Category;
pub use grading::grade::LetterGrade;
pub use grading::grades::Grades;
pub use grading::weights::GradeWeights;
pub use report::CourseReport;
