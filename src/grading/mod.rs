//! Course grade calculation.
//!
//! Scores are kept per [`category::Category`], weighted by
//! [`weights::GradeWeights`] and turned into a percentage and a letter grade
//! by the functions in [`calculator`].

pub mod calculator;
pub mod category;
pub mod grade;
pub mod grades;
pub mod weights;
