use serde::Serialize;
use std::fmt;

/// Letter grade bands, declared from lowest to highest so the derived `Ord`
/// follows grade quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LetterGrade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
}

/// Minimum course percentage for each band, highest first. Anything below the
/// last entry is an F.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 0.93 | A     |
/// | >= 0.90 | A-    |
/// | >= 0.87 | B+    |
/// | >= 0.83 | B     |
/// | >= 0.80 | B-    |
/// | >= 0.77 | C+    |
/// | >= 0.73 | C     |
/// | >= 0.70 | C-    |
/// | >= 0.67 | D+    |
/// | >= 0.63 | D     |
/// | >= 0.60 | D-    |
/// | < 0.60  | F     |
pub static BANDS: &[(f64, LetterGrade)] = &[
    (0.93, LetterGrade::A),
    (0.90, LetterGrade::AMinus),
    (0.87, LetterGrade::BPlus),
    (0.83, LetterGrade::B),
    (0.80, LetterGrade::BMinus),
    (0.77, LetterGrade::CPlus),
    (0.73, LetterGrade::C),
    (0.70, LetterGrade::CMinus),
    (0.67, LetterGrade::DPlus),
    (0.63, LetterGrade::D),
    (0.60, LetterGrade::DMinus),
];

impl LetterGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a course proportion (0.0–1.0) into a letter grade.
pub fn grade(p: f64) -> LetterGrade {
    BANDS
        .iter()
        .find(|(min, _)| p >= *min)
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}
