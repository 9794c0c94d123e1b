//! Category weights used in the course percentage.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{GradesError, Result};
use crate::grading::category::Category;
use crate::grading::grades::read_json_object;

/// Default share of the course grade for each category. Sums to 1.0.
static DEFAULT_WEIGHTS: &[(Category, f64)] = &[
    (Category::Quiz1, 0.10),
    (Category::Quiz2, 0.10),
    (Category::Midterm, 0.30),
    (Category::Project, 0.20),
    (Category::Final, 0.30),
];

const NORMALIZED_TOLERANCE: f64 = 1e-9;

/// Fraction of the course grade contributed by each category.
///
/// Every category always has a weight. The total is expected to be 1.0 but
/// is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GradeWeights {
    weights: BTreeMap<Category, f64>,
}

impl Default for GradeWeights {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS.iter().copied().collect(),
        }
    }
}

impl GradeWeights {
    /// Builds weights from explicit values, using the defaults for any
    /// category not listed.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        let mut weights = Self::default();
        weights.weights.extend(overrides);
        weights
    }

    /// Loads weight overrides from a JSON object such as `{"final": 0.4}`.
    ///
    /// Missing keys keep their default. Unknown keys are an error, and so is a
    /// top level that is not an object.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let object = read_json_object(path)?;
        let overrides: BTreeMap<Category, f64> = serde_json::from_value(Value::Object(object))
            .map_err(|source| GradesError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(overridden = overrides.len(), "Loaded weight overrides");
        let weights = Self::with_overrides(overrides);
        weights.warn_if_not_normalized();
        Ok(weights)
    }

    pub fn get(&self, category: Category) -> f64 {
        self.weights.get(&category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.weights.iter().map(|(c, w)| (*c, *w))
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= NORMALIZED_TOLERANCE
    }

    /// Logs a warning when the weights do not add up to 1.0.
    pub fn warn_if_not_normalized(&self) {
        if !self.is_normalized() {
            warn!(total = self.total(), "Grade weights do not sum to 1.0");
        }
    }
}
