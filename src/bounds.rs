//! Decision variable bounds.

use crate::error::ConfigError;

/// Whether a decision variable takes real or integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableKind {
    /// Real-valued; perturbed and sampled over the full `[lower, upper]` interval.
    Continuous,
    /// Integer-valued; bounds must be integral, perturbations round to
    /// the nearest integer in range.
    Discrete,
}

/// One dimension of the search space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionVariable {
    /// Variable name, used in diagnostics only.
    pub name: String,

    /// Lower bound (inclusive).
    pub lower: f64,

    /// Upper bound (inclusive).
    pub upper: f64,

    /// Continuous or discrete.
    pub kind: VariableKind,
}

impl DecisionVariable {
    /// Creates a continuous variable over `[lower, upper]`.
    pub fn continuous(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
            kind: VariableKind::Continuous,
        }
    }

    /// Creates a discrete variable over the integers in `[lower, upper]`.
    pub fn discrete(name: impl Into<String>, lower: i64, upper: i64) -> Self {
        Self {
            name: name.into(),
            lower: lower as f64,
            upper: upper as f64,
            kind: VariableKind::Discrete,
        }
    }

    /// Width of the variable's range.
    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Ordered sequence of decision variables.
///
/// The order is fixed for a run and defines the indexing of every
/// decision vector the engine produces or consumes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    vars: Vec<DecisionVariable>,
}

impl Bounds {
    pub fn new(vars: Vec<DecisionVariable>) -> Self {
        Self { vars }
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecisionVariable> {
        self.vars.iter()
    }

    /// Checks every variable: `lower <= upper`, and integral bounds for
    /// discrete variables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vars.is_empty() {
            return Err(ConfigError::EmptyBounds);
        }
        for var in &self.vars {
            if var.lower > var.upper {
                return Err(ConfigError::InvertedBounds {
                    name: var.name.clone(),
                    lower: var.lower,
                    upper: var.upper,
                });
            }
            if var.kind == VariableKind::Discrete
                && (var.lower.fract() != 0.0 || var.upper.fract() != 0.0)
            {
                return Err(ConfigError::NonIntegralBounds {
                    name: var.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Bounds {
    type Output = DecisionVariable;

    fn index(&self, index: usize) -> &DecisionVariable {
        &self.vars[index]
    }
}
