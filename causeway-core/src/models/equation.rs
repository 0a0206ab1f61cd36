use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One term of a fitted structural equation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationTerm {
    /// Variable name, or `"intercept"` for the constant term.
    pub variable: String,
    pub coefficient: f64,
    pub std_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    /// 95% confidence interval (coefficient ± 1.96·SE).
    pub confidence_interval: (f64, f64),
}

/// A fitted linear structural equation for one effect variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralEquation {
    /// The effect (dependent) variable.
    pub dependent: String,
    /// Intercept first, then one term per cause in design-matrix order.
    pub terms: Vec<EquationTerm>,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    /// Residual standard error.
    pub std_error: f64,
    /// Goodness-of-fit map: `aic`, `bic`, `rmse`.
    pub fit: HashMap<String, f64>,
    /// Number of samples the equation was fitted on.
    pub sample_count: usize,
    /// OLS modeling assumptions, attached for documentation only —
    /// nothing here verifies them.
    pub assumptions: Vec<String>,
}

impl StructuralEquation {
    /// The cause variables of this equation (every term except the intercept).
    pub fn causes(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(|t| t.variable != "intercept")
            .map(|t| t.variable.as_str())
    }

    /// Coefficient of a named term, if present.
    pub fn coefficient(&self, variable: &str) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.variable == variable)
            .map(|t| t.coefficient)
    }
}

/// The fixed OLS assumption list attached to every fitted equation.
pub fn standard_assumptions() -> Vec<String> {
    [
        "linear relationship between causes and effect",
        "independent residuals",
        "homoscedastic residuals",
        "normally distributed residuals",
        "no perfect multicollinearity",
        "correct model specification",
        "no measurement error in causes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
