//! Ordinary least squares over a dense design matrix.
//!
//! Primary path solves the normal equations `(X'X)⁻¹X'y`. The normal
//! path is abandoned whenever `X'X` fails a conditioning check (not only
//! on exactly zero determinant), in which case coefficients and the
//! covariance diagonal come from an SVD pseudo-inverse.

use nalgebra::{DMatrix, DVector};

use causeway_core::constants::EPSILON;
use causeway_core::{stats, AnalysisError, AnalysisResult};

/// Relative determinant threshold below which `X'X` is treated as singular.
const CONDITION_THRESHOLD: f64 = 1e-12;

/// A fitted least-squares solution, intercept column first.
#[derive(Debug, Clone)]
pub struct OlsFit {
    pub coefficients: Vec<f64>,
    pub std_errors: Vec<f64>,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    /// Residual standard error.
    pub residual_std_error: f64,
    pub aic: f64,
    pub bic: f64,
    pub rmse: f64,
    pub sample_count: usize,
    /// Whether the SVD pseudo-inverse fallback was taken.
    pub used_pseudo_inverse: bool,
}

/// Fit `y = X·β` where `rows` are design-matrix rows WITHOUT the intercept
/// column; a leading column of ones is appended here.
pub fn fit(rows: &[Vec<f64>], y: &[f64]) -> AnalysisResult<OlsFit> {
    let n = rows.len();
    let k = rows.first().map(|r| r.len()).unwrap_or(0);
    let p = k + 1; // parameters including intercept
    if n < p + 1 {
        return Err(AnalysisError::InsufficientData { needed: p + 1, got: n });
    }
    if y.len() != n {
        return Err(AnalysisError::InsufficientData { needed: n, got: y.len() });
    }

    let x = DMatrix::from_fn(n, p, |i, j| if j == 0 { 1.0 } else { rows[i][j - 1] });
    let y_vec = DVector::from_column_slice(y);

    let xtx = x.transpose() * &x;
    let xty = x.transpose() * &y_vec;

    // Conditioning check: scale the determinant by the diagonal magnitude
    // so large well-conditioned systems are not misclassified.
    let det = xtx.determinant();
    let scale = xtx
        .diagonal()
        .iter()
        .map(|d| d.abs().max(1.0))
        .product::<f64>();
    let ill_conditioned = !det.is_finite() || det.abs() <= CONDITION_THRESHOLD * scale;

    let (inverse, used_pseudo_inverse) = if ill_conditioned {
        (pseudo_inverse(&xtx)?, true)
    } else {
        match xtx.clone().try_inverse() {
            Some(inv) => (inv, false),
            None => (pseudo_inverse(&xtx)?, true),
        }
    };

    let beta = &inverse * xty;
    let residuals = &y_vec - &x * &beta;
    let sse: f64 = residuals.iter().map(|r| r * r).sum();

    let mean_y = stats::mean(y);
    let sst: f64 = y.iter().map(|v| (v - mean_y).powi(2)).sum();
    let r_squared = if sst > EPSILON {
        (1.0 - sse / sst).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let adjusted_r_squared = if n > p {
        1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / (n as f64 - p as f64)
    } else {
        r_squared
    };

    let dof = n.saturating_sub(p);
    let residual_variance = if dof > 0 {
        sse / dof as f64
    } else {
        sse / n as f64
    };
    let std_errors: Vec<f64> = (0..p)
        .map(|j| (residual_variance * inverse[(j, j)].max(0.0)).sqrt())
        .collect();

    // Gaussian log-likelihood approximation for AIC/BIC.
    let variance_hat = (sse / n as f64).max(EPSILON);
    let log_likelihood =
        -0.5 * n as f64 * ((2.0 * std::f64::consts::PI).ln() + variance_hat.ln() + 1.0);
    let aic = 2.0 * p as f64 - 2.0 * log_likelihood;
    let bic = (n as f64).ln() * p as f64 - 2.0 * log_likelihood;

    Ok(OlsFit {
        coefficients: beta.iter().copied().collect(),
        std_errors,
        r_squared,
        adjusted_r_squared,
        residual_std_error: residual_variance.sqrt(),
        aic,
        bic,
        rmse: (sse / n as f64).sqrt(),
        sample_count: n,
        used_pseudo_inverse,
    })
}

fn pseudo_inverse(xtx: &DMatrix<f64>) -> AnalysisResult<DMatrix<f64>> {
    xtx.clone()
        .svd(true, true)
        .pseudo_inverse(CONDITION_THRESHOLD)
        .map_err(|reason| AnalysisError::Singular {
            context: format!("SVD pseudo-inverse failed: {reason}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        // y = 5 + 2x, no noise.
        let rows: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| 5.0 + 2.0 * i as f64).collect();
        let fit = fit(&rows, &y).unwrap();
        assert!((fit.coefficients[0] - 5.0).abs() < 1e-8);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-8);
        assert!(fit.r_squared > 0.999);
        assert!(!fit.used_pseudo_inverse);
    }

    #[test]
    fn collinear_design_takes_pseudo_inverse() {
        // Second predictor is an exact copy of the first: X'X is singular.
        let rows: Vec<Vec<f64>> = (0..12).map(|i| vec![i as f64, i as f64]).collect();
        let y: Vec<f64> = (0..12).map(|i| 1.0 + 3.0 * i as f64).collect();
        let fit = fit(&rows, &y).unwrap();
        assert!(fit.used_pseudo_inverse);
        // The pseudo-inverse splits the shared coefficient; the combined
        // slope is still recovered.
        assert!((fit.coefficients[1] + fit.coefficients[2] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn too_few_samples_is_an_error() {
        let rows = vec![vec![1.0], vec![2.0]];
        let y = vec![1.0, 2.0];
        assert!(matches!(
            fit(&rows, &y),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }
}
