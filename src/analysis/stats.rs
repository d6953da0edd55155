use crate::structs::{HrError, Result};

/// Arithmetic mean, `None` for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient between two variables
///
/// Returns `Ok(None)` when either variable has zero variance, since the
/// coefficient is undefined there.
///
/// # Errors
/// Returns error if vectors have different lengths or fewer than 2 values
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    if x.len() != y.len() {
        return Err(HrError::Computation(format!(
            "correlation inputs differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(HrError::Computation(
            "Need at least 2 values for correlation".into(),
        ));
    }

    let (Some(mean_x), Some(mean_y)) = (mean(x), mean(y)) else {
        return Ok(None);
    };

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Ok(None);
    }

    Ok(Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        let m = mean(&[1.0, 2.0, 3.0, 4.0]).expect("mean");
        assert!((m - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let corr = pearson(&x, &y).expect("correlate").expect("defined");

        assert!((corr - 1.0).abs() < 0.01); // Perfect positive correlation
    }

    #[test]
    fn test_negative_correlation() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![1.0, 0.0, -1.0];
        let corr = pearson(&x, &y).expect("correlate").expect("defined");

        assert!((corr + 1.0).abs() < 0.01);
    }

    #[test]
    fn test_constant_column_is_undefined() {
        let x = vec![3.0, 3.0, 3.0];
        let y = vec![0.0, 1.0, 0.0];
        assert_eq!(pearson(&x, &y).expect("correlate"), None);
        assert_eq!(pearson(&y, &x).expect("correlate"), None);
    }

    #[test]
    fn test_bad_inputs() {
        assert!(matches!(
            pearson(&[1.0, 2.0], &[1.0]),
            Err(HrError::Computation(_))
        ));
        assert!(matches!(pearson(&[1.0], &[1.0]), Err(HrError::Computation(_))));
    }
}
