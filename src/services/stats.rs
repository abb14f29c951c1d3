// Small statistical helpers shared by the predictor and the analytics engine

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, 0 for fewer than two values
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[28.0, 30.0, 26.0]), 28.0);
    }

    #[test]
    fn std_dev_of_identical_values_is_zero() {
        assert_eq!(population_std_dev(&[28.0, 28.0, 28.0]), 0.0);
    }

    #[test]
    fn std_dev_uses_the_population_formula() {
        // Deviations of -2 and +2 around a mean of 28
        let sigma = population_std_dev(&[26.0, 30.0]);
        assert!((sigma - 2.0).abs() < 1e-9);
    }

    #[test]
    fn std_dev_of_single_value_is_zero() {
        assert_eq!(population_std_dev(&[42.0]), 0.0);
    }
}
