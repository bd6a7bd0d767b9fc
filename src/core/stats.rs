//! Small pure statistics helpers shared by the scorers and classifiers.

/// Arithmetic mean; 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for an empty slice
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Successive first differences: `out[i] = values[i+1] - values[i]`
pub fn step_differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Percentile rank of `value` within `population`: the share of entries
/// less than or equal to it, on a 0-100 scale. 0 for an empty population.
pub fn percentile_rank(population: &[f64], value: f64) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let at_or_below = population.iter().filter(|&&v| v <= value).count();
    100.0 * at_or_below as f64 / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn std_dev_of_constant_series_is_zero() {
        assert_eq!(std_dev(&[0.5, 0.5, 0.5]), 0.0);
    }

    #[test]
    fn step_differences_have_one_fewer_entry() {
        assert_eq!(step_differences(&[1.0, 3.0, 2.0]), vec![2.0, -1.0]);
        assert!(step_differences(&[1.0]).is_empty());
    }

    #[test]
    fn percentile_rank_counts_inclusive() {
        let pop = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile_rank(&pop, 2.0), 50.0);
        assert_eq!(percentile_rank(&pop, 4.0), 100.0);
        assert_eq!(percentile_rank(&pop, 0.5), 0.0);
    }
}
