//! Poisson probability mass and cumulative distribution, truncated to the
//! small goal counts the score grid cares about.

/// P(X = k) for X ~ Poisson(lambda).
#[inline]
pub fn pmf(k: u8, lambda: f64) -> f64 {
    let mut factorial = 1.0;
    for i in 2..=k as u32 {
        factorial *= i as f64;
    }
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial
}

/// P(X <= k) by direct summation of the mass function.
#[inline]
pub fn cdf(k: u8, lambda: f64) -> f64 {
    (0..=k).map(|i| pmf(i, lambda)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn test_pmf() {
        assert_float_relative_eq!(0.36787944117144233, pmf(0, 1.0));
        assert_float_relative_eq!(0.36787944117144233, pmf(1, 1.0));
        assert_float_relative_eq!(0.18393972058572117, pmf(2, 1.0));
        assert_float_relative_eq!(0.0820849986238988, pmf(0, 2.5));
        assert_float_relative_eq!(0.205212496559747, pmf(1, 2.5));
        assert_float_relative_eq!(0.25651562069968376, pmf(2, 2.5));
    }

    #[test]
    fn test_cdf() {
        assert_float_relative_eq!(pmf(0, 2.5) + pmf(1, 2.5) + pmf(2, 2.5), cdf(2, 2.5));
        assert_float_relative_eq!(1.0, cdf(40, 3.2));
    }

    #[test]
    fn pmf_sums_toward_one() {
        let total: f64 = (0..=12).map(|k| pmf(k, 3.2)).sum();
        assert!(total > 0.9999, "total: {total}");
        assert!(total <= 1.0, "total: {total}");
    }
}
