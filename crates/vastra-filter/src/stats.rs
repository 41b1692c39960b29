//! Luminance statistics

use vastra_core::GrayBuffer;

/// First and second moments of a luminance grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayStats {
    pub mean: f64,
    /// Mean squared deviation from the mean (population variance)
    pub variance: f64,
    pub std_dev: f64,
}

/// Compute mean, variance and standard deviation in one pass.
pub fn gray_stats(gray: &GrayBuffer) -> GrayStats {
    let n = gray.data().len() as f64;
    let (sum, sum_sq) = gray.data().iter().fold((0u64, 0u64), |(s, sq), &v| {
        let v = u64::from(v);
        (s + v, sq + v * v)
    });
    let mean = sum as f64 / n;
    let variance = (sum_sq as f64 / n - mean * mean).max(0.0);
    GrayStats {
        mean,
        variance,
        std_dev: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_has_zero_variance() {
        let g = GrayBuffer::new_filled(10, 10, 77).unwrap();
        let s = gray_stats(&g);
        assert_eq!(s.mean, 77.0);
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_two_level() {
        // Half 0, half 100: mean 50, variance 2500
        let g = GrayBuffer::from_raw(2, 2, vec![0, 100, 100, 0]).unwrap();
        let s = gray_stats(&g);
        assert!((s.mean - 50.0).abs() < 1e-9);
        assert!((s.variance - 2500.0).abs() < 1e-9);
        assert!((s.std_dev - 50.0).abs() < 1e-9);
    }
}
