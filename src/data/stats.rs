//! Descriptive statistics over a list of scores.

use thiserror::Error;

/// Mean and extrema of a non-empty score list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicStats {
    /// Arithmetic mean, accumulated strictly left to right.
    pub mean: f64,

    /// Smallest score.
    pub min: f64,

    /// Largest score.
    pub max: f64,
}

/// The score list had no entries, so there is nothing to summarize.
///
/// This is the "no data" outcome, distinct from a list of zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no scores to summarize")]
pub struct EmptyScores;

/// Compute mean, minimum and maximum in a single pass.
///
/// Summation order is fixed (index 0 upwards), so identical input yields a
/// bit-identical mean. If the running sum of finite scores overflows, the
/// mean is recomputed in the same order from `x / n` terms. The mean is
/// clamped into `[min, max]` to absorb rounding.
///
/// # Returns
/// `Err(EmptyScores)` for an empty slice.
pub fn compute_basic_stats(scores: &[f64]) -> Result<BasicStats, EmptyScores> {
    let first = *scores.first().ok_or(EmptyScores)?;
    let n = scores.len() as f64;

    let mut sum = 0.0;
    let mut min = first;
    let mut max = first;

    for &x in scores {
        sum += x;
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    let mut mean = sum / n;
    if !mean.is_finite() && min.is_finite() && max.is_finite() {
        mean = scores.iter().fold(0.0, |acc, &x| acc + x / n);
    }

    Ok(BasicStats {
        mean: clamp_mean(mean, min, max),
        min,
        max,
    })
}

#[inline]
fn clamp_mean(mean: f64, min: f64, max: f64) -> f64 {
    if mean < min {
        min
    } else if mean > max {
        max
    } else {
        mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats_simple() {
        let stats = compute_basic_stats(&[7.5, 8.0, 5.0]).unwrap();

        assert!((stats.mean - 6.833_333_333_333_333).abs() < 1e-12);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 8.0);
    }

    #[test]
    fn test_basic_stats_empty() {
        assert_eq!(compute_basic_stats(&[]), Err(EmptyScores));
    }

    #[test]
    fn test_all_zero_is_not_empty() {
        let stats = compute_basic_stats(&[0.0, 0.0]).unwrap();
        assert_eq!(stats, BasicStats { mean: 0.0, min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_single_score() {
        let stats = compute_basic_stats(&[4.25]).unwrap();
        assert_eq!(stats, BasicStats { mean: 4.25, min: 4.25, max: 4.25 });
    }

    #[test]
    fn test_mean_uses_left_to_right_sum() {
        let scores = [0.1, 0.2, 0.3, 9.7, 3.3];
        let mut sum = 0.0;
        for s in scores {
            sum += s;
        }
        let stats = compute_basic_stats(&scores).unwrap();
        assert_eq!(stats.mean.to_bits(), (sum / 5.0).to_bits());
    }

    #[test]
    fn test_reversed_input_keeps_extrema() {
        let scores = vec![3.0, 9.5, 0.0, 6.25, 10.0, 1.5];
        let mut reversed = scores.clone();
        reversed.reverse();

        let a = compute_basic_stats(&scores).unwrap();
        let b = compute_basic_stats(&reversed).unwrap();
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
        assert!((a.mean - b.mean).abs() < 1e-12);
        assert!(a.min <= a.mean && a.mean <= a.max);
    }

    #[test]
    fn test_huge_scores_do_not_overflow_mean() {
        let stats = compute_basic_stats(&[1e308, 1e308]).unwrap();
        assert_eq!(stats.mean, 1e308);

        let stats = compute_basic_stats(&[f64::MAX, f64::MAX, 0.0]).unwrap();
        assert!(stats.mean.is_finite());
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);

        let stats = compute_basic_stats(&[1e308, 1e308, 1e308]).unwrap();
        assert!(stats.mean <= stats.max);
    }

    #[test]
    fn test_mean_stays_within_extrema() {
        let stats = compute_basic_stats(&[0.1, 0.1, 0.1]).unwrap();
        assert_eq!(stats.mean, 0.1);
    }
}
