//! Descriptive statistics over a sample.

use num_traits::Float;

/// Arithmetic mean of a sample: sum divided by n.
///
/// Requires a non-empty sample; the result is undefined for n = 0. Callers in
/// this crate check sample size before invoking.
pub fn mean<T>(sample: &[T]) -> T
where
    T: Float,
{
    let sum = sample.iter().fold(T::zero(), |acc, &value| acc + value);
    sum / T::from(sample.len()).unwrap()
}

/// Unbiased (Bessel-corrected) sample standard deviation.
///
/// Square root of the sum of squared deviations from the mean divided by
/// (n − 1). Requires n ≥ 2; callers in this crate check sample size before
/// invoking.
pub fn sample_std_dev<T>(sample: &[T]) -> T
where
    T: Float,
{
    let m = mean(sample);
    let sum_sq_dev = sample.iter().fold(T::zero(), |acc, &value| {
        let dev = value - m;
        acc + dev * dev
    });
    (sum_sq_dev / T::from(sample.len() - 1).unwrap()).sqrt()
}
