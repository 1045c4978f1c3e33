//! Tokenization of free-form numeric input into a clean sample.

use log::debug;

/// Parse a free-text string of candidate numeric tokens into a sample.
///
/// The input is split on commas and whitespace runs. Each token is interpreted
/// as an `f64`; tokens that do not parse to a finite number are dropped
/// silently. This is a tolerance policy for noisy pasted data (stray labels,
/// doubled separators, "NaN" placeholders), not an error condition — skips are
/// traced at debug level only. The order of surviving values is preserved.
///
/// An input with no parseable tokens yields an empty vector; the interval
/// procedures reject that downstream with an explicit insufficient-data error.
///
/// # Example
/// ```
/// let sample = interval_statistics::parse_sample("12.3, 12.5, 12.7");
/// assert_eq!(sample, vec![12.3, 12.5, 12.7]);
/// ```
pub fn parse_sample(text: &str) -> Vec<f64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                debug!("dropping unparseable token {token:?}");
                None
            }
        })
        .collect()
}
