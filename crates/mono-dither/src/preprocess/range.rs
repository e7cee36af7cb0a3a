//! Percentile-clipped luminance range analysis.

use crate::api::ConvertError;
use crate::color::StretchRange;

/// Default share of samples, in percent, clipped from each end.
pub const DEFAULT_PERCENTILE: u8 = 2;

/// Outcome of range analysis over a luminance population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAnalysis {
    /// Stretch the image onto this range.
    Stretch(StretchRange),
    /// Every sample has this value; there is nothing to stretch.
    Flat(u8),
}

/// Sample counts per luminance value, queried by rank as if sorted.
struct Histogram {
    counts: [usize; 256],
}

impl Histogram {
    fn new(samples: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        for &s in samples {
            counts[s as usize] += 1;
        }
        Self { counts }
    }

    /// The value at position `rank` of the ascending sort.
    fn nth(&self, rank: usize) -> u8 {
        let mut seen = 0;
        for (value, &count) in self.counts.iter().enumerate() {
            seen += count;
            if rank < seen {
                return value as u8;
            }
        }
        255
    }
}

/// Derive the stretch range for a luminance population.
///
/// With `n` samples the bottom and top `n * percentile / 100` samples are
/// treated as outliers. If that leaves an empty range the top clip is
/// dropped, then the bottom clip too. A population of one distinct value
/// yields [`RangeAnalysis::Flat`].
///
/// # Errors
///
/// [`ConvertError::EmptyImage`] for an empty population and
/// [`ConvertError::InvalidPercentile`] for `percentile >= 50`.
pub fn analyze_range(samples: &[u8], percentile: u8) -> Result<RangeAnalysis, ConvertError> {
    if percentile >= 50 {
        return Err(ConvertError::InvalidPercentile(percentile));
    }
    if samples.is_empty() {
        return Err(ConvertError::EmptyImage);
    }

    let n = samples.len();
    let offset = n * usize::from(percentile) / 100;
    let sorted = Histogram::new(samples);

    let mut min = sorted.nth(offset);
    let mut max = sorted.nth(n - 1 - offset);

    if min >= max {
        max = sorted.nth(n - 1);
    }
    if min >= max {
        min = sorted.nth(0);
    }

    let analysis = match StretchRange::new(min, max) {
        Some(range) => RangeAnalysis::Stretch(range),
        None => RangeAnalysis::Flat(min),
    };
    tracing::debug!(samples = n, offset, ?analysis, "Analysed luminance range");
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stretch(min: u8, max: u8) -> RangeAnalysis {
        RangeAnalysis::Stretch(StretchRange::new(min, max).unwrap())
    }

    #[test]
    fn test_two_values_without_clip() {
        assert_eq!(analyze_range(&[0, 255], 0).unwrap(), stretch(0, 255));
        assert_eq!(analyze_range(&[255, 0, 0, 255], 0).unwrap(), stretch(0, 255));
    }

    #[test]
    fn test_clip_discards_outliers() {
        // 100 samples: one black and one white outlier, the rest 100..=197
        let mut samples: Vec<u8> = (100..198).collect();
        samples.push(0);
        samples.push(255);
        assert_eq!(analyze_range(&samples, 2).unwrap(), stretch(101, 196));
        assert_eq!(analyze_range(&samples, 0).unwrap(), stretch(0, 255));
    }

    #[test]
    fn test_top_clip_dropped_when_range_collapses() {
        // 98 black pixels and 2 white ones: the 2% clip removes both whites.
        let mut samples = vec![0u8; 98];
        samples.extend([255, 255]);
        assert_eq!(analyze_range(&samples, 2).unwrap(), stretch(0, 255));
    }

    #[test]
    fn test_bottom_clip_dropped_when_range_collapses() {
        // 2 black pixels and 98 white ones.
        let mut samples = vec![255u8; 98];
        samples.extend([0, 0]);
        assert_eq!(analyze_range(&samples, 2).unwrap(), stretch(0, 255));
    }

    #[test]
    fn test_top_clip_dropped_before_bottom_clip() {
        // One black outlier, a flat body and two whites. Dropping the top
        // clip alone already yields a range, so the black stays clipped.
        let mut samples = vec![0u8];
        samples.extend([50u8; 97]);
        samples.extend([255, 255]);
        assert_eq!(analyze_range(&samples, 2).unwrap(), stretch(50, 255));
    }

    #[test]
    fn test_flat_population() {
        assert_eq!(
            analyze_range(&[77; 500], 2).unwrap(),
            RangeAnalysis::Flat(77)
        );
        assert_eq!(analyze_range(&[9], 0).unwrap(), RangeAnalysis::Flat(9));
    }

    #[test]
    fn test_clipping_never_inverts() {
        for percentile in [0u8, 1, 2, 10, 25, 49] {
            for split in [1usize, 3, 50, 97, 99] {
                let mut samples = vec![30u8; split];
                samples.extend(vec![220u8; 100 - split]);
                match analyze_range(&samples, percentile).unwrap() {
                    RangeAnalysis::Stretch(r) => assert!(r.min() < r.max()),
                    RangeAnalysis::Flat(v) => panic!("two values reported flat at {v}"),
                }
            }
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(analyze_range(&[], 2), Err(ConvertError::EmptyImage));
        assert_eq!(
            analyze_range(&[1, 2], 50),
            Err(ConvertError::InvalidPercentile(50))
        );
    }
}
