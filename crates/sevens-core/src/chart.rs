//! Observed-versus-theoretical comparison data for renderers.

use serde::Serialize;

use crate::stats::{Stats, theoretical_distribution};

/// Smallest scale a chart uses, so an empty chart still has a usable axis.
const MIN_SCALE: f64 = 0.01;

/// One sum on the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonPoint {
    /// The dice sum (2-12).
    pub sum: u8,
    /// Observed share of rolls, as a fraction.
    pub observed: f64,
    /// Theoretical share, as a fraction.
    pub expected: f64,
}

impl ComparisonPoint {
    /// Observed minus expected share.
    pub fn deviation(&self) -> f64 {
        self.observed - self.expected
    }
}

/// Both distributions on a shared scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    /// One point per sum, ascending.
    pub points: Vec<ComparisonPoint>,
    /// The largest value on either series (never below 0.01).
    pub scale: f64,
}

impl ComparisonChart {
    /// Build the chart from a statistics snapshot.
    pub fn from_stats(stats: &Stats) -> Self {
        let theory = theoretical_distribution();
        let points: Vec<ComparisonPoint> = theory
            .iter()
            .map(|(&sum, &expected)| ComparisonPoint {
                sum,
                observed: stats
                    .distribution_percentages
                    .get(&sum)
                    .copied()
                    .unwrap_or(0.0),
                expected,
            })
            .collect();

        let scale = points
            .iter()
            .flat_map(|p| [p.observed, p.expected])
            .fold(MIN_SCALE, f64::max);

        Self { points, scale }
    }

    /// Map a fraction onto 0.0-1.0 relative to the chart scale.
    pub fn normalized(&self, value: f64) -> f64 {
        (value / self.scale).clamp(0.0, 1.0)
    }
}
