//! Peak-Count Filtering
//!
//! Keeps the `k` most persistent samples of a persistence array and zeroes
//! the rest. The threshold is the k-th largest persistence value; samples
//! at or above it survive, so ties at the threshold keep *more* than `k`
//! samples rather than breaking the tie arbitrarily.
//!
//! Filtering never fails. Requests that cannot be met exactly degrade to
//! returning a superset of the requested peaks and report a
//! [`FilterWarning`] to the caller.

use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Non-fatal diagnostic produced while filtering by peak count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterWarning {
    /// More peaks were requested than there are samples; all are returned.
    PeakCountExceedsSamples { requested: usize, available: usize },
    /// The k-th and (k+1)-th largest persistence values coincide, so more
    /// than `requested` peaks survive the threshold.
    DuplicatePersistence { requested: usize, threshold: f64 },
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterWarning::PeakCountExceedsSamples { requested, available } => write!(
                f,
                "specified {} peaks, but only {} are available; returning all of them",
                requested, available
            ),
            FilterWarning::DuplicatePersistence { requested, threshold } => write!(
                f,
                "duplicate persistence values at threshold {}; cannot keep exactly {} peaks, more will be returned",
                threshold, requested
            ),
        }
    }
}

/// Zero out every persistence value below the `n_peaks`-th largest one
///
/// Returns a warning when the request could not be satisfied exactly.
/// A count of zero leaves the values untouched.
pub fn filter_peaks(persistence: &mut [f64], n_peaks: usize) -> Option<FilterWarning> {
    let n = persistence.len();
    if n == 0 || n_peaks == 0 {
        return None;
    }

    let mut sorted = persistence.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let (k, warning) = if n_peaks == n {
        (n, None)
    } else if n_peaks > n {
        (n, Some(FilterWarning::PeakCountExceedsSamples {
            requested: n_peaks,
            available: n,
        }))
    } else if sorted[n_peaks - 1] == sorted[n_peaks] {
        (n_peaks, Some(FilterWarning::DuplicatePersistence {
            requested: n_peaks,
            threshold: sorted[n_peaks - 1],
        }))
    } else {
        (n_peaks, None)
    };

    let threshold = sorted[k - 1];
    let mut zeroed = 0usize;
    for value in persistence.iter_mut() {
        if *value < threshold {
            *value = 0.0;
            zeroed += 1;
        }
    }

    debug!(n_peaks, threshold, zeroed, "filtered persistence by peak count");

    warning
}
