//! Persistence Transform of a Sampled Function
//!
//! Turns a sequence of `(x, y)` samples into `(x, persistence)` pairs by
//! sweeping the superlevel sets of the piecewise-linear function through
//! the samples, from the highest value down to the lowest.
//!
//! ## Sweep
//!
//! Samples are visited in descending `y`; equal heights are visited in
//! sequence order, so the left-most point of a plateau comes first.
//! Adjacency is by position in the sequence, never by distance in `x`.
//! For each interior sample with neighbours `l` and `r`:
//!
//! - `y_l >= y <= y_r` (saddle): the neighbour components meet. The one
//!   whose birth peak is lower is the younger; it dies here with
//!   persistence `peak - y`. It is merged through the current sample into
//!   the elder component, whose representative stays authoritative.
//! - not a strict local maximum (regular): the sample joins the neighbour
//!   component with the taller birth peak. No pair is created.
//! - strict local maximum: a new component is born.
//!
//! Boundary samples take no merge action. After the sweep, the global
//! maximum is paired with the global minimum so the tallest feature is
//! always reported, even for monotone input.

use std::cmp::Ordering;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::diagram::{PersistenceDiagram, PersistencePair};
use super::filter::{filter_peaks, FilterWarning};
use super::union_find::UnionFind;
use crate::error::{Result, TopfError};

/// Options controlling a persistence transform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Also build the persistence diagram
    pub calculate_persistence_diagram: bool,
    /// Keep only this many most persistent peaks
    pub n_peaks: Option<usize>,
}

impl TransformerConfig {
    pub fn with_diagram(mut self, enabled: bool) -> Self {
        self.calculate_persistence_diagram = enabled;
        self
    }

    pub fn with_n_peaks(mut self, n_peaks: usize) -> Self {
        self.n_peaks = Some(n_peaks);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_peaks == Some(0) {
            return Err(TopfError::InvalidPeakCount);
        }
        Ok(())
    }
}

/// Result of a single transform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transformed {
    /// `(x, persistence)` in input order
    pub points: Vec<(f64, f64)>,
    /// Present only when the diagram was requested
    pub diagram: Option<PersistenceDiagram>,
    /// Diagnostics from peak-count filtering
    pub warnings: Vec<FilterWarning>,
}

impl Transformed {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Persistence values without the `x` coordinates
    pub fn persistence(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, p)| p).collect()
    }

    /// Indices of samples that carry a surviving feature
    pub fn peak_indices(&self) -> Vec<usize> {
        self.points.iter()
            .enumerate()
            .filter(|(_, point)| point.1 > 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Compute the persistence transform of `samples`
///
/// Fails on empty input, non-finite function values, or `n_peaks == 0`.
/// Nothing is computed before validation succeeds.
pub fn transform(samples: &[(f64, f64)], config: &TransformerConfig) -> Result<Transformed> {
    config.validate()?;

    if samples.is_empty() {
        return Err(TopfError::EmptyInput);
    }
    if let Some(index) = samples.iter().position(|&(_, y)| !y.is_finite()) {
        return Err(TopfError::NonFiniteInput { index });
    }

    let n = samples.len();
    let ys: Vec<f64> = samples.iter().map(|&(_, y)| y).collect();

    // Stable sort: equal heights keep sequence order
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| ys[b].partial_cmp(&ys[a]).unwrap_or(Ordering::Equal));

    let mut pairs: Option<Vec<PersistencePair>> = config.calculate_persistence_diagram
        .then(|| ys.iter().map(|&y| PersistencePair::new(y, y)).collect());

    let mut uf = UnionFind::new(n);
    let mut persistence = vec![0.0; n];
    let mut n_saddles = 0usize;

    for &i in &order {
        // Boundary samples are left alone
        if i == 0 || i + 1 == n {
            continue;
        }

        let (left, right) = (i - 1, i + 1);
        let (y, y_left, y_right) = (ys[i], ys[left], ys[right]);

        if y_left >= y && y <= y_right {
            let root_left = uf.find(left);
            let root_right = uf.find(right);

            let (younger, young_side, elder_side) = if ys[root_left] < ys[root_right] {
                (root_left, left, right)
            } else {
                (root_right, right, left)
            };

            persistence[younger] = ys[younger] - y;
            if let Some(pairs) = pairs.as_mut() {
                pairs[younger].death = y;
            }

            uf.merge(young_side, i);
            uf.merge(i, elder_side);
            n_saddles += 1;
        } else if !(y > y_left && y > y_right) {
            if ys[uf.find(left)] < ys[uf.find(right)] {
                uf.merge(i, right);
            } else {
                uf.merge(i, left);
            }
        }
    }

    let global_max = order[0];
    let global_min = order[n - 1];
    persistence[global_max] = ys[global_max] - ys[global_min];
    if let Some(pairs) = pairs.as_mut() {
        pairs[global_max].death = ys[global_min];
    }

    debug!(n_samples = n, n_saddles, "persistence sweep finished");

    let mut warnings = Vec::new();
    if let Some(n_peaks) = config.n_peaks {
        warnings.extend(filter_peaks(&mut persistence, n_peaks));
    }

    let points = samples.iter()
        .zip(&persistence)
        .map(|(&(x, _), &p)| (x, p))
        .collect();

    Ok(Transformed {
        points,
        diagram: pairs.map(PersistenceDiagram::new),
        warnings,
    })
}

/// Transform an N×2 array whose columns are `x` and `y`
pub fn transform_array(a: &Array2<f64>, config: &TransformerConfig) -> Result<Transformed> {
    let (rows, cols) = a.dim();
    if rows == 0 {
        return Err(TopfError::EmptyInput);
    }
    if cols != 2 {
        return Err(TopfError::MalformedShape { rows, cols });
    }

    let samples: Vec<(f64, f64)> = a.outer_iter()
        .map(|row| (row[0], row[1]))
        .collect();

    transform(&samples, config)
}

/// Reusable transformer that keeps the diagram of its last run
///
/// Every call starts from a clean slate: the diagram and warnings of a
/// previous call never survive into the next one, even when it fails.
#[derive(Debug, Clone, Default)]
pub struct PersistenceTransformer {
    config: TransformerConfig,
    diagram: Option<PersistenceDiagram>,
    warnings: Vec<FilterWarning>,
}

impl PersistenceTransformer {
    pub fn new(config: TransformerConfig) -> Self {
        Self {
            config,
            diagram: None,
            warnings: Vec::new(),
        }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Transform `samples` into `(x, persistence)` pairs
    pub fn fit_transform(&mut self, samples: &[(f64, f64)]) -> Result<Vec<(f64, f64)>> {
        self.reset();
        let out = transform(samples, &self.config)?;
        self.diagram = out.diagram;
        self.warnings = out.warnings;
        Ok(out.points)
    }

    /// Array variant of [`fit_transform`](Self::fit_transform)
    pub fn fit_transform_array(&mut self, a: &Array2<f64>) -> Result<Array2<f64>> {
        self.reset();
        let out = transform_array(a, &self.config)?;
        let points = Array2::from_shape_fn((out.points.len(), 2), |(i, j)| {
            if j == 0 { out.points[i].0 } else { out.points[i].1 }
        });
        self.diagram = out.diagram;
        self.warnings = out.warnings;
        Ok(points)
    }

    /// Diagram of the last successful call, if it was requested
    pub fn persistence_diagram(&self) -> Option<&PersistenceDiagram> {
        self.diagram.as_ref()
    }

    /// Filtering diagnostics of the last call
    pub fn warnings(&self) -> &[FilterWarning] {
        &self.warnings
    }

    fn reset(&mut self) {
        self.diagram = None;
        self.warnings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn samples(ys: &[f64]) -> Vec<(f64, f64)> {
        ys.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect()
    }

    fn persistence_of(ys: &[f64]) -> Vec<f64> {
        transform(&samples(ys), &TransformerConfig::default())
            .unwrap()
            .persistence()
    }

    #[test]
    fn test_beketayev_first_function() {
        let p = persistence_of(&[3.0, 1.0, 6.0, 5.0, 8.0, 2.0, 7.0, 4.0]);
        assert_eq!(p, vec![2.0, 0.0, 1.0, 0.0, 7.0, 0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_beketayev_second_function() {
        let p = persistence_of(&[3.0, 1.0, 8.0, 2.0, 7.0, 5.0, 6.0, 4.0]);
        assert_eq!(p, vec![2.0, 0.0, 7.0, 0.0, 5.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_diagram_matches_persistence() {
        let config = TransformerConfig::default().with_diagram(true);
        let out = transform(&samples(&[3.0, 1.0, 8.0, 2.0, 7.0, 5.0, 6.0, 4.0]), &config).unwrap();
        let pd = out.diagram.as_ref().expect("diagram requested");

        assert_eq!(pd.len(), out.len());
        for (pair, &(_, p)) in pd.iter().zip(&out.points) {
            assert_eq!(pair.birth - pair.death, p);
        }
        assert_eq!(pd.total_persistence(1.0).unwrap(), 15.0);
        assert_eq!(pd[2], PersistencePair::new(8.0, 1.0));
    }

    #[test]
    fn test_x_values_are_passed_through() {
        let input = vec![(0.5, 1.0), (-2.0, 4.0), (10.0, 0.0)];
        let out = transform(&input, &TransformerConfig::default()).unwrap();
        let xs: Vec<f64> = out.points.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![0.5, -2.0, 10.0]);
    }

    #[test]
    fn test_monotone_sequence_reports_global_maximum() {
        assert_eq!(persistence_of(&[1.0, 2.0, 3.0]), vec![0.0, 0.0, 2.0]);
        assert_eq!(persistence_of(&[5.0, 3.0, 1.0, -1.0]), vec![6.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_and_constant_sequences() {
        assert_eq!(persistence_of(&[5.0]), vec![0.0]);
        assert_eq!(persistence_of(&[2.0, 2.0, 2.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_plateau_minima() {
        let config = TransformerConfig::default().with_diagram(true);
        let out = transform(&samples(&[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0]), &config).unwrap();
        assert_eq!(out.persistence(), vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(out.diagram.unwrap().total_persistence(1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_equal_peaks_left_one_is_elder() {
        // The left peak is visited first and survives as the global maximum
        assert_eq!(persistence_of(&[1.0, 3.0, 1.0, 3.0, 1.0]), vec![0.0, 2.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = transform(&[], &TransformerConfig::default()).unwrap_err();
        assert!(matches!(err, TopfError::EmptyInput));
    }

    #[test]
    fn test_non_finite_input_fails() {
        let err = transform(&samples(&[1.0, f64::NAN, 2.0]), &TransformerConfig::default())
            .unwrap_err();
        assert!(matches!(err, TopfError::NonFiniteInput { index: 1 }));
    }

    #[test]
    fn test_zero_peaks_rejected() {
        let config = TransformerConfig::default().with_n_peaks(0);
        let err = transform(&samples(&[1.0, 2.0]), &config).unwrap_err();
        assert!(matches!(err, TopfError::InvalidPeakCount));
    }

    #[test]
    fn test_peak_filtering() {
        let config = TransformerConfig::default().with_n_peaks(2);
        let out = transform(&samples(&[3.0, 1.0, 6.0, 5.0, 8.0, 2.0, 7.0, 4.0]), &config).unwrap();
        assert_eq!(out.peak_indices(), vec![4, 6]);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_peak_filtering_too_many_requested() {
        let config = TransformerConfig::default().with_n_peaks(100);
        let out = transform(&samples(&[3.0, 1.0, 6.0, 5.0, 8.0, 2.0, 7.0, 4.0]), &config).unwrap();
        assert_eq!(out.persistence(), vec![2.0, 0.0, 1.0, 0.0, 7.0, 0.0, 5.0, 0.0]);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_array_shape_is_checked() {
        let config = TransformerConfig::default();
        let bad = array![[0.0, 1.0, 2.0], [1.0, 2.0, 3.0]];
        assert!(matches!(
            transform_array(&bad, &config),
            Err(TopfError::MalformedShape { rows: 2, cols: 3 })
        ));

        let empty = Array2::<f64>::zeros((0, 2));
        assert!(matches!(transform_array(&empty, &config), Err(TopfError::EmptyInput)));
    }

    #[test]
    fn test_transformer_keeps_diagram_only_when_requested() {
        let a = samples(&[3.0, 1.0, 6.0, 5.0, 8.0, 2.0, 7.0, 4.0]);

        let mut plain = PersistenceTransformer::default();
        plain.fit_transform(&a).unwrap();
        assert!(plain.persistence_diagram().is_none());

        let mut with_diagram = PersistenceTransformer::new(
            TransformerConfig::default().with_diagram(true)
        );
        with_diagram.fit_transform(&a).unwrap();
        assert!(with_diagram.persistence_diagram().is_some());
    }

    #[test]
    fn test_transformer_does_not_leak_previous_diagram() {
        let mut t = PersistenceTransformer::new(TransformerConfig::default().with_diagram(true));
        t.fit_transform(&samples(&[1.0, 3.0, 2.0])).unwrap();
        assert!(t.persistence_diagram().is_some());

        assert!(t.fit_transform(&[]).is_err());
        assert!(t.persistence_diagram().is_none());
    }

    #[test]
    fn test_fit_transform_array() {
        let a = array![[0.0, 3.0], [1.0, 1.0], [2.0, 6.0], [3.0, 5.0]];
        let mut t = PersistenceTransformer::default();
        let out = t.fit_transform_array(&a).unwrap();
        assert_eq!(out.dim(), (4, 2));
        assert_eq!(out.column(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(out.column(1).to_vec(), vec![2.0, 0.0, 5.0, 0.0]);
    }
}
