//! Persistence Diagrams of Sampled Functions
//!
//! The diagram produced by the superlevel-set sweep keeps **one pair per
//! input sample**, in sample order. Each pair starts as `(y, y)`; when a
//! sample is the representative (birth peak) of a component that gets
//! absorbed at a saddle, its death coordinate is lowered to the saddle
//! height. Pairs with `birth == death` are trivial and carry no feature.
//!
//! ## Total persistence
//!
//! The Lp aggregate over all pairs:
//!
//!   TP_p = ( Σᵢ |bᵢ - dᵢ|^p )^(1/p)
//!
//! Trivial pairs contribute nothing, so keeping them in the diagram does
//! not change any of the summaries below.

use std::fmt;
use std::ops::Index;

use ndarray::Array2;
use serde::Serialize;

use crate::error::{Result, TopfError};

/// A (birth, death) pair of the 0-dimensional superlevel-set filtration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersistencePair {
    pub birth: f64,
    pub death: f64,
}

impl PersistencePair {
    pub fn new(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        (self.birth - self.death).abs()
    }

    /// A pair that was never extended by a merge
    pub fn is_trivial(&self) -> bool {
        self.birth == self.death
    }
}

/// Persistence diagram: one pair per sample, in sample order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PersistenceDiagram {
    pairs: Vec<PersistencePair>,
}

impl PersistenceDiagram {
    pub fn new(pairs: Vec<PersistencePair>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PersistencePair> {
        self.pairs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersistencePair> {
        self.pairs.iter()
    }

    pub fn pairs(&self) -> &[PersistencePair] {
        &self.pairs
    }

    /// Non-trivial pairs, i.e. the actual topological features
    pub fn features(&self) -> impl Iterator<Item = &PersistencePair> + '_ {
        self.pairs.iter().filter(|p| !p.is_trivial())
    }

    /// Lp total persistence, `(Σ |birth - death|^p)^(1/p)`
    ///
    /// `p` must be finite and strictly positive.
    pub fn total_persistence(&self, p: f64) -> Result<f64> {
        if !(p.is_finite() && p > 0.0) {
            return Err(TopfError::InvalidExponent { p });
        }

        let sum: f64 = self.pairs.iter()
            .map(|pair| pair.persistence().powf(p))
            .sum();

        Ok(sum.powf(1.0 / p))
    }

    /// Largest lifetime in the diagram (0 for an empty diagram)
    pub fn max_persistence(&self) -> f64 {
        self.pairs.iter()
            .map(|pair| pair.persistence())
            .fold(0.0, f64::max)
    }

    /// N×2 array with birth in column 0 and death in column 1
    pub fn to_array(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.pairs.len(), 2));
        for (i, pair) in self.pairs.iter().enumerate() {
            out[[i, 0]] = pair.birth;
            out[[i, 1]] = pair.death;
        }
        out
    }
}

impl Index<usize> for PersistenceDiagram {
    type Output = PersistencePair;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pairs[index]
    }
}

impl<'a> IntoIterator for &'a PersistenceDiagram {
    type Item = &'a PersistencePair;
    type IntoIter = std::slice::Iter<'a, PersistencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl fmt::Display for PersistenceDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", pair.birth, pair.death)?;
        }
        write!(f, "]")
    }
}
