//! Topology Module: 0-Dimensional Persistence of Sampled Functions
//!
//! Implements the superlevel-set filtration of a function sampled at
//! ordered positions:
//! - Union-Find over sample indices with directional merges
//! - Merge-tree sweep producing per-sample persistence
//! - Persistence diagrams (one pair per sample)
//! - Peak-count filtering
//!
//! ## Mathematical Background
//!
//! For f sampled at positions 1..N, the superlevel sets f⁻¹[t, ∞) grow as
//! t decreases. A connected component is born at every local maximum and
//! dies when it merges into a component with a higher birth, at the value
//! of the separating minimum (elder rule). The lifetime birth - death is
//! the persistence of that peak; the global maximum never dies and is
//! paired with the global minimum.

mod union_find;
mod diagram;
mod filter;
mod transform;

pub use union_find::UnionFind;
pub use diagram::{PersistenceDiagram, PersistencePair};
pub use filter::{filter_peaks, FilterWarning};
pub use transform::{
    transform,
    transform_array,
    PersistenceTransformer,
    Transformed,
    TransformerConfig,
};
