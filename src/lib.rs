//! # topf
//!
//! Topological Peak Filtering: 0-dimensional persistent homology of
//! one-dimensional sampled functions.
//!
//! ## Overview
//!
//! A function given as ordered `(x, y)` samples is transformed into
//! `(x, persistence)` pairs. Every sample that is the birth peak of a
//! component in the superlevel-set filtration receives the height
//! difference between its peak and the saddle where it merges into a
//! taller peak; all other samples receive 0. Large values mark
//! significant peaks, small values mark noise.
//!
//! ### Pipeline
//!
//! 1. **Sweep**: visit samples from highest to lowest, tracking components
//!    with a Union-Find structure
//! 2. **Pairing**: record (birth, death) at each saddle using the elder rule
//! 3. **Filtering** (optional): keep only the `k` most persistent peaks
//!
//! ## Example
//!
//! ```
//! use topf::{transform, TransformerConfig};
//!
//! let samples = [(0.0, 3.0), (1.0, 1.0), (2.0, 6.0), (3.0, 5.0),
//!                (4.0, 8.0), (5.0, 2.0), (6.0, 7.0), (7.0, 4.0)];
//! let config = TransformerConfig::default().with_diagram(true);
//! let out = transform(&samples, &config).unwrap();
//!
//! assert_eq!(out.persistence(), vec![2.0, 0.0, 1.0, 0.0, 7.0, 0.0, 5.0, 0.0]);
//! assert_eq!(out.diagram.unwrap().total_persistence(1.0).unwrap(), 15.0);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Beketayev et al., "Measuring the Distance between Merge Trees" (2014)

pub mod error;
pub mod io;
pub mod signal;
pub mod topology;

pub use error::{Result, TopfError};

// Re-exports from topology
pub use topology::{
    // Engine
    transform,
    transform_array,
    PersistenceTransformer,
    Transformed,
    TransformerConfig,
    // Diagrams
    PersistenceDiagram,
    PersistencePair,
    // Building blocks
    UnionFind,
    FilterWarning,
    filter_peaks,
};

// Re-exports from signal
pub use signal::{Bump, noisy_bumps};
