//! Synthetic Test Signals
//!
//! Sums of Gaussian bumps on `[0, 1]`, optionally corrupted by white
//! noise. With noise, every bump becomes one prominent peak surrounded by
//! many small ones, which is exactly the situation peak filtering is for.
//!
//!   f(x) = Σₖ hₖ exp(-(x - cₖ)² / (2 wₖ²)) + ε,   ε ~ N(0, σ²)

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, TopfError};

/// A single Gaussian bump
#[derive(Debug, Clone, Copy)]
pub struct Bump {
    pub center: f64,
    pub height: f64,
    pub width: f64,
}

impl Bump {
    pub fn new(center: f64, height: f64, width: f64) -> Self {
        Self { center, height, width }
    }

    pub fn value(&self, x: f64) -> f64 {
        let z = (x - self.center) / self.width;
        self.height * (-0.5 * z * z).exp()
    }
}

/// Noiseless sum of bumps evaluated at `xs`
pub fn bumps(xs: &Array1<f64>, bumps: &[Bump]) -> Array1<f64> {
    xs.mapv(|x| bumps.iter().map(|b| b.value(x)).sum())
}

/// `n` evenly spaced samples of a noisy bump signal as an N×2 array
///
/// Noise is drawn from a generator seeded with `seed`, so the same
/// arguments always produce the same signal.
pub fn noisy_bumps(n: usize, shape: &[Bump], noise_std: f64, seed: u64) -> Result<Array2<f64>> {
    if !(noise_std.is_finite() && noise_std >= 0.0) {
        return Err(TopfError::InvalidParameter { name: "noise_std", value: noise_std });
    }
    let normal = Normal::new(0.0, noise_std)
        .map_err(|_| TopfError::InvalidParameter { name: "noise_std", value: noise_std })?;

    let xs = Array1::linspace(0.0, 1.0, n);
    let ys = bumps(&xs, shape);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Array2::zeros((n, 2));
    for i in 0..n {
        out[[i, 0]] = xs[i];
        out[[i, 1]] = ys[i] + normal.sample(&mut rng);
    }

    Ok(out)
}
