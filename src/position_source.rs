//! Default placement for nodes added without a position.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Rectangle new nodes are scattered over when no position is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRegion {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

impl Default for CanvasRegion {
  fn default() -> Self {
    Self {
      x: 100.0,
      y: 100.0,
      width: 400.0,
      height: 300.0,
    }
  }
}

/// Supplies positions for nodes created without one.
pub trait PositionSource: Send {
  fn next_position(&mut self) -> Position;
}

impl<F> PositionSource for F
where
  F: FnMut() -> Position + Send,
{
  fn next_position(&mut self) -> Position {
    self()
  }
}

/// Uniformly random positions inside a [`CanvasRegion`].
#[derive(Debug, Clone)]
pub struct RandomPositionSource {
  region: CanvasRegion,
  rng: StdRng,
}

impl RandomPositionSource {
  /// Seeded from OS entropy.
  pub fn new(region: CanvasRegion) -> Self {
    Self {
      region,
      rng: StdRng::from_entropy(),
    }
  }

  /// Deterministic sequence for a given seed.
  pub fn seeded(region: CanvasRegion, seed: u64) -> Self {
    Self {
      region,
      rng: StdRng::seed_from_u64(seed),
    }
  }

  pub fn region(&self) -> &CanvasRegion {
    &self.region
  }
}

impl Default for RandomPositionSource {
  fn default() -> Self {
    Self::new(CanvasRegion::default())
  }
}

/// Uniform in `[start, start + extent)`. Collapses to `start` when that range
/// is empty or not representable as finite `f64` values.
fn sample(rng: &mut StdRng, start: f64, extent: f64) -> f64 {
  let end = start + extent;
  if start.is_finite() && end.is_finite() && end > start && (end - start).is_finite() {
    rng.gen_range(start..end)
  } else {
    start
  }
}

impl PositionSource for RandomPositionSource {
  fn next_position(&mut self) -> Position {
    let x = sample(&mut self.rng, self.region.x, self.region.width);
    let y = sample(&mut self.rng, self.region.y, self.region.height);
    Position::new(x, y)
  }
}
