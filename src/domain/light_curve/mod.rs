//! Light curve domain — observations, ordered curves, synthetic generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Measurement error assigned to every synthetic observation.
pub const SYNTHETIC_ERR: f64 = 0.1;

// ─── Observation ─────────────────────────────────────────────────────────────

/// A single photometric observation: time, magnitude, measurement error.
///
/// Serializes to `{"t": ..., "m": ..., "err": ...}`, the triple the service
/// expects inside `light_curve` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub t: f64,
    pub m: f64,
    pub err: f64,
}

impl Observation {
    pub fn new(t: f64, m: f64, err: f64) -> Self {
        Self { t, m, err }
    }
}

// ─── LightCurve ──────────────────────────────────────────────────────────────

/// A time-ordered sequence of observations.
///
/// Order is significant: the sequence is chronological and the service treats
/// position as identity. Serialization is transparent, a `LightCurve` is a
/// bare JSON array on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightCurve(Vec<Observation>);

impl LightCurve {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self(observations)
    }

    /// Generate a synthetic light curve of `n` points: `t = 0..n-1`,
    /// magnitudes drawn uniformly from `[0, 1)`, constant error
    /// [`SYNTHETIC_ERR`]. The magnitude source is unseeded, so values differ
    /// between runs while the shape stays fixed.
    pub fn synthetic(n: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self(
            (0..n)
                .map(|t| Observation::new(t as f64, rng.gen::<f64>(), SYNTHETIC_ERR))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.0.iter()
    }

    /// Whether timestamps are non-decreasing.
    pub fn is_chronological(&self) -> bool {
        self.0.windows(2).all(|w| w[0].t <= w[1].t)
    }
}

impl From<Vec<Observation>> for LightCurve {
    fn from(observations: Vec<Observation>) -> Self {
        Self(observations)
    }
}

impl FromIterator<Observation> for LightCurve {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LightCurve {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
