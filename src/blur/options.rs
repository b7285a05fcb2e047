use serde::{Deserialize, Serialize};

/// Options controlling the separable box-blur filter.
///
/// The defaults mirror the fixed horizontal/vertical radius pair the
/// original utility set treated as process-wide constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurOptions {
    /// Horizontal blur radius. The integer part drives the box-window pass,
    /// the fractional remainder the edge-correction pass.
    pub h_radius: f32,
    /// Vertical blur radius.
    pub v_radius: f32,
    /// Number of box-window iterations per axis.
    pub iterations: usize,
}

impl Default for BlurOptions {
    fn default() -> Self {
        Self {
            h_radius: 10.0,
            v_radius: 10.0,
            iterations: 1,
        }
    }
}

impl BlurOptions {
    /// Uniform radius for both axes, one iteration.
    pub fn new(radius: f32) -> Self {
        Self {
            h_radius: radius,
            v_radius: radius,
            iterations: 1,
        }
    }

    pub fn with_h_radius(mut self, radius: f32) -> Self {
        self.h_radius = radius;
        self
    }

    pub fn with_v_radius(mut self, radius: f32) -> Self {
        self.v_radius = radius;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}
