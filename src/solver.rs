use ndarray::Array2;

use crate::complex::C;
use crate::coord::Viewport;

/// Outcome of iterating `z -> z^2 + c` from `z = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IterationResult {
    /// Diverged after this many completed iterations (0-indexed).
    Escaped(u32),
    /// Never left the escape radius within the iteration budget.
    Bounded,
}

impl IterationResult {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }
}

/// Escape radius 2, compared squared.
const THRESHOLD_SQR: f64 = 4.0;

pub fn evaluate(c: C<f64>, max_iterations: u32) -> IterationResult {
    let mut z = C::new(0.0, 0.0);
    for n in 0..max_iterations {
        z = (z * z) + c;
        if z.norm_sqr() > THRESHOLD_SQR {
            return IterationResult::Escaped(n);
        }
    }
    IterationResult::Bounded
}

pub type EscapeMap = Array2<IterationResult>;

#[derive(Clone, Debug)]
pub struct EscapeSolver {
    max_iterations: u32,
}

impl EscapeSolver {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    pub fn solve_point(&self, c: C<f64>) -> IterationResult {
        evaluate(c, self.max_iterations)
    }

    /// Evaluates every pixel once, row by row. Shape is `(height, width)`.
    pub fn solve(&self, viewport: &Viewport, width: usize, height: usize) -> EscapeMap {
        Array2::from_shape_fn((height, width), |(py, px)| {
            self.solve_point(viewport.point(px, py, width, height))
        })
    }
}
