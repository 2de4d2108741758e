use std::error::Error;
use std::fmt;

use crate::coord::Viewport;

pub const WINDOW_TITLE: &str = "Mandelbrot";
pub const WINDOW_WIDTH: usize = 1400;
pub const WINDOW_HEIGHT: usize = 900;
pub const MAX_ITERATIONS: u32 = 1000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Coloring {
    /// Bounded points white, everything else black.
    #[default]
    Binary,
    /// Escaped points shaded by iteration count, bounded points white.
    Gradient,
}

/// Everything one render pass and its window depend on.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub viewport: Viewport,
    pub coloring: Coloring,
}

impl Config {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Size(self.width, self.height));
        }
        if u32::try_from(self.width).is_err() || u32::try_from(self.height).is_err() {
            return Err(ConfigError::Size(self.width, self.height));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::Iterations);
        }
        self.viewport.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            max_iterations: MAX_ITERATIONS,
            viewport: Viewport::default(),
            coloring: Coloring::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    Size(usize, usize),
    Iterations,
    Axis(&'static str),
    Zoom(f64),
    Pan,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(w, h) => write!(f, "invalid frame size {}x{}", w, h),
            Self::Iterations => write!(f, "iteration budget must be at least 1"),
            Self::Axis(name) => write!(f, "{} axis bounds must be finite with min < max", name),
            Self::Zoom(z) => write!(f, "zoom must be finite and positive, got {}", z),
            Self::Pan => write!(f, "pan offset must be finite"),
        }
    }
}

impl Error for ConfigError {}
