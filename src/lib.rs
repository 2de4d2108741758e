use std::time::Instant;

use log::info;

use crate::config::Config;
use crate::coord::Viewport;
use crate::painter::{painter, FrameBuffer, Painter};
use crate::solver::{EscapeMap, EscapeSolver};

pub mod app;
pub mod bench;
mod complex;
pub mod config;
pub mod coord;
#[cfg(feature = "gui")]
pub mod gui;
pub mod painter;
pub mod solver;

/// One solved frame: the escape result per pixel, shape `(height, width)`.
pub struct Mandelbrot {
    pub state: EscapeMap,
}

impl Mandelbrot {
    pub fn initialize(
        width: usize,
        height: usize,
        viewport: &Viewport,
        max_iterations: u32,
    ) -> Self {
        let state = EscapeSolver::new(max_iterations).solve(viewport, width, height);
        Self { state }
    }

    pub fn width(&self) -> usize {
        self.state.ncols()
    }

    pub fn height(&self) -> usize {
        self.state.nrows()
    }

    pub fn paint<P>(&self, painter: &P) -> FrameBuffer
    where
        P: Painter + ?Sized,
    {
        painter.paint(&self.state)
    }
}

/// Renders the whole frame described by `config` in a single pass.
///
/// The config is expected to be valid (see [`Config::validate`]).
pub fn render(config: &Config) -> FrameBuffer {
    let start = Instant::now();
    let m = Mandelbrot::initialize(
        config.width,
        config.height,
        &config.viewport,
        config.max_iterations,
    );
    let frame = m.paint(painter(config.coloring, config.max_iterations).as_ref());
    info!(
        "rendered {}x{} frame ({} iterations, {:?} coloring) in {:?}",
        m.width(),
        m.height(),
        config.max_iterations,
        config.coloring,
        start.elapsed()
    );
    frame
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use super::*;
    use crate::config::Coloring;
    use crate::solver::IterationResult;

    #[test]
    fn test_initialize_shape_matches_frame() {
        let viewport = Viewport::from_nums(-2.0, 1.0, -1.5, 1.5);
        let m = Mandelbrot::initialize(12, 7, &viewport, 50);
        assert_eq!((m.width(), m.height()), (12, 7));
        assert_eq!(m.state[[0, 0]], IterationResult::Escaped(0));

        let frame = m.paint(&crate::painter::BinaryPainter);
        assert_eq!((frame.width(), frame.height()), (m.width(), m.height()));
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = Config::default().with_size(64, 40).with_max_iterations(200);
        assert_eq!(render(&config), render(&config));
        let config = config.with_coloring(Coloring::Gradient);
        assert_eq!(render(&config).as_raw(), render(&config).as_raw());
    }

    #[test]
    fn test_reference_viewport_center_and_corners() {
        let config = Config::default();
        let (w, h) = (config.width, config.height);
        let solver = EscapeSolver::new(config.max_iterations);
        let intensity = |px, py| {
            let c = config.viewport.point(px, py, w, h);
            painter(config.coloring, config.max_iterations).intensity(solver.solve_point(c))
        };
        assert_eq!(config.viewport.point(w / 2, h / 2, w, h), complex::c(0.0, 0.0));
        assert_eq!(intensity(w / 2, h / 2), 255);
        for (px, py) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(intensity(px, py), 0, "corner ({}, {})", px, py);
        }
    }

    #[test]
    fn test_reference_frame_corners() {
        let config = Config::default().with_size(140, 90);
        let frame = render(&config);
        assert_eq!(frame.intensity(70, 45), 255);
        for (px, py) in [(0, 0), (139, 0), (0, 89), (139, 89)] {
            assert_eq!(frame.intensity(px, py), 0);
        }
    }

    fn white_region(frame: &FrameBuffer, start: (usize, usize)) -> usize {
        let (w, h) = (frame.width(), frame.height());
        let mut seen = vec![false; w * h];
        let mut queue = VecDeque::from(vec![start]);
        let mut count = 0;
        while let Some((x, y)) = queue.pop_front() {
            if seen[y * w + x] || frame.intensity(x, y) != 255 {
                continue;
            }
            seen[y * w + x] = true;
            count += 1;
            if x > 0 {
                queue.push_back((x - 1, y));
            }
            if x + 1 < w {
                queue.push_back((x + 1, y));
            }
            if y > 0 {
                queue.push_back((x, y - 1));
            }
            if y + 1 < h {
                queue.push_back((x, y + 1));
            }
        }
        count
    }

    #[test]
    fn test_small_frame_is_connected() {
        let config = Config::default()
            .with_size(10, 10)
            .with_max_iterations(50)
            .with_viewport(Viewport::from_nums(-2.0, 1.0, -1.5, 1.5));
        let frame = render(&config);

        // nearest pixel to the origin: re = 0.1, im = 0.0
        let origin = (7, 5);
        assert_eq!(frame.intensity(origin.0, origin.1), 255);

        let white = frame.as_raw().iter().filter(|v| **v == 255).count();
        assert!(white > 0);
        assert_eq!(white_region(&frame, origin), white);
    }

    #[test]
    fn test_gradient_keeps_set_white() {
        let config = Config::default().with_size(50, 30).with_max_iterations(100);
        let binary = render(&config);
        let gradient = render(&config.clone().with_coloring(Coloring::Gradient));
        for (b, g) in binary.as_raw().iter().zip(gradient.as_raw()) {
            if *b == 255 {
                assert_eq!(*g, 255);
            } else {
                assert!(*g < 255);
            }
        }
    }
}
