use image::{GrayImage, Luma};

use crate::config::Coloring;
use crate::solver::{EscapeMap, IterationResult};

pub const WHITE: u8 = 255;
pub const BLACK: u8 = 0;

/// Single-channel, row-major pixel grid produced by one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    img: GrayImage,
}

impl FrameBuffer {
    pub fn width(&self) -> usize {
        self.img.width() as usize
    }

    pub fn height(&self) -> usize {
        self.img.height() as usize
    }

    pub fn intensity(&self, x: usize, y: usize) -> u8 {
        self.img.get_pixel(x as u32, y as u32).0[0]
    }

    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.img.into_raw()
    }
}

impl From<GrayImage> for FrameBuffer {
    fn from(img: GrayImage) -> Self {
        Self { img }
    }
}

pub trait Painter {
    fn intensity(&self, result: IterationResult) -> u8;

    fn paint(&self, results: &EscapeMap) -> FrameBuffer {
        let width = results.ncols() as u32;
        let height = results.nrows() as u32;

        let mut img = GrayImage::new(width, height);
        for ((y, x), result) in results.indexed_iter() {
            img.put_pixel(x as u32, y as u32, Luma([self.intensity(*result)]));
        }
        img.into()
    }
}

pub struct BinaryPainter;

impl Painter for BinaryPainter {
    fn intensity(&self, result: IterationResult) -> u8 {
        if result.is_bounded() {
            WHITE
        } else {
            BLACK
        }
    }
}

pub struct GradientPainter {
    max_iterations: u32,
}

impl GradientPainter {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl Painter for GradientPainter {
    fn intensity(&self, result: IterationResult) -> u8 {
        match result {
            IterationResult::Bounded => WHITE,
            IterationResult::Escaped(n) => {
                let v = (u64::from(n) * 255) / u64::from(self.max_iterations.max(1));
                v.min(254) as u8
            }
        }
    }
}

pub fn painter(coloring: Coloring, max_iterations: u32) -> Box<dyn Painter> {
    match coloring {
        Coloring::Binary => Box::new(BinaryPainter),
        Coloring::Gradient => Box::new(GradientPainter::new(max_iterations)),
    }
}
