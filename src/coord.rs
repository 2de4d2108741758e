use num::{Float, Num};

use crate::complex::*;
use crate::config::ConfigError;

/// Linear interpolation of a pixel index onto `[min, max)`.
///
/// `pixel_max` must be positive; callers pass a known frame dimension.
pub fn map(pixel_index: usize, pixel_max: usize, min: f64, max: f64) -> f64 {
    min + (max - min) * (pixel_index as f64 / pixel_max as f64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis<T> {
    pub min: T,
    pub max: T,
}

impl<T> Axis<T>
where
    T: Num + Copy,
{
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T> Axis<T>
where
    T: Float,
{
    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.length() > T::zero()
    }
}

/// Region of the complex plane shown in the frame.
///
/// Pan and zoom are applied after interpolation: `(mapped / zoom) + pan`,
/// so a larger zoom shrinks the visible range around the pan offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub x: Axis<f64>,
    pub y: Axis<f64>,
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(x: Axis<f64>, y: Axis<f64>) -> Self {
        Self {
            x,
            y,
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }

    pub fn from_nums(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self::new(Axis::new(x1, x2), Axis::new(y1, y2))
    }

    pub fn with_pan(mut self, pan_x: f64, pan_y: f64) -> Self {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x.is_valid() {
            return Err(ConfigError::Axis("x"));
        }
        if !self.y.is_valid() {
            return Err(ConfigError::Axis("y"));
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::Zoom(self.zoom));
        }
        if !(self.pan_x.is_finite() && self.pan_y.is_finite()) {
            return Err(ConfigError::Pan);
        }
        Ok(())
    }

    pub fn re(&self, px: usize, width: usize) -> f64 {
        (map(px, width, self.x.min, self.x.max) / self.zoom) + self.pan_x
    }

    pub fn im(&self, py: usize, height: usize) -> f64 {
        (map(py, height, self.y.min, self.y.max) / self.zoom) + self.pan_y
    }

    pub fn point(&self, px: usize, py: usize, width: usize, height: usize) -> C<f64> {
        c(self.re(px, width), self.im(py, height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_nums(-2.5, 2.5, -2.5, 2.5)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_map_endpoints() {
        assert_eq!(map(0, 1400, -2.5, 2.5), -2.5);
        assert_eq!(map(700, 1400, -2.5, 2.5), 0.0);
        assert!(map(1399, 1400, -2.5, 2.5) < 2.5);
    }

    #[test]
    fn test_map_stays_in_bounds() {
        let v = Viewport::from_nums(-2.0, 1.0, -1.5, 1.5);
        let (width, height) = (37, 23);
        for px in 0..width {
            let re = v.re(px, width);
            assert!(re >= v.x.min && re < v.x.max, "re {} out of bounds", re);
        }
        for py in 0..height {
            let im = v.im(py, height);
            assert!(im >= v.y.min && im < v.y.max, "im {} out of bounds", im);
        }
    }

    #[test]
    fn test_zoom_then_pan() {
        let v = Viewport::default().with_zoom(2.0).with_pan(-0.5, 0.25);
        // -2.5 / 2 - 0.5
        assert_eq!(v.re(0, 100), -1.75);
        // 0 / 2 + 0.25
        assert_eq!(v.im(50, 100), 0.25);
    }

    #[test]
    fn test_axis_needs_positive_length() {
        assert_eq!(Axis::new(-2.0, 1.0).length(), 3.0);
        assert!(Axis::new(-2.0, 1.0).is_valid());
        assert!(!Axis::new(0.5, 0.5).is_valid());
        assert!(!Axis::new(1.0, -1.0).is_valid());
        assert!(!Axis::new(f64::NEG_INFINITY, 1.0).is_valid());
    }

    #[test]
    fn test_validate() {
        assert!(Viewport::default().validate().is_ok());
        assert_eq!(
            Viewport::from_nums(1.0, 1.0, -1.0, 1.0).validate(),
            Err(ConfigError::Axis("x"))
        );
        assert_eq!(
            Viewport::from_nums(-1.0, 1.0, f64::NAN, 1.0).validate(),
            Err(ConfigError::Axis("y"))
        );
        assert_eq!(
            Viewport::default().with_zoom(0.0).validate(),
            Err(ConfigError::Zoom(0.0))
        );
        assert_eq!(
            Viewport::default().with_pan(f64::INFINITY, 0.0).validate(),
            Err(ConfigError::Pan)
        );
    }
}
