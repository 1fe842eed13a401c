/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Axis-aligned bounding box over a set of 2D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds2 {
    /// A degenerate box around a single point.
    #[must_use]
    pub fn around(point: Point2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`.
    pub fn expand(&mut self, point: Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Grows the box outward by `margin` on every side.
    #[must_use]
    pub fn padded(self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Width of the box (zero for a degenerate box).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box (zero for a degenerate box).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
