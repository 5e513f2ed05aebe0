#![forbid(unsafe_code)]

//! Continuous 2D geometry in viewport (CSS pixel) units.

/// A point or a displacement in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle with `f64` extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Size of the drawing area.
///
/// Both extents are finite and non-negative; construction sanitizes anything
/// else to zero so clamping against the viewport can never panic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Inclusive containment: edges belong to the viewport.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    #[inline]
    pub const fn bounds(&self) -> RectF {
        RectF::new(0.0, 0.0, self.width, self.height)
    }
}

#[inline]
fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
