//! Geometry primitives.
//!
//! Frames are expressed in the conventional UI coordinate space: the origin
//! is the top-leading corner, y grows downward.

use glam::Vec2;

/// A position in a view's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: a view's frame within its superview.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect { origin: Point::ZERO, size: Size::ZERO };

    /// Create a rect from position and extent components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self::new(
            position.x as f64,
            position.y as f64,
            size.x as f64,
            size.y as f64,
        )
    }

    /// Get the origin as a Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.origin.x as f32, self.origin.y as f32)
    }

    /// Get the size as a Vec2.
    pub fn size_vec(&self) -> Vec2 {
        Vec2::new(self.size.width as f32, self.size.height as f32)
    }

    /// Smallest x coordinate.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Smallest y coordinate.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Largest x coordinate (x + width).
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Largest y coordinate (y + height).
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Center x coordinate.
    pub fn center_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Center y coordinate.
    pub fn center_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Check whether a point lies inside the rect.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    /// Compute the intersection with another rect, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.min_x().max(other.min_x());
        let y1 = self.min_y().max(other.min_y());
        let x2 = self.max_x().min(other.max_x());
        let y2 = self.max_y().min(other.max_y());

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Compute the bounding box of this rect and another.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.min_x().min(other.min_x());
        let y1 = self.min_y().min(other.min_y());
        let x2 = self.max_x().max(other.max_x());
        let y2 = self.max_y().max(other.max_y());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Shrink the rect by the given edge insets.
    pub fn inset_by(&self, insets: Insets) -> Rect {
        Rect::new(
            self.origin.x + insets.leading,
            self.origin.y + insets.top,
            self.size.width - insets.leading - insets.trailing,
            self.size.height - insets.top - insets.bottom,
        )
    }
}

/// Edge insets, following leading/trailing naming rather than left/right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl Insets {
    /// Equal insets on all four edges.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    /// Horizontal insets on leading/trailing, vertical on top/bottom.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            leading: horizontal,
            bottom: vertical,
            trailing: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.leading + self.trailing
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}
