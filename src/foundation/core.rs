/// Integer pixel point, origin at the top-left, Y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl IPoint {
    /// Construct a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned integer rectangle, `min` inclusive and `max` exclusive.
///
/// Constructors normalize so `min <= max` holds on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IRect {
    /// Top-left corner (inclusive).
    pub min: IPoint,
    /// Bottom-right corner (exclusive).
    pub max: IPoint,
}

impl IRect {
    /// Build a rectangle from two corners, swapping coordinates when given out of order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: IPoint::new(x0.min(x1), y0.min(y1)),
            max: IPoint::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `[0, width) x [0, height)`.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, to_i32(width), to_i32(height))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x).max(0) as u32
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y).max(0) as u32
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// True when `p` lies inside the half-open rectangle.
    pub fn contains(&self, p: IPoint) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains_rect(&self, other: &IRect) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Shift by `by`.
    pub fn translate(&self, by: IPoint) -> Self {
        Self {
            min: self.min.offset(by.x, by.y),
            max: self.max.offset(by.x, by.y),
        }
    }

    /// Grow outward by `padding` on every side.
    ///
    /// Negative padding shrinks; an axis that would invert collapses onto its midpoint.
    pub fn padded(&self, padding: i32) -> Self {
        fn axis(lo: i32, hi: i32, padding: i32) -> (i32, i32) {
            let lo2 = lo.saturating_sub(padding);
            let hi2 = hi.saturating_add(padding);
            if lo2 <= hi2 {
                (lo2, hi2)
            } else {
                let mid = lo + (hi - lo) / 2;
                (mid, mid)
            }
        }

        let (x0, x1) = axis(self.min.x, self.max.x, padding);
        let (y0, y1) = axis(self.min.y, self.max.y, padding);
        Self {
            min: IPoint::new(x0, y0),
            max: IPoint::new(x1, y1),
        }
    }

    /// Overlap of two rectangles, or `None` when they are disjoint.
    pub fn intersect(&self, other: &IRect) -> Option<Self> {
        let r = Self {
            min: IPoint::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: IPoint::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.min.x < r.max.x && r.min.y < r.max.y {
            Some(r)
        } else {
            None
        }
    }
}

pub(crate) fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
