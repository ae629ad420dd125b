//! Integer pixel geometry used by pointer handling.

use serde::{Deserialize, Serialize};

/// A pointer position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the squared Euclidean distance to `other`, saturating on
    /// overflow.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

/// The bounding region of a rendered task card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Which side of a hovered task the dragged task should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropEdge {
    /// Insert immediately before the hovered task.
    Before,
    /// Insert immediately after the hovered task.
    After,
}

impl DropEdge {
    /// Picks the edge from the pointer's position inside `bounds`.
    ///
    /// The upper half yields [`DropEdge::Before`]; the exact midpoint and
    /// everything below it yield [`DropEdge::After`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::board::domain::{DropEdge, Point, Rect};
    ///
    /// let card = Rect::new(0, 100, 200, 40);
    /// assert_eq!(DropEdge::from_pointer(card, Point::new(10, 105)), DropEdge::Before);
    /// assert_eq!(DropEdge::from_pointer(card, Point::new(10, 120)), DropEdge::After);
    /// ```
    #[must_use]
    pub fn from_pointer(bounds: Rect, pointer: Point) -> Self {
        let offset = i64::from(pointer.y) - i64::from(bounds.y);
        if offset.saturating_mul(2) < i64::from(bounds.height) {
            Self::Before
        } else {
            Self::After
        }
    }
}
