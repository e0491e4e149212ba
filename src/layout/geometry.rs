use serde::{Deserialize, Serialize};

use super::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// A point at the origin counts as "unset" when it is used as a center.
    pub fn is_empty(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Non-negative extent. Only [`Size::new`] builds one from outside the crate,
/// so a negative or NaN side never gets past construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SizeFields")]
pub struct Size {
    width: f32,
    height: f32,
}

#[derive(Deserialize)]
struct SizeFields {
    width: f32,
    height: f32,
}

impl TryFrom<SizeFields> for Size {
    type Error = LayoutError;

    fn try_from(fields: SizeFields) -> Result<Self, Self::Error> {
        Size::new(fields.width, fields.height)
    }
}

impl Size {
    /// Builds a size, rejecting negative or NaN sides.
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        let size = Self { width, height };
        if !size.is_valid() {
            return Err(LayoutError::InvalidMeasurement {
                text: String::new(),
                width,
                height,
            });
        }
        Ok(size)
    }

    /// Unchecked constructor for values already known to be valid.
    pub(crate) const fn raw(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Zero area.
    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Axis-aligned box spanning `[origin.x, origin.x + width] x [origin.y, origin.y + height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width()
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height()
    }

    /// Interiors overlap. Shared edges are not an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contained_in(&self, bounds: Size) -> bool {
        self.left() >= 0.0
            && self.top() >= 0.0
            && self.right() <= bounds.width()
            && self.bottom() <= bounds.height()
    }

    /// Anchor first, then the corners reached by adding height, width, and both.
    pub fn corners(&self) -> [Point; 4] {
        let (width, height) = (self.size.width(), self.size.height());
        [
            self.origin,
            self.origin.offset(0.0, height),
            self.origin.offset(width, 0.0),
            self.origin.offset(width, height),
        ]
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(Point::new(left, top), Size::raw(right - left, bottom - top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Point::new(x, y), Size::raw(w, h))
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&rect(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&rect(0.0, 10.0, 5.0, 5.0)));
        assert!(!a.intersects(&rect(-5.0, -5.0, 5.0, 5.0)));
    }

    #[test]
    fn overlapping_interiors_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&rect(9.0, 9.0, 5.0, 5.0)));
        assert!(a.intersects(&rect(2.0, 2.0, 1.0, 1.0)));
        assert!(rect(2.0, 2.0, 1.0, 1.0).intersects(&a));
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(Size::new(-1.0, 4.0).is_err());
        assert!(Size::new(4.0, -1.0).is_err());
        assert!(Size::new(f32::NAN, 4.0).is_err());
        assert!(Size::new(0.0, 0.0).unwrap().is_empty());
    }

    #[test]
    fn deserializing_goes_through_validation() {
        let size: Size = serde_json::from_str(r#"{"width": 3, "height": 2}"#).unwrap();
        assert_eq!(size, Size::new(3.0, 2.0).unwrap());
        assert!(serde_json::from_str::<Size>(r#"{"width": -3, "height": 2}"#).is_err());
    }

    #[test]
    fn corners_follow_fixed_order() {
        let corners = rect(50.0, 50.0, 30.0, 10.0).corners();
        assert_eq!(
            corners,
            [
                Point::new(50.0, 50.0),
                Point::new(50.0, 60.0),
                Point::new(80.0, 50.0),
                Point::new(80.0, 60.0),
            ]
        );
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn containment_checks_all_sides() {
        let bounds = Size::raw(100.0, 100.0);
        assert!(rect(0.0, 0.0, 100.0, 100.0).contained_in(bounds));
        assert!(!rect(-1.0, 0.0, 10.0, 10.0).contained_in(bounds));
        assert!(!rect(95.0, 0.0, 10.0, 10.0).contained_in(bounds));
    }
}
