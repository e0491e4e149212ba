use serde::Serialize;

use super::geometry::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Taller-than-wide boxes are drawn rotated; squares stay horizontal.
    pub fn for_size(size: Size) -> Self {
        if size.width() < size.height() {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    pub fn rotation_degrees(self) -> f32 {
        match self {
            Self::Horizontal => 0.0,
            Self::Vertical => 90.0,
        }
    }
}

/// A word with its final place in the cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub weight: u32,
    pub font_size: f32,
    pub size: Size,
    pub position: Point,
    pub orientation: Orientation,
}

impl Label {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct CloudLayout {
    pub center: Point,
    pub font_family: String,
    pub labels: Vec<Label>,
    pub bounds: Option<Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_follows_aspect_ratio() {
        assert_eq!(
            Orientation::for_size(Size::raw(10.0, 20.0)),
            Orientation::Vertical
        );
        assert_eq!(
            Orientation::for_size(Size::raw(30.0, 10.0)),
            Orientation::Horizontal
        );
        assert_eq!(
            Orientation::for_size(Size::raw(12.0, 12.0)),
            Orientation::Horizontal
        );
    }
}
