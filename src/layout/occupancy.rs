use super::geometry::Rect;

/// Rectangles committed so far. Collision checks are a plain linear scan;
/// clouds are tens to low hundreds of words.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    rects: Vec<Rect>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intersects(&self, candidate: &Rect) -> bool {
        self.rects.iter().any(|placed| placed.intersects(candidate))
    }

    pub fn commit(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Union box of everything committed.
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self.rects.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, rect| acc.union(rect)))
    }
}
