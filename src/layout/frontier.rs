// Candidate anchor points ordered by distance from the cloud center.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use super::geometry::Point;

#[derive(Debug, Clone, Copy)]
struct Distance(f32);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Growing set of anchor candidates.
///
/// Entries are keyed by `(distance, insertion sequence)`, so points that sit
/// at the same distance from the center are all kept and come out in the
/// order they were inserted. Inserting the exact same point twice is a no-op.
#[derive(Debug, Clone)]
pub struct Frontier {
    center: Point,
    points: BTreeMap<(Distance, u64), Point>,
    seen: HashSet<(u32, u32)>,
    next_seq: u64,
}

impl Frontier {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            points: BTreeMap::new(),
            seen: HashSet::new(),
            next_seq: 0,
        }
    }

    /// Returns `false` when the point is already a candidate.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.seen.insert(point_key(point)) {
            return false;
        }
        let distance = Distance(point.distance_to(self.center));
        self.points.insert((distance, self.next_seq), point);
        self.next_seq += 1;
        true
    }

    /// Candidates nearest the center first. Every call starts over from the
    /// smallest distance.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.values().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// -0.0 and 0.0 are the same anchor.
fn point_key(point: Point) -> (u32, u32) {
    let normalize = |v: f32| if v == 0.0 { 0.0f32 } else { v };
    (normalize(point.x).to_bits(), normalize(point.y).to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_ascending_distance() {
        let mut frontier = Frontier::new(Point::new(0.0, 0.0));
        frontier.insert(Point::new(10.0, 0.0));
        frontier.insert(Point::new(1.0, 1.0));
        frontier.insert(Point::new(0.0, 5.0));
        let order: Vec<Point> = frontier.iter().collect();
        assert_eq!(
            order,
            vec![
                Point::new(1.0, 1.0),
                Point::new(0.0, 5.0),
                Point::new(10.0, 0.0),
            ]
        );
    }

    #[test]
    fn keeps_distinct_points_at_equal_distance() {
        let mut frontier = Frontier::new(Point::new(50.0, 50.0));
        assert!(frontier.insert(Point::new(60.0, 50.0)));
        assert!(frontier.insert(Point::new(40.0, 50.0)));
        assert!(frontier.insert(Point::new(50.0, 60.0)));
        assert_eq!(frontier.len(), 3);
        let order: Vec<Point> = frontier.iter().collect();
        assert_eq!(order[0], Point::new(60.0, 50.0));
        assert_eq!(order[1], Point::new(40.0, 50.0));
        assert_eq!(order[2], Point::new(50.0, 60.0));
    }

    #[test]
    fn drops_identical_points() {
        let mut frontier = Frontier::new(Point::new(5.0, 5.0));
        assert!(frontier.insert(Point::new(5.0, 5.0)));
        assert!(!frontier.insert(Point::new(5.0, 5.0)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn iteration_restarts_from_nearest() {
        let mut frontier = Frontier::new(Point::new(0.0, 0.0));
        frontier.insert(Point::new(3.0, 4.0));
        frontier.insert(Point::new(1.0, 0.0));
        assert_eq!(frontier.iter().next(), Some(Point::new(1.0, 0.0)));
        frontier.insert(Point::new(0.5, 0.0));
        assert_eq!(frontier.iter().next(), Some(Point::new(0.5, 0.0)));
    }
}
