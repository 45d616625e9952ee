// Character-level proximity search. Given the target's rectangle and one
// rectangle per character of a surrounding text container, classify each
// character as a neighbor in one of the requested directions, then keep the
// direction whose nearest character is nearest overall.

use crate::direction::{Direction, DirectionSet};
use crate::geometry::Rect;
use crate::log::trace;

/// Outcome of a text-run scan: the winning direction, its distance, and
/// every character offset tied at that distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMatch {
    pub direction: Direction,
    pub distance: i32,
    pub offsets: Vec<usize>,
}

/// Explores the neighborhood of one target rectangle over character
/// rectangles. Holds no cross-call state; construct one per resolution.
#[derive(Debug, Clone)]
pub struct TextRunExplorer {
    target: Rect,
    directions: DirectionSet,
    max_horizontal: i32,
    /// Vertical threshold. `None` means "one character's height": adjacent
    /// lines of the same text size are assumed roughly equal height, so each
    /// character's own height is used as its limit.
    max_vertical: Option<i32>,
}

impl TextRunExplorer {
    pub fn new(
        target: Rect,
        directions: DirectionSet,
        max_horizontal: i32,
        max_vertical: Option<i32>,
    ) -> Self {
        Self {
            target,
            directions,
            max_horizontal,
            max_vertical,
        }
    }

    /// Scan `char_rects` (one rect per character, in mapping order) and pick
    /// the winning direction. Returns `None` when no character qualifies in
    /// any requested direction — a normal outcome, not an error.
    pub fn scan(&self, char_rects: &[Rect]) -> Option<RunMatch> {
        if char_rects.is_empty() {
            return None;
        }
        let mut best: Option<RunMatch> = None;
        // Directions iterate in tie-break order, so a strict `<` keeps the
        // first-listed direction on equal distances.
        for direction in self.directions.iter() {
            let Some(candidate) = self.direction_minimum(direction, char_rects) else {
                continue;
            };
            trace!(
                ?direction,
                distance = candidate.distance,
                tied = candidate.offsets.len(),
                "direction minimum"
            );
            if best
                .as_ref()
                .is_none_or(|current| candidate.distance < current.distance)
            {
                best = Some(candidate);
            }
        }
        best
    }

    /// Minimum distance in one direction, with all offsets tied at it.
    fn direction_minimum(&self, direction: Direction, char_rects: &[Rect]) -> Option<RunMatch> {
        let mut distance: Option<i32> = None;
        let mut offsets: Vec<usize> = Vec::new();
        for (offset, rect) in char_rects.iter().enumerate() {
            let Some(gap) = self.measure(direction, *rect) else {
                continue;
            };
            match distance {
                Some(current) if gap > current => {}
                Some(current) if gap == current => offsets.push(offset),
                _ => {
                    distance = Some(gap);
                    offsets.clear();
                    offsets.push(offset);
                }
            }
        }
        distance.map(|distance| RunMatch {
            direction,
            distance,
            offsets,
        })
    }

    /// Distance from the target to a character rectangle in `direction`, or
    /// `None` when the character does not qualify as a neighbor there.
    fn measure(&self, direction: Direction, rect: Rect) -> Option<i32> {
        let target = self.target;
        match direction {
            Direction::Left => {
                let overlaps = target.top < rect.bottom && rect.bottom <= target.bottom;
                let gap = target.left - rect.right;
                (overlaps && rect.right < target.left && gap <= self.max_horizontal).then_some(gap)
            }
            Direction::Right => {
                let overlaps = target.top < rect.bottom && rect.bottom <= target.bottom;
                let gap = rect.left - target.right;
                (overlaps && rect.left > target.right && gap <= self.max_horizontal).then_some(gap)
            }
            Direction::Top => {
                let overlaps = target.left <= rect.left && rect.left < target.right;
                let limit = self.max_vertical.unwrap_or_else(|| rect.height());
                let gap = target.top - rect.bottom;
                (overlaps && rect.bottom < target.top && gap <= limit).then_some(gap)
            }
            Direction::Bottom => {
                let overlaps = target.left <= rect.left && rect.left < target.right;
                let limit = self.max_vertical.unwrap_or_else(|| rect.height());
                let gap = rect.top - target.bottom;
                (overlaps && rect.top > target.bottom && gap <= limit).then_some(gap)
            }
        }
    }
}
