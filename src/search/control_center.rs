// Control-level proximity search. Same direction classification as the
// text-run variant, but over candidate center points instead of character
// rectangles: whole-control names are atomic, so the winning candidate's
// name is the label with no chunk extraction afterwards.

use crate::direction::{Direction, DirectionSet};
use crate::element::LabelCandidate;
use crate::geometry::{Point, Rect};
use crate::log::trace;

/// Outcome of a control-center scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub direction: Direction,
    pub distance: i32,
    pub label: String,
}

/// Explores the neighborhood of one target rectangle over label-bearing
/// controls. Holds no cross-call state; construct one per resolution.
#[derive(Debug, Clone)]
pub struct ControlCenterExplorer {
    target: Rect,
    directions: DirectionSet,
    max_horizontal: i32,
    /// Vertical threshold. `None` falls back to the target's own height as
    /// a one-text-line proxy (candidate controls expose no character
    /// geometry to borrow a height from).
    max_vertical: Option<i32>,
}

impl ControlCenterExplorer {
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

    /// Scan `candidates` and pick the nearest qualifying one. Candidates
    /// with empty or whitespace-only names are skipped outright: those are
    /// image-style labels that would need OCR, which stays out of scope.
    pub fn scan(&self, candidates: &[LabelCandidate]) -> Option<CandidateMatch> {
        let mut best: Option<CandidateMatch> = None;
        for direction in self.directions.iter() {
            let Some(candidate) = self.direction_minimum(direction, candidates) else {
                continue;
            };
            trace!(
                ?direction,
                distance = candidate.distance,
                label = candidate.label.as_str(),
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

    /// Nearest qualifying candidate in one direction. Equal distances keep
    /// the first-encountered candidate in input order.
    fn direction_minimum(
        &self,
        direction: Direction,
        candidates: &[LabelCandidate],
    ) -> Option<CandidateMatch> {
        let mut best: Option<CandidateMatch> = None;
        for candidate in candidates {
            if candidate.name.trim().is_empty() {
                continue;
            }
            let Some(distance) = self.measure(direction, candidate.center) else {
                continue;
            };
            if best
                .as_ref()
                .is_none_or(|current| distance < current.distance)
            {
                best = Some(CandidateMatch {
                    direction,
                    distance,
                    label: candidate.name.clone(),
                });
            }
        }
        best
    }

    /// Distance from the target to a candidate center point in `direction`,
    /// or `None` when the point does not qualify as a neighbor there.
    fn measure(&self, direction: Direction, point: Point) -> Option<i32> {
        let target = self.target;
        let max_vertical = self.max_vertical.unwrap_or_else(|| target.height());
        match direction {
            Direction::Left => {
                let overlaps = target.top < point.y && point.y <= target.bottom;
                let gap = target.left - point.x;
                (overlaps && point.x < target.left && gap <= self.max_horizontal).then_some(gap)
            }
            Direction::Right => {
                let overlaps = target.top < point.y && point.y <= target.bottom;
                let gap = point.x - target.right;
                (overlaps && point.x > target.right && gap <= self.max_horizontal).then_some(gap)
            }
            Direction::Top => {
                let overlaps = target.left <= point.x && point.x < target.right;
                let gap = target.top - point.y;
                (overlaps && point.y < target.top && gap <= max_vertical).then_some(gap)
            }
            Direction::Bottom => {
                let overlaps = target.left <= point.x && point.x < target.right;
                let gap = point.y - target.bottom;
                (overlaps && point.y > target.bottom && gap <= max_vertical).then_some(gap)
            }
        }
    }
}
