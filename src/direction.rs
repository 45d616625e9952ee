// Search-direction vocabulary. The enumeration order Left < Top < Right <
// Bottom is load-bearing: every distance tie across directions is broken by
// this order, in both explorer variants.

/// Where a label is expected to sit relative to its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// All directions, in tie-break order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    fn bit(self) -> u8 {
        match self {
            Direction::Left => 1 << 0,
            Direction::Top => 1 << 1,
            Direction::Right => 1 << 2,
            Direction::Bottom => 1 << 3,
        }
    }
}

/// An immutable set of search directions.
///
/// Iteration always yields directions in tie-break order
/// (left, top, right, bottom) regardless of how the set was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);
    pub const LEFT: DirectionSet = DirectionSet(1 << 0);
    pub const TOP: DirectionSet = DirectionSet(1 << 1);
    pub const RIGHT: DirectionSet = DirectionSet(1 << 2);
    pub const BOTTOM: DirectionSet = DirectionSet(1 << 3);
    /// Labels conventionally precede or sit above their controls in
    /// left-to-right layouts; this is the default search set.
    pub const TOP_LEFT: DirectionSet = DirectionSet(0b0011);
    pub const LEFT_BOTTOM: DirectionSet = DirectionSet(0b1001);
    pub const BOTTOM_RIGHT: DirectionSet = DirectionSet(0b1100);
    pub const RIGHT_TOP: DirectionSet = DirectionSet(0b0110);
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut bits = 0;
        for direction in directions {
            bits |= direction.bit();
        }
        Self(bits)
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_contain_expected_members() {
        assert!(DirectionSet::TOP_LEFT.contains(Direction::Top));
        assert!(DirectionSet::TOP_LEFT.contains(Direction::Left));
        assert!(!DirectionSet::TOP_LEFT.contains(Direction::Right));
        assert!(DirectionSet::ALL.contains(Direction::Bottom));
        assert!(DirectionSet::EMPTY.is_empty());
    }

    #[test]
    fn iteration_is_in_tie_break_order() {
        let order: Vec<Direction> = DirectionSet::ALL.iter().collect();
        assert_eq!(order, Direction::ALL.to_vec());

        // construction order does not matter
        let set = DirectionSet::from_directions(&[Direction::Bottom, Direction::Left]);
        let order: Vec<Direction> = set.iter().collect();
        assert_eq!(order, vec![Direction::Left, Direction::Bottom]);
    }

    #[test]
    fn default_is_top_left() {
        assert_eq!(DirectionSet::default(), DirectionSet::TOP_LEFT);
    }
}
