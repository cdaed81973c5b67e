use crate::state::{CellSnapshot, Position, ResourceMeter};

/// Per-frame provider of cell snapshots.
///
/// Implementations must return the same snapshot for a position for the whole
/// duration of a frame.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Snapshot of the cell at `position`, or `None` outside the level.
    fn cell(&self, position: Position) -> Option<CellSnapshot>;

    fn player(&self) -> PlayerView;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major iterator over every position of the level.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

/// What the renderer needs to know about the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub position: Position,
    pub health: ResourceMeter,
    /// The player has left the level for good.
    pub escaped: bool,
}

impl PlayerView {
    pub const fn new(position: Position, health: ResourceMeter) -> Self {
        Self {
            position,
            health,
            escaped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_row_major() {
        let positions: Vec<_> = MapDimensions::new(2, 2).positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn contains_rejects_negative_and_edge() {
        let dims = MapDimensions::new(3, 2);
        assert!(dims.contains(Position::new(2, 1)));
        assert!(!dims.contains(Position::new(3, 1)));
        assert!(!dims.contains(Position::new(-1, 0)));
    }
}
