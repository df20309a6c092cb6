use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A single grid cell. Terrain and occupant share one value, so a box or the
/// player standing on a target are states of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Target,
    Box,
    BoxOnTarget,
    Player,
    PlayerOnTarget,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Restart,
}

/// One reversible step. `box_move` is `Some((from, to))` when the step pushed a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub prior_player: Vec2,
    pub box_move: Option<(Vec2, Vec2)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked(BlockReason),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    #[display("player moved")]
    PlayerMove,
    #[display("box pushed")]
    PlayerAndBoxMove,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    #[display("cannot move out of bounds")]
    OutOfBounds,
    #[display("cannot walk into a wall")]
    Wall,
    #[display("cannot push box out of bounds")]
    BoxOutOfBounds,
    #[display("box is blocked")]
    BoxBlocked,
    #[display("cell is occupied")]
    Occupied,
}

/// What a `UserAction` did when applied to a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(GameUpdate),
    Undo(Option<MoveRecord>),
    Restart,
}
