mod bounded_grid;
mod bounds;
mod consts;
mod level;
mod model_helpers;
mod models;
mod undo;
mod undo_stack;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use level::Level;
pub use models::{
    ActionOutcome, BlockReason, Direction, GameChangeType, GameUpdate, MoveRecord, Tile,
    UserAction, Vec2,
};
pub use undo_stack::BoundedStack;
