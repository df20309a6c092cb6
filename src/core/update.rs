use crate::core::{BlockReason, Direction, GameChangeType, GameUpdate, Level, MoveRecord, Tile};

impl Level {
    /// Moves the player one cell, pushing a box if one is in the way.
    ///
    /// Every check runs before anything is written, so a blocked move leaves
    /// the level untouched. A successful move is recorded for undo unless the
    /// history is already full; the move itself happens either way.
    pub fn try_move(&mut self, direction: Direction) -> GameUpdate {
        let dir = direction.delta();
        let origin = self.player;
        let next = origin + dir;

        let Some(&dest) = self.grid.get(&next) else {
            return self.blocked(direction, BlockReason::OutOfBounds);
        };
        if dest == Tile::Wall {
            return self.blocked(direction, BlockReason::Wall);
        }

        let record = if dest.is_box() {
            let landing = next + dir;
            let Some(&beyond) = self.grid.get(&landing) else {
                return self.blocked(direction, BlockReason::BoxOutOfBounds);
            };
            if !beyond.is_open() {
                return self.blocked(direction, BlockReason::BoxBlocked);
            }
            MoveRecord {
                prior_player: origin,
                box_move: Some((next, landing)),
            }
        } else if dest.is_open() {
            MoveRecord {
                prior_player: origin,
                box_move: None,
            }
        } else {
            return self.blocked(direction, BlockReason::Occupied);
        };

        if self.history.push(record) {
            if self.history.is_full() {
                log::warn!(
                    "undo history full at {} moves; later moves cannot be undone",
                    self.history.capacity()
                );
            }
        } else {
            log::trace!("undo history full, move not recorded");
        }

        if let Some((from, to)) = record.box_move {
            self.grid[&to] = self.grid[&to].with_box();
            self.grid[&from] = self.grid[&from].without_box();
        }

        self.grid[&origin] = self.grid[&origin].without_player();
        self.player = next;
        self.grid[&next] = self.grid[&next].with_player();
        self.move_count += 1;

        let change = if record.box_move.is_some() {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        };
        log::debug!(
            "{:?}: {} to ({}, {}), move {}",
            direction,
            change,
            next.x,
            next.y,
            self.move_count
        );
        GameUpdate::Moved(change)
    }

    fn blocked(&self, direction: Direction, reason: BlockReason) -> GameUpdate {
        log::trace!(
            "{:?} from ({}, {}) rejected: {}",
            direction,
            self.player.x,
            self.player.y,
            reason
        );
        GameUpdate::Blocked(reason)
    }
}
