use crate::core::{Level, MoveRecord};

impl Level {
    /// Reverts the most recent recorded move and returns its record, or does
    /// nothing and returns `None` when there is nothing left to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        let current = self.player;
        self.grid[&current] = self.grid[&current].without_player();
        self.player = record.prior_player;
        self.grid[&record.prior_player] = self.grid[&record.prior_player].with_player();

        if let Some((from, to)) = record.box_move {
            self.grid[&to] = self.grid[&to].without_box();
            self.grid[&from] = self.grid[&from].with_box();
        }

        self.move_count = self.move_count.saturating_sub(1);
        log::debug!(
            "undo: player back to ({}, {}), {} moves left to undo",
            self.player.x,
            self.player.y,
            self.history.len()
        );
        Some(record)
    }
}
