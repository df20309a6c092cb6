use crate::core::bounded_grid::BoundedGrid;
use crate::core::undo_stack::BoundedStack;
use crate::core::{
    ActionOutcome, MAX_HEIGHT, MAX_WIDTH, MoveRecord, Tile, UNDO_CAPACITY, UserAction, Vec2,
};

/// A loaded puzzle: the grid, the player's position, the move counter, and the
/// history needed to undo moves.
///
/// `player` always mirrors the unique `Player`/`PlayerOnTarget` cell. Loading
/// is permissive: a level without a player marker keeps the player at the origin.
#[derive(Clone, Debug)]
pub struct Level {
    pub(crate) grid: BoundedGrid<Tile>,
    pub(crate) player: Vec2,
    pub(crate) move_count: u32,
    pub(crate) history: BoundedStack<MoveRecord>,
    source: Vec<String>,
}

impl Default for Level {
    fn default() -> Self {
        Level::new()
    }
}

impl Level {
    pub fn new() -> Level {
        Level::with_undo_capacity(UNDO_CAPACITY)
    }

    pub fn with_undo_capacity(capacity: usize) -> Level {
        Level {
            grid: BoundedGrid::new_with_size(0, 0, Tile::Floor),
            player: Vec2::default(),
            move_count: 0,
            history: BoundedStack::new(capacity),
            source: Vec::new(),
        }
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Level {
        let mut level = Level::new();
        level.load_level(rows);
        level
    }

    /// Replaces the whole level. Height comes from the row count and width from
    /// the first row, both clamped to the maximum size. Short rows leave
    /// trailing floor, long rows are cut off.
    pub fn load_level<S: AsRef<str>>(&mut self, rows: &[S]) {
        let height = rows.len().min(MAX_HEIGHT);
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0)
            .min(MAX_WIDTH);

        let mut grid = BoundedGrid::new_with_size(width as i32, height as i32, Tile::Floor);
        let mut player = None;
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, ch) in row.as_ref().chars().take(width).enumerate() {
                let pos = Vec2 {
                    x: x as i32,
                    y: y as i32,
                };
                let tile = Tile::from_symbol(ch);
                if tile.is_player() {
                    player = Some(pos);
                }
                grid[&pos] = tile;
            }
        }

        if player.is_none() {
            log::warn!("level has no player marker; player placed at the origin");
        }
        log::info!("loaded {}x{} level", width, height);

        self.grid = grid;
        self.player = player.unwrap_or_default();
        self.move_count = 0;
        self.history.clear();
        self.source = rows.iter().map(|row| row.as_ref().to_string()).collect();
    }

    /// Reloads the rows this level was last loaded from.
    pub fn restart(&mut self) {
        let source = std::mem::take(&mut self.source);
        self.load_level(&source[..]);
    }

    pub fn apply(&mut self, action: UserAction) -> ActionOutcome {
        match action {
            UserAction::Move(direction) => ActionOutcome::Move(self.try_move(direction)),
            UserAction::Undo => ActionOutcome::Undo(self.undo()),
            UserAction::Restart => {
                self.restart();
                ActionOutcome::Restart
            }
        }
    }

    /// True when no bare box remains. A level without boxes is trivially solved.
    pub fn is_solved(&self) -> bool {
        !self.grid.iter().any(|&tile| tile == Tile::Box)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        self.grid.get(&Vec2 { x, y }).copied()
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn player_position(&self) -> Vec2 {
        self.player
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn box_count(&self) -> usize {
        self.grid.iter().filter(|tile| tile.is_box()).count()
    }

    pub fn boxes_on_targets(&self) -> usize {
        self.grid
            .iter()
            .filter(|&&tile| tile == Tile::BoxOnTarget)
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.grid.rows()
    }
}
