use crate::core::{Level, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A read-only copy of a level's observable state, for export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelSnapshot {
    pub width: i32,
    pub height: i32,
    pub rows: Vec<String>,
    pub player: Vec2,
    pub move_count: u32,
    pub undo_depth: usize,
    pub solved: bool,
}

impl LevelSnapshot {
    pub fn from_level(level: &Level) -> LevelSnapshot {
        let rows = level
            .rows()
            .map(|row| row.iter().map(|tile| tile.symbol()).collect::<String>())
            .collect();
        LevelSnapshot {
            width: level.width(),
            height: level.height(),
            rows,
            player: level.player_position(),
            move_count: level.move_count(),
            undo_depth: level.undo_depth(),
            solved: level.is_solved(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("level snapshot exported to {}", path.display());
        Ok(())
    }
}
