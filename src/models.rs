use crate::core::{ActionOutcome, Level};

pub struct GameRenderState<'a> {
    pub level_name: &'a str,
    pub level: &'a Level,
    pub last_outcome: Option<ActionOutcome>,
}

impl GameRenderState<'_> {
    pub fn won(&self) -> bool {
        self.level.is_solved()
    }
}
