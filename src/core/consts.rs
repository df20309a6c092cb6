pub const MAX_WIDTH: usize = 20;
pub const MAX_HEIGHT: usize = 20;
pub const UNDO_CAPACITY: usize = 1024;
