//! Sokoban puzzle engine: grid state, move and push rules, and bounded
//! multi-level undo, plus a terminal front end built on ratatui.
//!
//! Level symbols: '#' wall, '@' player, '$' box, '.' target, '*' box on target,
//! '+' player on target, anything else floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod levels;
pub mod models;
pub mod snapshot;
#[cfg(test)]
mod test;
