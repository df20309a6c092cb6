// Terminal Sokoban with ratatui
// Controls: W/A/S/D or arrow keys to move, U to undo, R to restart, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

use clap::Parser;
use puzzle_engine::config::Config;
use puzzle_engine::console_interface::ConsoleInput::*;
use puzzle_engine::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use puzzle_engine::core::Level;
use puzzle_engine::levels::BUILTIN_LEVELS;
use puzzle_engine::models::GameRenderState;
use puzzle_engine::snapshot::LevelSnapshot;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    if config.list_levels {
        for builtin in BUILTIN_LEVELS {
            println!("{}", builtin.name);
        }
        return Ok(());
    }

    let builtin = config.builtin_level()?;
    init_logging(&config.log_file)?;

    let mut level = Level::from_rows(&builtin.rows());
    let mut terminal = setup_terminal()?;
    let result = run_interactive(&config, builtin.name, &mut level, &mut terminal);
    cleanup_terminal()?;
    result?;

    if level.is_solved() {
        println!("Level '{}' cleared in {} moves.", builtin.name, level.move_count());
    }
    if let Some(path) = &config.export {
        LevelSnapshot::from_level(&level).write_to(path)?;
        println!("Level snapshot exported to {}", path.display());
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_out)))
        .init();
    Ok(())
}

fn run_interactive(
    config: &Config,
    level_name: &str,
    level: &mut Level,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll = config.poll_interval();
    let mut last_outcome = None;

    loop {
        render_game(
            terminal,
            &GameRenderState {
                level_name,
                level: &*level,
                last_outcome,
            },
        )?;

        match handle_input(poll)? {
            Quit => break,
            UserAction(user_action) => {
                let was_solved = level.is_solved();
                last_outcome = Some(level.apply(user_action));
                if !was_solved && level.is_solved() {
                    log::info!("level '{}' cleared in {} moves", level_name, level.move_count());
                }
            }
            Timeout | Unknown => {}
        }
    }

    log::info!("quit after {} moves", level.move_count());
    Ok(())
}
