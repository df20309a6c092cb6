use crate::core::{ActionOutcome, Direction, GameUpdate, Level, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

const INSTRUCTIONS: &str = "Arrows/WASD move | U undo | R restart | Q quit";

/// Splits a multi-line level literal into rows, dropping blank lines.
/// Leading spaces are kept since they are floor cells.
pub fn parse_rows(s: &str) -> Vec<&str> {
    s.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        let title = if state.won() {
            format!("Sokoban: {} - LEVEL CLEARED!", state.level_name)
        } else {
            format!("Sokoban: {}", state.level_name)
        };
        let game_paragraph = Paragraph::new(render_level_to_string(state.level))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_color = if state.won() { Color::Green } else { Color::Yellow };
        let status_paragraph = Paragraph::new(status_text(state))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instruction_paragraph = Paragraph::new(INSTRUCTIONS)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn render_level_to_string(level: &Level) -> String {
    let mut result = String::new();
    for row in level.rows() {
        for tile in row {
            result.push(tile.symbol());
        }
        result.push('\n');
    }
    result
}

pub fn status_text(state: &GameRenderState) -> String {
    let level = state.level;
    let mut text = format!(
        "Moves: {} | Boxes: {}/{} | Undo: {}",
        level.move_count(),
        level.boxes_on_targets(),
        level.box_count(),
        level.undo_depth()
    );

    if let Some(outcome) = &state.last_outcome {
        let last = match outcome {
            ActionOutcome::Move(GameUpdate::Moved(change)) => format!("Last: {}", change),
            ActionOutcome::Move(GameUpdate::Blocked(reason)) => format!("Blocked: {}", reason),
            ActionOutcome::Undo(Some(_)) => "Last: undo".to_string(),
            ActionOutcome::Undo(None) => "Nothing to undo".to_string(),
            ActionOutcome::Restart => "Level restarted".to_string(),
        };
        text.push_str(" | ");
        text.push_str(&last);
    }

    if state.won() {
        text.push_str(" | LEVEL CLEARED!");
    }
    text
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(poll: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(poll)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('u') | KeyCode::Char('U') => ConsoleInput::UserAction(UserAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
        _ => ConsoleInput::Unknown,
    }
}
