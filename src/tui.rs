//! TUI (Terminal User Interface) module for Bulls and Cows
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringGuess`: typing a guess, Enter submits it to the round driver
//! - `RoundOver`: the summary is shown and the replay prompt waits for y/n
//!
//! Validation is left to the engine: any printable character can be typed, and
//! rejected guesses come back through `display_invalid_guess`.

use crate::cli::{invalid_guess_message, score_message, summary_message};
use crate::engine::{BullCowCount, GuessStatus};
use crate::game_state::{GameInterface, RoundOutcome, RoundSummary, Turn, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const REPLAY_PROMPT: &str = "Play again with the same hidden word? (y/n)";
const MAX_INPUT_LENGTH: usize = 16;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const PROMPT_STYLE: Style = Style::new().fg(Color::Yellow);
const BULL_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const COW_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const MISS_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredRow {
    guess: String,
    count: BullCowCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    RoundOver,
}

/// What a key press means while a guess is being typed.
#[derive(Debug, PartialEq, Eq)]
enum GuessKey {
    Push(char),
    Pop,
    Submit,
    Exit,
    Ignore,
}

fn classify_guess_key(key: &KeyEvent, input_len: usize) -> GuessKey {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if has_ctrl => GuessKey::Exit,
        KeyCode::Esc => GuessKey::Exit,
        KeyCode::Enter => GuessKey::Submit,
        KeyCode::Backspace => GuessKey::Pop,
        _ if has_ctrl || has_alt => GuessKey::Ignore,
        // Replacement and control characters show up from terminal escape
        // sequences (e.g. alt-tab) and are never part of a guess.
        KeyCode::Char(c) if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD => {
            GuessKey::Ignore
        }
        KeyCode::Char(c) if input_len < MAX_INPUT_LENGTH => GuessKey::Push(c),
        _ => GuessKey::Ignore,
    }
}

/// `Some(answer)` once the replay prompt has been answered.
fn classify_replay_key(key: &KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y' | 'Y') => Some(true),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(false),
        _ => None,
    }
}

/// Bulls and cows are counts, not positions, so letters are drawn plain and
/// only the counts are coloured.
fn render_row(row: &ScoredRow, index: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:>2}. ", index + 1))];
    for c in row.guess.chars() {
        spans.push(Span::styled(format!(" {c} "), MISS_STYLE));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!(" {} bulls ", row.count.bulls), BULL_STYLE));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(format!(" {} cows ", row.count.cows), COW_STYLE));
    Line::from(spans)
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    rows: &'a [ScoredRow],
    current_input: &'a str,
    state: TuiState,
    turn: Option<Turn>,
    message: &'a str,
    prompt: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<ScoredRow>,
    current_input: String,
    state: TuiState,
    turn: Option<Turn>,
    message: String,
    prompt: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            turn: None,
            message: String::new(),
            prompt: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            state: self.state,
            turn: self.turn,
            message: &self.message,
            prompt: &self.prompt,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(8),     // Board
                Constraint::Length(6),  // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("BULLS AND COWS")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines: Vec<Line> = ctx
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| render_row(row, i))
            .collect();

        if ctx.state == TuiState::EnteringGuess {
            if let Some(turn) = ctx.turn {
                lines.push(Line::from(vec![
                    Span::raw(format!("{:>2}. ", turn.current_try)),
                    Span::styled(format!("{}_", ctx.current_input), INFO_STYLE),
                ]));
            }
        }

        let title = match ctx.turn {
            Some(turn) => format!(
                "Guesses ({} letters, {} tries)",
                turn.word_length, turn.max_tries
            ),
            None => "Guesses".to_string(),
        };
        let paragraph =
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn info_lines<'a>(ctx: &RenderContext<'a>) -> Vec<Line<'a>> {
        let message_style = match ctx.state {
            TuiState::EnteringGuess => MESSAGE_STYLE,
            TuiState::RoundOver => SUCCESS_STYLE,
        };
        let mut lines = Vec::new();
        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, message_style)]));
        }
        if !ctx.prompt.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.prompt, PROMPT_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }
        lines
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let lines = Self::info_lines(ctx);
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
            }
            TuiState::RoundOver => "Y: Play again with the same word | N / ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Next key press, or `None` if the poll timed out or the event was not a press.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_guess_key(&mut self, key: &KeyEvent) -> Option<UserAction> {
        match classify_guess_key(key, self.current_input.chars().count()) {
            GuessKey::Push(c) => {
                self.current_input.push(c);
                self.error_message.clear();
                None
            }
            GuessKey::Pop => {
                self.current_input.pop();
                None
            }
            GuessKey::Submit => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_key() - Submitting '{}'", guess);
                Some(UserAction::Guess(guess))
            }
            GuessKey::Exit => Some(UserAction::Exit),
            GuessKey::Ignore => {
                debug_log!("handle_guess_key() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_intro(&mut self, word_length: usize, max_tries: u32) {
        self.rows.clear();
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("Can you guess the {word_length} letter isogram I'm thinking of?");
        self.status = format!("New round - {max_tries} tries");
        self.draw_or_log();
    }

    fn read_guess(&mut self, turn: Turn) -> UserAction {
        self.state = TuiState::EnteringGuess;
        self.turn = Some(turn);
        self.status = format!("Try {} of {}", turn.current_try, turn.max_tries);

        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return UserAction::Exit;
            }
            match Self::next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.handle_guess_key(&key) {
                        return action;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_guess() - Input error: {}, returning Exit", e);
                    return UserAction::Exit;
                }
            }
        }
    }

    fn display_invalid_guess(&mut self, status: GuessStatus, word_length: usize) {
        self.error_message = invalid_guess_message(status, word_length).unwrap_or_default();
        self.draw_or_log();
    }

    fn display_score(&mut self, guess: &str, count: BullCowCount) {
        self.rows.push(ScoredRow {
            guess: guess.to_string(),
            count,
        });
        self.error_message.clear();
        self.message = score_message(count);
        self.draw_or_log();
    }

    fn display_summary(&mut self, summary: &RoundSummary) {
        self.state = TuiState::RoundOver;
        self.message = format!(
            "{} ({} of {} tries used)",
            summary_message(summary),
            summary.guesses_used,
            summary.max_tries
        );
        self.status = match summary.outcome {
            RoundOutcome::Won => "Round won".to_string(),
            RoundOutcome::Lost | RoundOutcome::Aborted => "Round lost".to_string(),
        };
        self.draw_or_log();
    }

    fn ask_play_again(&mut self) -> bool {
        self.state = TuiState::RoundOver;
        self.error_message.clear();
        self.prompt = REPLAY_PROMPT.to_string();

        loop {
            if self.draw().is_err() {
                return false;
            }
            match Self::next_key() {
                Ok(Some(key)) => {
                    if let Some(answer) = classify_replay_key(&key) {
                        info_log!("ask_play_again() - Answer: {}", answer);
                        self.prompt.clear();
                        return answer;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug_log!("ask_play_again() - Input error: {}", e);
                    return false;
                }
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
