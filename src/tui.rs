//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiView`: terminal-free screen state, key handling and rendering
//! - `TuiInterface`: owns the terminal and plugs the view into the game loop

use crate::feedback::{Alert, points_label};
use crate::game_state::{GameInterface, UserAction};
use crate::round_state::RoundState;
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

const MAX_INPUT_LENGTH: usize = 24;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ROOT_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
const ALERT_TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const POINTS_STYLE: Style = Style::new().fg(Color::Green);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Everything on screen, independent of the terminal.
#[derive(Debug, Default)]
pub struct TuiView {
    root_word: String,
    history: Vec<String>,
    score: usize,
    input: String,
    alert: Option<Alert>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiView {
    pub fn new() -> Self {
        Self {
            status: "Ready to start".to_string(),
            ..Self::default()
        }
    }

    /// Copies the displayed parts of a round into the view.
    pub fn sync(&mut self, state: &RoundState) {
        self.root_word = state.root_word().to_string();
        self.history = state.history().to_vec();
        self.score = state.score();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Applies one key press, returning an action when the key completes one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!(
            "handle_key() - code={:?}, modifiers={:?}, input='{}'",
            key.code,
            key.modifiers,
            self.input
        );

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_key() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::F(5) => {
                info_log!("handle_key() - F5 pressed, returning Restart");
                return Some(UserAction::Restart);
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.input);
                self.error_message.clear();
                return Some(UserAction::Submit(word));
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error_message.clear();
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_key() - Ignoring character with modifier");
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.input.chars().count() < MAX_INPUT_LENGTH {
                    self.input.extend(c.to_lowercase());
                    self.alert = None;
                    self.error_message.clear();
                } else {
                    self.error_message = format!("Words are at most {MAX_INPUT_LENGTH} letters!");
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_key() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    /// Render the complete UI layout.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(6),    // Entered words + alerts
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[3]);

        Self::render_title(f, chunks[0]);
        self.render_root_word(f, chunks[1]);
        self.render_input(f, chunks[2]);
        self.render_history(f, middle[0]);
        self.render_info(f, middle[1]);
        self.render_status(f, chunks[4]);
        Self::render_instructions(f, chunks[5]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD SCRAMBLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_root_word(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {} ", self.root_word), ROOT_STYLE),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().title("Root Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.input.as_str(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().title("Enter Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        // Block borders take one row each side
        let visible = area.height.saturating_sub(2) as usize;
        for word in self.history.iter().take(visible) {
            lines.push(Line::from(vec![
                Span::raw(format!("  {word:<16}")),
                Span::styled(points_label(word), POINTS_STYLE),
            ]));
        }
        if self.history.len() > visible && visible > 0 {
            lines.pop();
            lines.push(Line::from(format!(
                "  ... and {} more",
                self.history.len() - visible + 1
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!("Entered Words ({})", self.history.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }

    fn render_info(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                format!("Score: {}", self.score),
                SUCCESS_STYLE,
            )]),
            Line::from(""),
        ];

        if let Some(alert) = &self.alert {
            lines.push(Line::from(vec![Span::styled(alert.title, ALERT_TITLE_STYLE)]));
            lines.push(Line::from(alert.message.as_str()));
            lines.push(Line::from(""));
        }

        if !self.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.message.as_str(),
                MESSAGE_STYLE,
            )]));
        }

        if !self.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.error_message.as_str(),
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.status.is_empty() {
            "Ready"
        } else {
            self.status.as_str()
        };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("Type a word | ENTER: Submit | F5: New root word | ESC: Quit")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Main TUI interface component.
///
/// Manages terminal setup and teardown, event polling and drawing.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: TuiView,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: TuiView::new(),
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
        let view = &self.view;
        self.terminal.draw(|f| view.render(f))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.view.handle_key(key)),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, state: &RoundState) {
        self.view.sync(state);
        self.view.status = "Ready - Enter your first word".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, state: &RoundState) {
        self.view.sync(state);
        self.view.alert = None;
        self.view.message = format!("'{word}' accepted: {}", points_label(word));
        self.view.status = format!("Score: {}", state.score());
        self.draw_or_log();
    }

    fn display_rejection(&mut self, alert: &Alert) {
        self.view.alert = Some(alert.clone());
        self.view.message.clear();
        self.view.status = alert.title.to_string();
        self.draw_or_log();
    }

    fn display_new_round(&mut self, state: &RoundState) {
        self.view.sync(state);
        self.view.input.clear();
        self.view.alert = None;
        self.view.error_message.clear();
        self.view.message = format!("New round: '{}'", state.root_word());
        self.view.status = "New round - Enter your first word".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, state: &RoundState) {
        self.view.message = format!("Final score: {}", state.score());
        self.view.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
