//! Application shell: owns the router and drives the terminal.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tiller::{Location, Router};
use tokio::sync::watch;
use tracing::debug;

use crate::view::{Nav, View};

pub struct App {
    router: Router<Box<dyn View>>,
    locations: watch::Receiver<Location>,
    status: Option<String>,
}

impl App {
    pub fn new(router: Router<Box<dyn View>>) -> Self {
        let locations = router.subscribe();
        Self {
            router,
            locations,
            status: None,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            if self.locations.has_changed()? {
                let location = self.locations.borrow_and_update().clone();
                debug!(path = %location.path, "location changed");
                self.status = Some(format!("at {}", location.path));
            }

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(100))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // address line
                Constraint::Min(0),    // current page
                Constraint::Length(1), // status / key hints
            ])
            .split(frame.area());

        let location = self.router.current().clone();
        let address = self.router.history().href(&location.path);
        let header = Paragraph::new(format!(" {}  {address}", location.name))
            .style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(header, chunks[0]);

        self.router.component_mut().render(frame, chunks[1]);

        let footer_text = match &self.status {
            Some(status) => format!(" {status}"),
            None => String::from(" [ back   ] forward   q quit"),
        };
        let footer = Paragraph::new(footer_text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.status = None;

        // Browser-style history keys work on every page.
        match key.code {
            KeyCode::Char('[') => {
                if !self.router.back() {
                    self.status = Some("nothing to go back to".to_string());
                }
                return false;
            }
            KeyCode::Char(']') => {
                if !self.router.forward() {
                    self.status = Some("nothing to go forward to".to_string());
                }
                return false;
            }
            _ => {}
        }

        match self.router.component_mut().on_key(key) {
            Some(Nav::To(path)) => {
                if let Err(err) = self.router.push(path) {
                    self.status = Some(err.to_string());
                }
            }
            Some(Nav::Named(name)) => {
                if let Err(err) = self.router.push_named(name) {
                    self.status = Some(err.to_string());
                }
            }
            Some(Nav::Back) => {
                self.router.back();
            }
            Some(Nav::Quit) => return true,
            None => {}
        }
        false
    }
}
