use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::view::{Nav, View};

/// Landing page: a list of destinations reachable through the router.
pub struct Home {
    selected: usize,
    destinations: Vec<(&'static str, &'static str)>, // (label, path)
}

impl Default for Home {
    fn default() -> Self {
        Self {
            selected: 0,
            destinations: vec![
                ("New Page", "/new-page"),
                // Deliberately undeclared, to show the router rejecting it.
                ("Nowhere", "/does-not-exist"),
            ],
        }
    }
}

impl View for Home {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let banner = Paragraph::new("Pick a destination and press Enter")
            .block(Block::default().title("Home").borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[0]);

        let items: Vec<ListItem> = self
            .destinations
            .iter()
            .enumerate()
            .map(|(i, (label, path))| {
                let prefix = if i == self.selected { "> " } else { "  " };
                let line = Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(*label, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {path}"), Style::default().fg(Color::DarkGray)),
                ]);
                ListItem::new(line)
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title("Destinations (j/k to move, n for /new-page)")
                .borders(Borders::ALL),
        );
        frame.render_widget(list, chunks[1]);
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Nav> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.destinations.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => Some(Nav::To(self.destinations[self.selected].1)),
            KeyCode::Char('n') => Some(Nav::Named("NewPage")),
            KeyCode::Char('q') => Some(Nav::Quit),
            _ => None,
        }
    }
}
