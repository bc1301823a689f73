use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::view::{Nav, View};

/// The second page, reachable at `/new-page`.
#[derive(Default)]
pub struct NewPage;

impl View for NewPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = vec![
            Line::from(""),
            Line::from("You navigated here through the router."),
            Line::from(""),
            Line::styled(
                "Esc or b: back   h: home by name   q: quit",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let paragraph = Paragraph::new(body)
            .block(Block::default().title("New Page").borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Nav> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Some(Nav::Back),
            KeyCode::Char('h') => Some(Nav::Named("Home")),
            KeyCode::Char('q') => Some(Nav::Quit),
            _ => None,
        }
    }
}
