use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

/// A renderable page. Implementations live entirely in the application; the
/// router only stores and hands them back.
pub trait View {
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Handle a key press, optionally requesting navigation.
    fn on_key(&mut self, key: KeyEvent) -> Option<Nav> {
        let _ = key;
        None
    }
}

/// Navigation request produced by a page.
#[derive(Debug)]
pub enum Nav {
    /// Navigate to a path.
    To(&'static str),
    /// Navigate to a route by name.
    Named(&'static str),
    Back,
    Quit,
}
