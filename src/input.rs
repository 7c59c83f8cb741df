use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    TurnForward,
    TurnBack,
    Help,
    Quit,
    Redraw,
    None,
}

#[derive(Debug)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits at most `timeout` for the next event so an in-flight turn keeps
    /// animating between inputs. `page_area` is the rect the page was last
    /// drawn into; clicks land in its left or right half.
    pub fn poll(&mut self, timeout: Duration, page_area: Rect) -> color_eyre::Result<InputAction> {
        if !event::poll(timeout)? {
            return Ok(InputAction::None);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            Event::Mouse(mouse) => Ok(self.on_mouse_event(mouse, page_area)),
            Event::Resize(_, _) => Ok(InputAction::Redraw),
            _ => Ok(InputAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> InputAction {
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
            | (KeyModifiers::NONE, KeyCode::Esc) => InputAction::Quit,
            (_, KeyCode::Char('?')) => InputAction::Help,
            _ => InputAction::None,
        }
    }

    /// Page turning is click-driven: a left-button press on the left half of
    /// the page turns back, on the right half forward. Clicks outside the
    /// page area are ignored.
    pub fn on_mouse_event(&mut self, mouse: MouseEvent, page_area: Rect) -> InputAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return InputAction::None;
        }
        if !page_area.contains(Position::new(mouse.column, mouse.row)) {
            return InputAction::None;
        }
        let midpoint = page_area.x + page_area.width / 2;
        if mouse.column < midpoint {
            InputAction::TurnBack
        } else {
            InputAction::TurnForward
        }
    }
}
