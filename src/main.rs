use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::{layout::Rect, DefaultTerminal, Frame};

pub mod input;
pub mod nav;
pub mod pages;
pub mod screen;
pub mod story;
pub mod transition;

use input::{InputAction, InputHandler};
use nav::NavState;
use screen::Screen;
use story::Story;
use transition::Turn;

// Poll tightly while a turn is animating, lazily otherwise
const ANIMATION_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Refuse to start on an empty story rather than index into nothing
    let story = Story::new("Piraye and the City of Numbers", story::builtin_pages())?;
    let terminal = ratatui::init();
    let result = crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(story).run(terminal));
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

pub struct App {
    running: bool,
    story: Story,
    nav: NavState,
    /// The single in-flight page turn, if any.
    turn: Option<Turn>,
    screen: Screen,
    input: InputHandler,
    show_help: bool,
    status_message: String,
    /// Where the page was last drawn; clicks are hit tested against this.
    page_area: Rect,
}

impl App {
    pub fn new(story: Story) -> Self {
        let nav = NavState::new(story.len());
        let status_message = format!("Page 1/{} | Press ? for help", story.len());
        Self {
            running: false,
            nav,
            turn: None,
            screen: Screen::new(),
            input: InputHandler::new(),
            show_help: false,
            status_message,
            page_area: Rect::default(),
            story,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            if self.turn.as_ref().is_some_and(|t| t.is_done()) {
                self.turn = None;
            }
            terminal.draw(|frame| self.render(frame))?;
            let timeout = if self.turn.is_some() {
                ANIMATION_TICK
            } else {
                IDLE_TICK
            };
            let action = self.input.poll(timeout, self.page_area)?;
            self.handle_action(action);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.page_area = self.screen.render(
            frame,
            &self.story,
            &self.nav,
            self.turn.as_ref(),
            &self.status_message,
            self.show_help,
        );
    }

    fn handle_action(&mut self, action: InputAction) {
        if self.show_help && !matches!(action, InputAction::None | InputAction::Redraw) {
            self.show_help = false;
            if action == InputAction::Quit {
                self.quit();
            }
            return;
        }
        match action {
            InputAction::Quit => self.quit(),
            InputAction::Help => self.show_help = true,
            InputAction::TurnForward => self.turn_page(1),
            InputAction::TurnBack => self.turn_page(-1),
            InputAction::Redraw | InputAction::None => {}
        }
    }

    fn turn_page(&mut self, delta: isize) {
        let from = self.nav.current();
        self.nav.navigate(delta);
        let to = self.nav.current();
        if to != from {
            // replaces any turn still in flight; last write wins
            self.turn = Some(Turn::start(from, to, self.nav.direction()));
        }
        self.update_status_message();
    }

    fn update_status_message(&mut self) {
        let title = self
            .story
            .page(self.nav.current())
            .map(|p| p.title.as_str())
            .unwrap_or("N/A");
        self.status_message = format!(
            "Page {}/{} | {}",
            self.nav.current() + 1,
            self.story.len(),
            title
        );
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
