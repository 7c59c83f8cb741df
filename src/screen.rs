use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::Line,
    Frame,
};

use crate::nav::NavState;
use crate::pages::help::HelpPage;
use crate::pages::page_view::PageView;
use crate::story::Story;
use crate::transition::{FlipParams, Turn, TurnFrame};

#[derive(Debug)]
pub struct Screen {
    page_view: PageView,
    help: HelpPage,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            page_view: PageView::new(),
            help: HelpPage::new(),
        }
    }

    /// Draws the whole frame and returns the page area so the caller can hit
    /// test the next click against it.
    pub fn render(
        &self,
        frame: &mut Frame,
        story: &Story,
        nav: &NavState,
        turn: Option<&Turn>,
        status: &str,
        show_help: bool,
    ) -> Rect {
        let area = frame.area();
        let title = Line::from(format!("Storybook - {}", story.title()))
            .bold()
            .blue()
            .left_aligned();
        let block = ratatui::widgets::Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Split into the page and a one-line status bar
        let vlayout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(inner_area);
        let page_area = vlayout[0];

        // Only one page is ever in transition; with no turn in flight the
        // current page renders settled.
        let visible = match turn {
            Some(turn) => turn.frame(),
            None => TurnFrame {
                page: nav.current(),
                params: FlipParams::CENTER,
            },
        };
        if let Some(page) = story.page(visible.page) {
            self.page_view.render(frame, page_area, page, &visible.params);
        }

        let status_line = Line::from(format!(
            "{}  |  Click left/right half to turn  ?: Help  q: Quit",
            status
        ))
        .on_dark_gray()
        .white();
        frame.render_widget(status_line, vlayout[1]);

        if show_help {
            self.help.render(frame, page_area);
        }

        page_area
    }
}
