use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct HelpPage;

impl Default for HelpPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), area);

        let reading_help = vec![
            Line::from(vec![
                Span::styled("Click right half", Style::new().bold().cyan()),
                Span::raw("   Turn to the next page"),
            ]),
            Line::from(vec![
                Span::styled("Click left half", Style::new().bold().cyan()),
                Span::raw("    Turn back a page"),
            ]),
            Line::from(vec![
                Span::styled("?", Style::new().bold().cyan()),
                Span::raw("                  Toggle this help"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(reading_help).block(Block::bordered().title("Reading")),
            sections[0],
        );

        let quit_help = vec![
            Line::from(vec![
                Span::styled("q / Esc / Ctrl-C", Style::new().bold().yellow()),
                Span::raw("   Close the book"),
            ]),
            Line::from(vec![
                Span::styled("Any key or click", Style::new().bold().yellow()),
                Span::raw("   Dismiss this overlay"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(quit_help).block(Block::bordered().title("Leaving")),
            sections[1],
        );

        let tips = vec![
            Line::from("The first and last pages absorb extra clicks; the book never wraps around"),
            Line::from("The status bar shows the current page number and chapter title"),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[2],
        );
    }
}
