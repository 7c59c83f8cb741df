use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::story::Page;
use crate::transition::{FlipParams, PivotEdge};

/// Renders one story page, applying the flip parameters of the in-flight
/// turn: rotation about the vertical axis narrows the visible width toward
/// the pivot edge, opacity dims the palette.
#[derive(Debug)]
pub struct PageView;

impl PageView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &Page, params: &FlipParams) {
        let Some(area) = flipped_area(area, params) else {
            // page is edge-on mid-turn; nothing to draw this frame
            return;
        };
        let style = fade_style(params.opacity);

        let block = Block::bordered()
            .title(Line::from(page.title.clone()).bold())
            .style(style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let has_text = page.paragraphs().next().is_some();
        let sections = if has_text {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(45), Constraint::Min(0)])
                .split(inner)
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0)])
                .split(inner)
        };

        // The asset reference is opaque to us; draw a framed placeholder.
        let illustration = Paragraph::new(format!("~ {} ~", page.image))
            .alignment(Alignment::Center)
            .block(Block::bordered().title("Illustration"))
            .style(style);
        frame.render_widget(illustration, sections[0]);

        if has_text {
            let mut lines: Vec<Line> = Vec::new();
            for paragraph in page.paragraphs() {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(paragraph.to_string()));
            }
            let narrative = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(style);
            frame.render_widget(narrative, sections[1]);
        }
    }
}

/// Projects the rotated page onto the terminal: visible width scales with
/// |cos rotate_y|, anchored at the pivot edge. Returns `None` when the page
/// is too close to edge-on to draw.
pub fn flipped_area(area: Rect, params: &FlipParams) -> Option<Rect> {
    let scale = params.rotate_y.to_radians().cos().abs();
    let width = (f32::from(area.width) * scale).round() as u16;
    if width < 2 {
        return None;
    }
    let x = match params.origin {
        PivotEdge::Left => area.x,
        PivotEdge::Center => area.x + (area.width - width) / 2,
        PivotEdge::Right => area.x + area.width - width,
    };
    Some(Rect::new(x, area.y, width, area.height))
}

fn fade_style(opacity: f32) -> Style {
    if opacity >= 0.85 {
        Style::new()
    } else if opacity >= 0.45 {
        Style::new().fg(Color::Gray)
    } else {
        Style::new().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Direction;
    use crate::transition::flip_variants;

    #[test]
    fn settled_page_fills_the_whole_area() {
        let area = Rect::new(4, 2, 60, 30);
        let projected = flipped_area(area, &FlipParams::CENTER).unwrap();
        assert_eq!(projected, area);
    }

    #[test]
    fn edge_on_page_is_not_drawn() {
        let area = Rect::new(0, 0, 60, 30);
        let v = flip_variants(Direction::Forward);
        assert!(flipped_area(area, &v.enter).is_none());
        assert!(flipped_area(area, &v.exit).is_none());
    }

    #[test]
    fn partial_rotation_anchors_at_the_pivot_edge() {
        let area = Rect::new(10, 0, 60, 30);
        let half_turned = FlipParams {
            rotate_y: 60.0,
            opacity: 0.5,
            origin: PivotEdge::Right,
        };
        let projected = flipped_area(area, &half_turned).unwrap();
        assert!(projected.width < area.width);
        // right edge stays put
        assert_eq!(projected.x + projected.width, area.x + area.width);

        let left_anchored = FlipParams {
            origin: PivotEdge::Left,
            ..half_turned
        };
        let projected = flipped_area(area, &left_anchored).unwrap();
        assert_eq!(projected.x, area.x);
    }
}
