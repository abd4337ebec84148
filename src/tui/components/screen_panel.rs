//! # ScreenPanel Component
//!
//! Draws a core `View` line for line, exactly as its plain-text form reads.
//! The only thing added is styling: the title is bold, the highlighted
//! line is cyan, and the footer is dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::view::View;
use crate::tui::component::Component;

pub struct ScreenPanel<'a> {
    pub view: &'a View,
}

impl<'a> ScreenPanel<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view }
    }

    /// The styled lines, in the same order as `View`'s `Display` output.
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(self.view.lines.len() + 4);
        lines.push(Line::styled(
            self.view.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
        for line in &self.view.lines {
            let style = if line.highlighted {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::styled(line.text.as_str(), style));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            self.view.footer.as_str(),
            Style::default().fg(Color::DarkGray),
        ));
        lines
    }
}

impl Component for ScreenPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph =
            Paragraph::new(self.lines()).block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::App;
    use crate::core::view::render;

    #[test]
    fn test_lines_match_plain_text_frame() {
        let view = render(&App::default());
        let panel = ScreenPanel::new(&view);
        let joined: String = panel
            .lines()
            .iter()
            .map(|l| format!("{}\n", l))
            .collect();
        assert_eq!(joined, view.to_string());
    }

    #[test]
    fn test_highlighted_line_is_styled() {
        let view = render(&App::default());
        let panel = ScreenPanel::new(&view);
        let lines = panel.lines();
        // title, blank, then the cursor row
        assert_eq!(lines[2].style.fg, Some(Color::Cyan));
        assert_eq!(lines[3].style.fg, None);
    }
}
