use crate::ui::screen::ScreenState;
use crate::ui::theme::{BEAM_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_WARN};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title, current screen and breadcrumb trail.
    pub fn widget(&self, screen: &ScreenState, view_attached: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let current = screen.current.map(|d| d.title()).unwrap_or("—");
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("BEAM", Style::default().fg(BEAM_TEAL)),
            Span::styled("  │  ", separator_style),
            Span::styled(current.to_string(), text_style),
        ];

        if !screen.trail.is_empty() {
            let trail = screen
                .trail
                .iter()
                .map(|d| d.title())
                .collect::<Vec<_>>()
                .join(" › ");
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(trail, separator_style));
        }

        if !view_attached {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("detached", Style::default().fg(STATUS_WARN)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
