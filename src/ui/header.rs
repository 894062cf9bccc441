use crate::ui::categories::CategoryState;
use crate::ui::theme::{ACCENT, BORDER, MUTED, SUCCESS, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header<'a> {
    server: &'a str,
    state: &'a CategoryState,
}

impl<'a> Header<'a> {
    pub fn new(server: &'a str, state: &'a CategoryState) -> Self {
        Self { server, state }
    }

    pub fn widget(&self, animation_tick: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(MUTED);

        let status = if self.state.is_loading {
            Span::styled(
                format!("{} loading", SPINNER_FRAMES[animation_tick % SPINNER_FRAMES.len()]),
                Style::default().fg(ACCENT),
            )
        } else {
            Span::styled("● ready", Style::default().fg(SUCCESS))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Quizzer admin",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.server.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} categories", self.state.len()), text_style),
            Span::styled("  │  ", separator_style),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
