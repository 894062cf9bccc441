use crate::ui::theme::{BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str =
    " a: Add │ e/Enter: Edit │ d: Delete │ r: Refresh │ ↑/↓: Select │ q: Quit";
const FORM_HINTS: &str = " Enter: Save │ Esc: Cancel │ Ctrl+C: Quit";

pub struct Footer {
    form_open: bool,
}

impl Footer {
    pub fn new(form_open: bool) -> Self {
        Self { form_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.form_open {
            FORM_HINTS
        } else {
            LIST_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
