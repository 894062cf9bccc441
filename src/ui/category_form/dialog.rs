//! Rendering for the create/edit modal.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, DIALOG_BORDER, MUTED, SELECTED_BG, TEXT};

use super::state::CategoryFormState;

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 7;
const LABEL: &str = " Name: ";

pub fn render_category_form(frame: &mut Frame, state: &CategoryFormState) {
    if !state.is_open() {
        return;
    }

    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_width = inner.width.saturating_sub(LABEL.len() as u16 + 1) as usize;
    let name = visible_tail(state.name(), field_width);
    let padding = field_width.saturating_sub(name.chars().count());

    let hint = if state.is_submitting() {
        Span::styled(" Saving...", Style::default().fg(ACCENT))
    } else {
        Span::styled(
            " Enter: save │ Esc: cancel",
            Style::default()
                .fg(MUTED)
                .add_modifier(Modifier::DIM),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(LABEL, Style::default().fg(TEXT)),
            Span::styled(
                format!("{}{}", name, " ".repeat(padding)),
                Style::default().fg(TEXT).bg(SELECTED_BG),
            ),
        ]),
        Line::from(""),
        Line::from(hint),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if !state.is_submitting() && inner.height > 1 {
        let x = inner.x + LABEL.len() as u16 + name.chars().count() as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + 1));
    }
}

/// Last `width` characters of `text`, so the cursor end stays visible.
fn visible_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}
