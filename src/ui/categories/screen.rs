//! Category table rendering.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::ui::theme::{ACCENT, BORDER, MUTED, SELECTED_BG, TEXT};

use super::state::CategoryState;

pub fn render_category_table(
    frame: &mut Frame,
    area: Rect,
    state: &CategoryState,
    selection: usize,
) {
    let block = Block::default()
        .title(format!(" Categories ({}) ", state.len()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));

    if state.is_empty() {
        let message = if state.is_loading {
            "Loading categories..."
        } else {
            "No categories yet. Press 'a' to add one."
        };
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message)])
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header =
        Row::new(["#", "Name", "Id"]).style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD));

    let rows = state.categories.iter().enumerate().map(|(idx, category)| {
        let id = category
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unsaved".to_string());
        Row::new([format!("{}", idx + 1), category.name.clone(), id])
            .style(Style::default().fg(TEXT))
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(26),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(SELECTED_BG).fg(ACCENT))
        .highlight_symbol("▶ ");

    let mut table_state =
        TableState::default().with_selected(Some(selection.min(state.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}
