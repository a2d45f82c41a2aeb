//! Move history panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, Focus};

/// Renders the history list; the current entry is shown but not selectable
/// as a jump target.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            ListItem::new(entry.label).style(style)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::History => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let title = format!("History ({})", app.game().sort_order());

    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    let mut list_state = ListState::default();
    if app.focus() == Focus::History {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("> ");
        list_state.select(Some(app.selected_row()));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}
