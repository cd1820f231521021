use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::components::{choice_style, focus_block};

pub fn render_owner_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Owners;
    let query = app.query();

    let tabs = std::iter::once(("All", None))
        .chain(
            app.explorer
                .users()
                .iter()
                .map(|user| (user.name.as_str(), Some(user.id))),
        )
        .enumerate();

    let mut spans = Vec::new();
    for (i, (label, owner)) in tabs {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = choice_style(
            query.is_owner_selected(owner),
            focused && i == app.owner_cursor,
        );
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    let tabs = Paragraph::new(Line::from(spans)).block(focus_block("Users", focused));
    frame.render_widget(tabs, area);
}

pub fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Search;
    let query = app.query();

    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(Color::Gray))];
    if query.has_product_name() {
        spans.push(Span::styled(
            query.product_name.as_str(),
            Style::default().fg(Color::White),
        ));
    } else if !focused {
        spans.push(Span::styled("Search", Style::default().fg(Color::DarkGray)));
    }
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // Clear hint only shows while there is text to clear
    let title = if query.has_product_name() {
        "Search [Esc: clear]"
    } else {
        "Search"
    };

    let search = Paragraph::new(Line::from(spans)).block(focus_block(title, focused));
    frame.render_widget(search, area);
}

pub fn render_category_buttons(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Categories;
    let query = app.query();

    let mut spans = vec![Span::styled(
        " All ",
        choice_style(!query.has_categories(), focused && app.category_cursor == 0),
    )];

    for (i, category) in app.explorer.categories().iter().enumerate() {
        spans.push(Span::raw(" "));
        let style = choice_style(
            query.is_category_selected(category.id),
            focused && app.category_cursor == i + 1,
        );
        spans.push(Span::styled(format!(" {} ", category.title), style));
    }

    let buttons = Paragraph::new(Line::from(spans)).block(focus_block("Categories", focused));
    frame.render_widget(buttons, area);
}
