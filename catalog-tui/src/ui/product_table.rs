use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use catalog_service::{EnrichedProduct, Sex, Sort, SortColumn, SortDirection, NO_MATCHES_MESSAGE};

use crate::app::{App, Focus};
use crate::ui::components::focus_block;
use crate::ui::layout;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Table;
    let visible = app.visible();
    let block = focus_block("Products", focused);

    if visible.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let message = Paragraph::new(NO_MATCHES_MESSAGE)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(message, layout::centered_rows(inner, 1));
        return;
    }

    let sort = app.explorer.sort();
    let header = Row::new(
        SortColumn::ALL
            .iter()
            .map(|column| Cell::from(column_heading(*column, sort))),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = visible.iter().map(|product| product_row(product)).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(if focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    })
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}

fn product_row<'a>(product: &'a EnrichedProduct) -> Row<'a> {
    Row::new(vec![
        Cell::from(product.id.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(product.name.as_str()),
        Cell::from(product.category_label()),
        Cell::from(product.user.name.as_str())
            .style(Style::default().fg(owner_color(product.user.sex))),
    ])
}

/// Owner names are blue for men and red for women
pub fn owner_color(sex: Sex) -> Color {
    match sex {
        Sex::Male => Color::Blue,
        Sex::Female => Color::Red,
    }
}

fn column_heading(column: SortColumn, sort: Option<Sort>) -> Line<'static> {
    let indicator = match sort {
        Some(sort) if sort.column == column => match sort.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        },
        _ => "↕",
    };
    Line::from(format!("{} {}", column.title(), indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_heading_indicator() {
        let sort = Some(Sort::new(SortColumn::User, SortDirection::Descending));
        assert_eq!(column_heading(SortColumn::User, sort), Line::from("User ↓"));
        assert_eq!(column_heading(SortColumn::Id, sort), Line::from("ID ↕"));
        assert_eq!(column_heading(SortColumn::Id, None), Line::from("ID ↕"));
    }

    #[test]
    fn test_owner_color_by_sex() {
        assert_eq!(owner_color(Sex::Male), Color::Blue);
        assert_eq!(owner_color(Sex::Female), Color::Red);
    }
}
