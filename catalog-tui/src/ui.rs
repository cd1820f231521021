pub mod components;
pub mod filters;
pub mod layout;
pub mod product_table;

use ratatui::Frame;

use crate::app::{App, Focus};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_explorer_layout(frame.area());

    let summary = format!(
        "{} of {} products",
        app.visible().len(),
        app.explorer.rows().len()
    );
    components::render_header("Product Categories", &summary, frame, chunks[0]);
    filters::render_owner_tabs(app, frame, chunks[1]);
    filters::render_search(app, frame, chunks[2]);
    filters::render_category_buttons(app, frame, chunks[3]);
    product_table::render(app, frame, chunks[4]);
    components::render_footer(footer_text(app.focus), frame, chunks[5]);
}

fn footer_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Owners => {
            "h/l: Move | Enter: Select user | /: Search | r: Reset all | s/S: Sort | Tab: Next | q: Quit"
        }
        Focus::Search => "Type to filter | Backspace: Delete | Esc: Clear | Enter/Tab: Next",
        Focus::Categories => {
            "h/l: Move | Space: Toggle | c: All categories | r: Reset all | Tab: Next | q: Quit"
        }
        Focus::Table => "j/k: Navigate | s: Sort column | S: Reverse | r: Reset all | Tab: Next | q: Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_service::{Catalog, NO_MATCHES_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app() -> App {
        App::new(Catalog::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_render_shows_filters_and_table() {
        let app = new_app();
        let screen = draw(&app);

        assert!(screen.contains("Product Categories"));
        assert!(screen.contains("12 of 12 products"));
        assert!(screen.contains("Roma"));
        assert!(screen.contains("Grocery"));
        assert!(screen.contains("Milk"));
        assert!(!screen.contains(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_render_no_matches_message() {
        let mut app = new_app();
        for c in "nothing like this".chars() {
            app.search_push_char(c);
        }
        let screen = draw(&app);

        assert!(screen.contains(NO_MATCHES_MESSAGE));
        assert!(screen.contains("0 of 12 products"));
        assert!(screen.contains("Esc: clear"));
    }

    #[test]
    fn test_render_filtered_rows_only() {
        let mut app = new_app();
        app.search_push_char('p');
        app.search_push_char('i');
        let screen = draw(&app);

        assert!(screen.contains("Pillow"));
        assert!(!screen.contains("Banana"));
    }
}
