use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Explorer layout: header, owner tabs, search, categories, table, footer
pub fn create_explorer_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Owner tabs
            Constraint::Length(3), // Search field
            Constraint::Length(3), // Category buttons
            Constraint::Min(1),    // Product table
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Centered rect of at most `height` rows, used for the empty-state message
pub fn centered_rows(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
