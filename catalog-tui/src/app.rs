use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use catalog_service::{
    next_sort, Catalog, CategoryId, EnrichedProduct, Explorer, Query, QueryAction, UserId,
};

// =============================================================================
// Focus
// =============================================================================

/// The control that receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Owner tabs: All, then one per user
    Owners,
    /// Product name search field
    Search,
    /// Category buttons: All, then one per category
    Categories,
    /// Product table
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Owners => Focus::Search,
            Focus::Search => Focus::Categories,
            Focus::Categories => Focus::Table,
            Focus::Table => Focus::Owners,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Owners => Focus::Table,
            Focus::Search => Focus::Owners,
            Focus::Categories => Focus::Search,
            Focus::Table => Focus::Categories,
        }
    }
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub explorer: Explorer,
    pub focus: Focus,
    pub should_quit: bool,

    /// 0 is the "All" tab, `i + 1` is `users[i]`
    pub owner_cursor: usize,
    /// 0 is the "All" button, `i + 1` is `categories[i]`
    pub category_cursor: usize,
    /// Highlighted row in the visible table
    pub selected_row: usize,
}

impl App {
    pub fn new(catalog: Catalog) -> Result<Self> {
        Ok(Self {
            explorer: Explorer::new(catalog)?,
            focus: Focus::Owners,
            should_quit: false,
            owner_cursor: 0,
            category_cursor: 0,
            selected_row: 0,
        })
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn query(&self) -> &Query {
        self.explorer.query()
    }

    /// Rows currently shown in the table
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        self.explorer.visible()
    }

    fn dispatch(&mut self, action: QueryAction) {
        self.explorer.apply(action);
        self.selected_row = 0;
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    // =========================================================================
    // Cursor movement
    // =========================================================================

    pub fn move_left(&mut self) {
        match self.focus {
            Focus::Owners => self.owner_cursor = self.owner_cursor.saturating_sub(1),
            Focus::Categories => self.category_cursor = self.category_cursor.saturating_sub(1),
            Focus::Search | Focus::Table => {}
        }
    }

    pub fn move_right(&mut self) {
        match self.focus {
            Focus::Owners => {
                let last = self.explorer.users().len();
                self.owner_cursor = (self.owner_cursor + 1).min(last);
            }
            Focus::Categories => {
                let last = self.explorer.categories().len();
                self.category_cursor = (self.category_cursor + 1).min(last);
            }
            Focus::Search | Focus::Table => {}
        }
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.visible().len();
        if self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        let last = self.visible().len().saturating_sub(1);
        self.selected_row = (self.selected_row + 10).min(last);
    }

    // =========================================================================
    // Query actions
    // =========================================================================

    /// Owner under the tab cursor, `None` for "All"
    pub fn owner_at_cursor(&self) -> Option<UserId> {
        self.owner_cursor
            .checked_sub(1)
            .and_then(|i| self.explorer.users().get(i))
            .map(|user| user.id)
    }

    /// Category under the button cursor, `None` for "All"
    pub fn category_at_cursor(&self) -> Option<CategoryId> {
        self.category_cursor
            .checked_sub(1)
            .and_then(|i| self.explorer.categories().get(i))
            .map(|category| category.id)
    }

    /// Enter/Space on the focused control
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Owners => self.select_owner(self.owner_at_cursor()),
            Focus::Categories => match self.category_at_cursor() {
                Some(id) => self.toggle_category(id),
                None => self.clear_categories(),
            },
            Focus::Search => self.focus = Focus::Table,
            Focus::Table => {}
        }
    }

    pub fn select_owner(&mut self, owner: Option<UserId>) {
        self.dispatch(QueryAction::SelectOwner(owner));
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.dispatch(QueryAction::ToggleCategory(id));
    }

    pub fn clear_categories(&mut self) {
        self.dispatch(QueryAction::ClearCategories);
    }

    pub fn search_push_char(&mut self, c: char) {
        let mut text = self.query().product_name.clone();
        text.push(c);
        self.dispatch(QueryAction::SetProductName(text));
    }

    pub fn search_pop_char(&mut self) {
        let mut text = self.query().product_name.clone();
        if text.pop().is_some() {
            self.dispatch(QueryAction::SetProductName(text));
        }
    }

    pub fn clear_search(&mut self) {
        self.dispatch(QueryAction::ClearProductName);
    }

    pub fn reset_all(&mut self) {
        self.dispatch(QueryAction::ResetAll);
        self.owner_cursor = 0;
        self.category_cursor = 0;
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    pub fn cycle_sort(&mut self) {
        self.explorer.set_sort(next_sort(self.explorer.sort()));
        self.selected_row = 0;
    }

    pub fn reverse_sort(&mut self) {
        if let Some(mut sort) = self.explorer.sort() {
            sort.direction = sort.direction.reversed();
            self.explorer.set_sort(Some(sort));
            self.selected_row = 0;
        }
    }
}
