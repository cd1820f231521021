use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.quit();
            return Ok(());
        }

        match key_event.code {
            KeyCode::Tab => {
                self.focus_next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return Ok(());
            }
            _ => {}
        }

        // The search field takes printable keys as text
        if self.focus == Focus::Search {
            match key_event.code {
                KeyCode::Esc => {
                    if self.query().has_product_name() {
                        self.clear_search();
                    } else {
                        self.focus = Focus::Table;
                    }
                }
                KeyCode::Enter => self.activate(),
                KeyCode::Backspace => self.search_pop_char(),
                KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.clear_search()
                }
                KeyCode::Char(c) => self.search_push_char(c),
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('/') => self.focus_search(),
            KeyCode::Char('r') => self.reset_all(),
            KeyCode::Char('c') => self.clear_categories(),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Char('S') => self.reverse_sort(),
            KeyCode::Left | KeyCode::Char('h') => self.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.move_right(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
        Ok(())
    }
}
