mod app;
mod events;
mod ui;

use app::App;
use catalog_service::Catalog;
use color_eyre::Result;

/// Run the interactive explorer over `catalog` until the user quits
pub fn run(catalog: Catalog) -> Result<()> {
    let mut app = App::new(catalog)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
