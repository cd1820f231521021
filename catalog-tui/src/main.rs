use catalog_service::Catalog;
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    catalog_tui::run(Catalog::builtin()?)
}
