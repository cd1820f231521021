use crate::output;

use color_eyre::Result;

use catalog_service::{Catalog, CatalogError};

/// Check that the catalog loads and every reference resolves
pub fn execute(loaded: Result<Catalog, CatalogError>) -> Result<()> {
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            output::error(&format!("{}", e));
            std::process::exit(1);
        }
    };

    output::check(&format!("{} users", catalog.users().len()));
    output::check(&format!("{} categories", catalog.categories().len()));
    output::check(&format!("{} products", catalog.products().len()));

    let rows = catalog.enrich()?;
    let orphans = catalog
        .users()
        .iter()
        .filter(|u| !catalog.categories().iter().any(|c| c.owner_id == u.id))
        .count();
    if orphans > 0 {
        output::warning(&format!("{} user(s) own no categories", orphans));
    }

    println!();
    output::success(&format!("Catalog is valid ({} rows)", rows.len()));
    Ok(())
}
