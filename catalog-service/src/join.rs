// Join Stage
// Resolves each product's category and the category's owner

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, EnrichedProduct, Product, User};

use tracing::debug;

/// Join products with their categories and owners.
///
/// Output order follows `products`. The first matching category and user are
/// used. A product pointing at a missing category, or a category pointing at a
/// missing owner, fails the whole join.
pub fn enrich(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> CatalogResult<Vec<EnrichedProduct>> {
    let enriched = products
        .iter()
        .map(|product| enrich_one(product, categories, users))
        .collect::<CatalogResult<Vec<_>>>()?;

    debug!(rows = enriched.len(), "joined catalog");
    Ok(enriched)
}

fn enrich_one(
    product: &Product,
    categories: &[Category],
    users: &[User],
) -> CatalogResult<EnrichedProduct> {
    let category = categories
        .iter()
        .find(|category| category.id == product.category_id)
        .ok_or(CatalogError::UnknownCategory {
            product_id: product.id,
            category_id: product.category_id,
        })?;

    let user = users
        .iter()
        .find(|user| user.id == category.owner_id)
        .ok_or(CatalogError::UnknownOwner {
            category_id: category.id,
            owner_id: category.owner_id,
        })?;

    Ok(EnrichedProduct::new(product, category, user))
}
