// Catalog Data Source
// Loads the user, category and product collections and checks their references

use crate::error::{CatalogError, CatalogResult};
use crate::join::enrich;
use crate::models::{Category, CategoryId, EnrichedProduct, Product, User, UserId};

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const BUILTIN_USERS: &str = include_str!("../data/users.json");
const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.json");
const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// The three immutable collections the explorer works on.
///
/// A `Catalog` obtained from one of the loading constructors has been
/// validated: ids are unique per collection and every reference resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build and validate a catalog from in-memory collections
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> CatalogResult<Self> {
        let catalog = Self {
            users,
            categories,
            products,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The sample catalog bundled with the crate
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_USERS, BUILTIN_CATEGORIES, BUILTIN_PRODUCTS)
    }

    /// Parse the three collections from JSON arrays
    pub fn from_json(users: &str, categories: &str, products: &str) -> CatalogResult<Self> {
        let catalog = Self::new(
            parse_collection(USERS_FILE, users)?,
            parse_collection(CATEGORIES_FILE, categories)?,
            parse_collection(PRODUCTS_FILE, products)?,
        )?;
        debug!(
            users = catalog.users.len(),
            categories = catalog.categories.len(),
            products = catalog.products.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading catalog from directory");

        let users = read_file(&dir.join(USERS_FILE))?;
        let categories = read_file(&dir.join(CATEGORIES_FILE))?;
        let products = read_file(&dir.join(PRODUCTS_FILE))?;
        Self::from_json(&users, &categories, &products)
    }

    /// Load from `dir` when given, otherwise the bundled sample
    pub fn load(dir: Option<&Path>) -> CatalogResult<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check id uniqueness and that every product and category reference resolves
    pub fn validate(&self) -> CatalogResult<()> {
        check_unique("users", self.users.iter().map(|u| u.id))?;
        check_unique("categories", self.categories.iter().map(|c| c.id))?;
        check_unique("products", self.products.iter().map(|p| p.id))?;

        for category in &self.categories {
            if self.user(category.owner_id).is_none() {
                warn!(
                    category = category.id,
                    owner = category.owner_id,
                    "category owner not found"
                );
                return Err(CatalogError::UnknownOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                });
            }
        }

        for product in &self.products {
            if self.category(product.category_id).is_none() {
                warn!(
                    product = product.id,
                    category = product.category_id,
                    "product category not found"
                );
                return Err(CatalogError::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Join the collections into table rows
    pub fn enrich(&self) -> CatalogResult<Vec<EnrichedProduct>> {
        enrich(&self.products, &self.categories, &self.users)
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// Resolve a user from a numeric id or a case-insensitive name
    pub fn resolve_user(&self, selector: &str) -> CatalogResult<&User> {
        let selector = selector.trim();
        let found = match selector.parse::<UserId>() {
            Ok(id) => self.user(id),
            Err(_) => self
                .users
                .iter()
                .find(|u| u.name.eq_ignore_ascii_case(selector)),
        };
        found.ok_or_else(|| CatalogError::UnknownUser(selector.to_string()))
    }

    /// Resolve a category from a numeric id or a case-insensitive title
    pub fn resolve_category(&self, selector: &str) -> CatalogResult<&Category> {
        let selector = selector.trim();
        let found = match selector.parse::<CategoryId>() {
            Ok(id) => self.category(id),
            Err(_) => self
                .categories
                .iter()
                .find(|c| c.title.eq_ignore_ascii_case(selector)),
        };
        found.ok_or_else(|| CatalogError::UnknownCategorySelector(selector.to_string()))
    }
}

fn parse_collection<T: DeserializeOwned>(source_name: &str, json: &str) -> CatalogResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| CatalogError::parse(source_name, &e))
}

fn read_file(path: &Path) -> CatalogResult<String> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, &e))
}

fn check_unique(collection: &'static str, ids: impl Iterator<Item = u32>) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    Ok(())
}
