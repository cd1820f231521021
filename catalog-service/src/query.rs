// Query State
// Active filter criteria and the pure transitions that replace them

use crate::models::{CategoryId, EnrichedProduct, UserId};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The current filter criteria.
///
/// A `Query` is never edited in place by callers: every transition consumes
/// the previous value and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Selected owner, `None` for all users
    pub owner: Option<UserId>,
    /// Free-text product name fragment
    pub product_name: String,
    /// Selected categories, empty for all categories
    pub category: BTreeSet<CategoryId>,
}

/// A discrete UI action that produces a new query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    SelectOwner(Option<UserId>),
    SetProductName(String),
    ClearProductName,
    ToggleCategory(CategoryId),
    ClearCategories,
    ResetAll,
}

impl Query {
    /// The initial query: no owner, empty name, no categories
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_owner(self, owner: Option<UserId>) -> Self {
        Self { owner, ..self }
    }

    pub fn set_product_name(self, product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            ..self
        }
    }

    pub fn clear_product_name(self) -> Self {
        self.set_product_name(String::new())
    }

    pub fn toggle_category(self, id: CategoryId) -> Self {
        let mut category = self.category;
        if !category.remove(&id) {
            category.insert(id);
        }
        Self { category, ..self }
    }

    pub fn clear_categories(self) -> Self {
        Self {
            category: BTreeSet::new(),
            ..self
        }
    }

    pub fn reset_all(self) -> Self {
        Self::new()
    }

    pub fn apply(self, action: QueryAction) -> Self {
        match action {
            QueryAction::SelectOwner(owner) => self.select_owner(owner),
            QueryAction::SetProductName(text) => self.set_product_name(text),
            QueryAction::ClearProductName => self.clear_product_name(),
            QueryAction::ToggleCategory(id) => self.toggle_category(id),
            QueryAction::ClearCategories => self.clear_categories(),
            QueryAction::ResetAll => self.reset_all(),
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// True when the row passes the owner, category and name filters
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_normalized(product, &self.product_name.to_lowercase())
    }

    /// Same as `matches`, with the name fragment lower-cased by the caller
    pub(crate) fn matches_normalized(&self, product: &EnrichedProduct, needle: &str) -> bool {
        self.matches_owner(product)
            && self.matches_category(product)
            && self.matches_name(&product.name, needle)
    }

    fn matches_owner(&self, product: &EnrichedProduct) -> bool {
        self.owner.map_or(true, |owner| product.user.id == owner)
    }

    fn matches_category(&self, product: &EnrichedProduct) -> bool {
        self.category.is_empty() || self.category.contains(&product.category_id)
    }

    fn matches_name(&self, name: &str, needle: &str) -> bool {
        needle.is_empty() || name.to_lowercase().contains(needle)
    }

    // =========================================================================
    // View helpers
    // =========================================================================

    /// Whether the owner tab for `owner` is active (`None` is the "All" tab)
    pub fn is_owner_selected(&self, owner: Option<UserId>) -> bool {
        self.owner == owner
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.category.contains(&id)
    }

    pub fn has_categories(&self) -> bool {
        !self.category.is_empty()
    }

    pub fn has_product_name(&self) -> bool {
        !self.product_name.is_empty()
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && !self.has_product_name() && !self.has_categories()
    }
}
