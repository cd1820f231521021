// Explorer Session
// Joined catalog plus the current query and sort

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::filter::filter;
use crate::models::{Category, EnrichedProduct, User};
use crate::query::{Query, QueryAction};
use crate::sort::Sort;

use tracing::debug;

/// Message shown in place of the table when no row matches
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// State behind one explorer view.
///
/// The catalog is joined once when the session starts; every action replaces
/// the query and the visible rows are derived again on request.
#[derive(Debug, Clone)]
pub struct Explorer {
    catalog: Catalog,
    rows: Vec<EnrichedProduct>,
    query: Query,
    sort: Option<Sort>,
}

impl Explorer {
    pub fn new(catalog: Catalog) -> CatalogResult<Self> {
        let rows = catalog.enrich()?;
        Ok(Self {
            catalog,
            rows,
            query: Query::new(),
            sort: None,
        })
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the query with the result of `action`
    pub fn apply(&mut self, action: QueryAction) {
        debug!(?action, "query action");
        let query = std::mem::take(&mut self.query);
        self.query = query.apply(action);
    }

    pub fn set_sort(&mut self, sort: Option<Sort>) {
        self.sort = sort;
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn users(&self) -> &[User] {
        self.catalog.users()
    }

    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every joined row, in catalog order
    pub fn rows(&self) -> &[EnrichedProduct] {
        &self.rows
    }

    /// Rows matching the current query, sorted when a sort is set
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        let mut visible = filter(&self.query, &self.rows);
        if let Some(sort) = &self.sort {
            sort.apply(&mut visible);
        }
        visible
    }
}
