// Catalog Service Library
// Joins users, categories and products and filters the result for display

pub mod catalog;
pub mod error;
pub mod filter;
pub mod join;
pub mod models;
pub mod query;
pub mod session;
pub mod sort;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};

pub use catalog::Catalog;
pub use filter::filter;
pub use join::enrich;
pub use models::{Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId};
pub use query::{Query, QueryAction};
pub use session::{Explorer, NO_MATCHES_MESSAGE};
pub use sort::{next_sort, Sort, SortColumn, SortDirection};
