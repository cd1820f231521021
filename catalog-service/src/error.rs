// Catalog error types

use crate::models::{CategoryId, ProductId, UserId};

use std::path::PathBuf;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A data file could not be read
    #[error("failed to read '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// A data file is not valid JSON for its collection
    #[error("invalid {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// A product references a category that does not exist
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    /// A category references an owner that does not exist
    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },

    /// The same id appears twice within one collection
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },

    /// No user matches a command-line selector
    #[error("no user matches '{0}'")]
    UnknownUser(String),

    /// No category matches a command-line selector
    #[error("no category matches '{0}'")]
    UnknownCategorySelector(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(source_name: impl Into<String>, err: &serde_json::Error) -> Self {
        CatalogError::Parse {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}
