// Catalog Data Models
// Users, categories, products and the joined product rows shown by the explorer

use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserId = u32;
pub type CategoryId = u32;
pub type ProductId = u32;

/// Sex of a user. Serialized as `"m"` / `"f"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

/// A product category, owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    /// References `User::id`
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: CategoryId,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// References `Category::id`
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

/// A product together with its resolved category and the category's owner.
///
/// Serializes flat: the product fields followed by `category` and `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    pub fn new(product: &Product, category: &Category, user: &User) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            category: category.clone(),
            user: user.clone(),
        }
    }

    /// Table label for the category column, e.g. `🍏 - Fruits`
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }

    pub fn owner_id(&self) -> UserId {
        self.user.id
    }
}
