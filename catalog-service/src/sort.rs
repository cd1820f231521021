// Column Sorting
// Optional ordering of the visible rows by one table column

use crate::models::EnrichedProduct;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Product,
        SortColumn::Category,
        SortColumn::User,
    ];

    /// Column heading as shown in the table
    pub fn title(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }

    fn compare(&self, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Product => compare_text(&a.name, &b.name),
            SortColumn::Category => compare_text(&a.category.title, &b.category.title),
            SortColumn::User => compare_text(&a.user.name, &b.user.name),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortColumn::Id),
            "product" | "name" => Ok(SortColumn::Product),
            "category" => Ok(SortColumn::Category),
            "user" | "owner" => Ok(SortColumn::User),
            other => Err(format!(
                "unknown sort column '{}', expected one of: id, product, category, user",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn ascending(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    /// Stable sort of `rows`; ties keep their filtered order
    pub fn apply(&self, rows: &mut [&EnrichedProduct]) {
        rows.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Next state when cycling sort columns: none -> ID -> Product -> Category -> User -> none
pub fn next_sort(current: Option<Sort>) -> Option<Sort> {
    let direction = current.map(|s| s.direction).unwrap_or_default();
    match current.map(|s| s.column) {
        None => Some(Sort::new(SortColumn::Id, direction)),
        Some(column) => {
            let index = SortColumn::ALL.iter().position(|c| *c == column)?;
            SortColumn::ALL
                .get(index + 1)
                .map(|next| Sort::new(*next, direction))
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product, Sex, User};

    fn row(id: u32, name: &str, category: &str, user: &str) -> EnrichedProduct {
        EnrichedProduct::new(
            &Product::new(id, name, id),
            &Category::new(id, category, "*", id),
            &User::new(id, user, Sex::Female),
        )
    }

    fn rows() -> Vec<EnrichedProduct> {
        vec![
            row(3, "banana", "Fruits", "Anna"),
            row(1, "Milk", "Drinks", "Roma"),
            row(2, "apple", "Fruits", "Anna"),
        ]
    }

    #[test]
    fn test_sort_by_id() {
        let data = rows();
        let mut visible: Vec<_> = data.iter().collect();
        Sort::ascending(SortColumn::Id).apply(&mut visible);
        let ids: Vec<_> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_product_ignores_case() {
        let data = rows();
        let mut visible: Vec<_> = data.iter().collect();
        Sort::new(SortColumn::Product, SortDirection::Descending).apply(&mut visible);
        let names: Vec<_> = visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "banana", "apple"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = rows();
        let mut visible: Vec<_> = data.iter().collect();
        Sort::ascending(SortColumn::Category).apply(&mut visible);
        let ids: Vec<_> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_keeps_row_set() {
        let data = rows();
        let mut visible: Vec<_> = data.iter().collect();
        Sort::ascending(SortColumn::User).apply(&mut visible);
        assert_eq!(visible.len(), data.len());
    }

    #[test]
    fn test_next_sort_cycles_through_columns() {
        let mut sort = None;
        let mut seen = Vec::new();
        for _ in 0..5 {
            sort = next_sort(sort);
            seen.push(sort.map(|s| s.column));
        }
        assert_eq!(
            seen,
            vec![
                Some(SortColumn::Id),
                Some(SortColumn::Product),
                Some(SortColumn::Category),
                Some(SortColumn::User),
                None,
            ]
        );
    }

    #[test]
    fn test_next_sort_keeps_direction() {
        let sort = Some(Sort::new(SortColumn::Id, SortDirection::Descending));
        assert_eq!(
            next_sort(sort),
            Some(Sort::new(SortColumn::Product, SortDirection::Descending))
        );
    }

    #[test]
    fn test_parse_sort_column() {
        assert_eq!("ID".parse::<SortColumn>(), Ok(SortColumn::Id));
        assert_eq!("owner".parse::<SortColumn>(), Ok(SortColumn::User));
        assert!("price".parse::<SortColumn>().is_err());
    }
}
