// Filter Predicate
// Owner, category and name filters combined with AND

use crate::models::EnrichedProduct;
use crate::query::Query;

use tracing::trace;

/// Rows of `products` that satisfy every active criterion of `query`.
///
/// Input order is preserved. An inactive criterion (no owner, empty name,
/// empty category set) keeps every row.
pub fn filter<'a>(query: &Query, products: &'a [EnrichedProduct]) -> Vec<&'a EnrichedProduct> {
    let needle = query.product_name.to_lowercase();
    let visible: Vec<_> = products
        .iter()
        .filter(|product| query.matches_normalized(product, &needle))
        .collect();

    trace!(
        total = products.len(),
        visible = visible.len(),
        "filtered products"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::enrich;
    use crate::models::{Category, Product, Sex, User};

    fn catalog() -> Vec<EnrichedProduct> {
        let users = vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
            User::new(3, "Max", Sex::Male),
        ];
        let categories = vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(3, "Fruits", "🍏", 2),
            Category::new(4, "Electronics", "💻", 1),
            Category::new(5, "Clothes", "👚", 3),
        ];
        let products = vec![
            Product::new(1, "Milk", 2),
            Product::new(2, "Bread", 1),
            Product::new(3, "Eggs", 1),
            Product::new(4, "Jacket", 5),
            Product::new(5, "Sugar", 1),
            Product::new(6, "Banana", 3),
            Product::new(7, "Beer", 2),
            Product::new(8, "Pillow", 5),
            Product::new(9, "Coffee", 2),
            Product::new(10, "Laptop", 4),
        ];
        enrich(&products, &categories, &users).unwrap()
    }

    fn ids(rows: &[&EnrichedProduct]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let products = catalog();
        let rows = filter(&Query::new(), &products);
        assert_eq!(ids(&rows), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_reset_then_filter_returns_full_collection() {
        let products = catalog();
        let query = Query::new()
            .select_owner(Some(3))
            .set_product_name("x")
            .toggle_category(1)
            .reset_all();

        let rows = filter(&query, &products);
        let expected: Vec<&EnrichedProduct> = products.iter().collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_owner_filter() {
        let products = catalog();
        let rows = filter(&Query::new().select_owner(Some(2)), &products);
        assert_eq!(ids(&rows), vec![2, 3, 5, 6]);
        assert!(rows.iter().all(|r| r.user.id == 2));
    }

    #[test]
    fn test_owner_without_categories_matches_nothing() {
        let products = catalog();
        let rows = filter(&Query::new().select_owner(Some(99)), &products);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_category_filter_uses_set_membership() {
        let products = catalog();
        let query = Query::new().toggle_category(3).toggle_category(4);
        let rows = filter(&query, &products);
        assert_eq!(ids(&rows), vec![6, 10]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let products = catalog();
        let rows = filter(&Query::new().set_product_name("PILLOW"), &products);
        assert_eq!(ids(&rows), vec![8]);
        assert_eq!(rows[0].name, "Pillow");
    }

    #[test]
    fn test_name_filter_matches_substring() {
        let products = catalog();
        let rows = filter(&Query::new().set_product_name("e"), &products);
        assert_eq!(ids(&rows), vec![2, 3, 4, 7, 9]);
    }

    #[test]
    fn test_conjunction_of_all_filters() {
        let products = catalog();
        let query = Query::new()
            .select_owner(Some(1))
            .toggle_category(2)
            .set_product_name("o");

        let rows = filter(&query, &products);
        assert_eq!(ids(&rows), vec![9]);
        for row in &rows {
            assert_eq!(row.user.id, 1);
            assert_eq!(row.category_id, 2);
            assert!(row.name.to_lowercase().contains('o'));
        }
    }

    #[test]
    fn test_conjunction_with_no_match_is_empty() {
        let products = catalog();
        let query = Query::new()
            .select_owner(Some(2))
            .toggle_category(2)
            .set_product_name("milk");

        assert!(filter(&query, &products).is_empty());
    }

    #[test]
    fn test_filter_is_subset_of_input() {
        let products = catalog();
        let queries = [
            Query::new(),
            Query::new().select_owner(Some(1)),
            Query::new().toggle_category(5).set_product_name("s"),
            Query::new().set_product_name("zzz"),
            Query::new().select_owner(Some(3)).toggle_category(1),
        ];

        for query in &queries {
            let rows = filter(query, &products);
            assert!(rows.len() <= products.len());
            for row in rows {
                assert!(products.iter().any(|p| std::ptr::eq(p, row)));
            }
        }
    }

    #[test]
    fn test_filter_order_independent_of_transition_order() {
        let products = catalog();
        let a = Query::new()
            .select_owner(Some(1))
            .toggle_category(2)
            .set_product_name("e");
        let b = Query::new()
            .set_product_name("e")
            .toggle_category(2)
            .select_owner(Some(1));

        assert_eq!(filter(&a, &products), filter(&b, &products));
    }
}
