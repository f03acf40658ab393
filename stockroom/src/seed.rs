//! Default category catalog, seeded when no category list is persisted

use shared::models::Category;

const DEFAULT_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("1", "Women's Clothing", "👗", "womens-clothing"),
    ("2", "Men's Clothing", "👔", "mens-clothing"),
    ("3", "Electronics", "📱", "electronics"),
    ("4", "Home & Kitchen", "🏠", "home-kitchen"),
    ("5", "Beauty & Personal Care", "💄", "beauty"),
    ("6", "Toys & Games", "🎮", "toys"),
    ("7", "Jewelry & Accessories", "💍", "jewelry"),
    ("8", "Sports & Outdoors", "⚽", "sports"),
    ("9", "Fresh Produce", "🥬", "fresh-produce"),
    ("10", "Dairy & Eggs", "🥚", "dairy-eggs"),
    ("11", "Bakery", "🥖", "bakery"),
    ("12", "Beverages", "🥤", "beverages"),
    ("13", "Frozen Foods", "❄️", "frozen-foods"),
];

/// Route prefix shared by every category
pub const CATEGORY_ROUTE_PREFIX: &str = "/categories/";

pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, icon, slug)| {
            Category::new(*id, *name, *icon, format!("{CATEGORY_ROUTE_PREFIX}{slug}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slugs_are_unique() {
        let categories = default_categories();
        assert_eq!(categories.len(), 13);

        let mut slugs: Vec<_> = categories.iter().map(|c| c.slug().to_string()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), 13);

        assert_eq!(categories[2].slug(), "electronics");
        assert!(categories.iter().all(|c| c.total_items == 0 && c.low_stock_items == 0));
    }
}
