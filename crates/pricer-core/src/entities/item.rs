use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry.
///
/// `id`, `title`, `price` and `category` are interpreted by the client and the
/// batch orchestrator. Every other field the remote sends (description, brand,
/// stock, rating, thumbnail, ...) lands in `extra` and is serialized back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            extra: Map::new(),
        }
    }

    /// Case-insensitive category comparison.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.trim().to_lowercase() == category.trim().to_lowercase()
    }
}

/// Envelope returned by the category listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsPage {
    #[serde(default, rename = "products")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "products": [
            {
                "id": 121,
                "title": "iPhone 13 Pro",
                "description": "Flagship phone",
                "price": 1099.99,
                "discountPercentage": 9.37,
                "rating": 4.12,
                "stock": 3,
                "brand": "Apple",
                "category": "smartphones",
                "thumbnail": "https://cdn.example/121.png"
            },
            {
                "id": 122,
                "title": "Pixel",
                "price": 599,
                "category": "Smartphones"
            }
        ],
        "total": 16,
        "skip": 0,
        "limit": 30
    }"#;

    #[test]
    fn parses_listing_envelope() {
        let page: ItemsPage = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 16);
        assert_eq!(page.limit, 30);

        let first = &page.items[0];
        assert_eq!(first.id, 121);
        assert_eq!(first.title, "iPhone 13 Pro");
        assert!((first.price - 1099.99).abs() < f64::EPSILON);
        assert_eq!(first.extra.get("brand"), Some(&Value::from("Apple")));
        assert_eq!(first.extra.get("stock"), Some(&Value::from(3)));
    }

    #[test]
    fn passthrough_fields_survive_reserialization() {
        let page: ItemsPage = serde_json::from_str(FIXTURE).unwrap();
        let json = serde_json::to_value(&page.items[0]).unwrap();
        assert_eq!(json["discountPercentage"], Value::from(9.37));
        assert_eq!(json["thumbnail"], Value::from("https://cdn.example/121.png"));
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn category_match_ignores_case() {
        let page: ItemsPage = serde_json::from_str(FIXTURE).unwrap();
        assert!(page.items[1].in_category("smartphones"));
        assert!(!page.items[1].in_category("laptops"));
    }

    #[test]
    fn category_match_folds_non_ascii_case() {
        let item = Item::new(1, "Smartphone", 10.0, "ÉLECTRONIQUE");
        assert!(item.in_category("électronique"));
        assert!(item.in_category("  Électronique "));
        assert!(!item.in_category("electronique"));
    }

    #[test]
    fn missing_envelope_counts_default_to_zero() {
        let page: ItemsPage = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert_eq!(page, ItemsPage::default());
    }
}
