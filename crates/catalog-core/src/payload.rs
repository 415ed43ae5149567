//! # Product Documents
//!
//! Conversion between [`Product`] and the JSON documents exchanged with
//! the web layer.
//!
//! ## Document Shape
//! ```text
//! {
//!   "id": 17,                  ← ignored on input
//!   "name": "Fedora",          ← string, required
//!   "description": "A red hat",← string, required
//!   "price": "12.50",          ← number or numeric string, required
//!   "available": true,         ← JSON boolean only, required
//!   "category": "CLOTHS"       ← known tag, required
//! }
//! ```
//!
//! Every deserialization failure maps to a specific [`DataValidationError`].

use serde_json::{json, Map, Value};

use crate::error::{DataValidationError, ValidationResult};
use crate::price::IntoPrice;
use crate::types::{Category, Product};

impl Product {
    /// Serializes the product into a JSON document.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Category, Product};
    ///
    /// let p = Product::new("Fedora", "A red hat", 12.5, true, Category::Cloths).unwrap();
    /// let doc = p.serialize();
    /// assert_eq!(doc["price"], "12.50");
    /// assert_eq!(doc["category"], "CLOTHS");
    /// ```
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Overwrites this product's fields from a JSON document.
    ///
    /// The `id` is left untouched: identity belongs to storage.
    ///
    /// ## Errors
    /// - `InvalidBody` when the document is not an object
    /// - `Required` when a key is missing
    /// - `InvalidType` when a value has the wrong JSON type
    /// - `InvalidPrice` / `UnknownCategory` for unparsable values
    ///
    /// On error the product is left unchanged.
    pub fn deserialize(&mut self, data: &Value) -> ValidationResult<&mut Self> {
        let object = data
            .as_object()
            .ok_or_else(|| DataValidationError::InvalidBody(describe(data).to_string()))?;

        let name = string_field(object, "name")?;
        let description = string_field(object, "description")?;
        let price = field(object, "price")?.into_price()?;

        let available = match field(object, "available")? {
            Value::Bool(b) => *b,
            _ => return Err(DataValidationError::invalid_type("available", "boolean")),
        };

        let category = match field(object, "category")? {
            Value::String(tag) => tag.parse::<Category>()?,
            _ => return Err(DataValidationError::invalid_type("category", "string")),
        };

        self.name = name;
        self.description = description;
        self.price = price;
        self.available = available;
        self.category = category;

        Ok(self)
    }

    /// Builds a new, unsaved product from a JSON document.
    pub fn from_json(data: &Value) -> ValidationResult<Self> {
        let mut product = Product::default();
        product.deserialize(data)?;
        Ok(product)
    }
}

fn field<'a>(object: &'a Map<String, Value>, key: &str) -> ValidationResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| DataValidationError::required(key))
}

fn string_field(object: &Map<String, Value>, key: &str) -> ValidationResult<String> {
    match field(object, key)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(DataValidationError::invalid_type(key, "string")),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Price;

    fn document() -> Value {
        json!({
            "name": "Wrench",
            "description": "Adjustable",
            "price": "15.75",
            "available": false,
            "category": "TOOLS",
        })
    }

    #[test]
    fn test_serialize_a_product() {
        let mut product =
            Product::new("Fedora", "A red hat", 12.50, true, Category::Cloths).unwrap();
        product.id = Some(3);

        let doc = product.serialize();
        assert_eq!(doc["id"], 3);
        assert_eq!(doc["name"], "Fedora");
        assert_eq!(doc["description"], "A red hat");
        assert_eq!(doc["price"], "12.50");
        assert_eq!(doc["available"], true);
        assert_eq!(doc["category"], "CLOTHS");
    }

    #[test]
    fn test_deserialize_a_product() {
        let product = Product::from_json(&document()).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Wrench");
        assert_eq!(product.description, "Adjustable");
        assert_eq!(product.price, Price::from_cents(1575));
        assert!(!product.available);
        assert_eq!(product.category, Category::Tools);
    }

    #[test]
    fn test_deserialize_keeps_id() {
        let mut product = Product::default();
        product.id = Some(9);
        let mut doc = document();
        doc["id"] = json!(100);

        product.deserialize(&doc).unwrap();
        assert_eq!(product.id, Some(9));
    }

    #[test]
    fn test_deserialize_numeric_price() {
        let mut doc = document();
        doc["price"] = json!(99.9);
        assert_eq!(Product::from_json(&doc).unwrap().price.cents(), 9990);
    }

    #[test]
    fn test_deserialize_missing_field() {
        let mut doc = document();
        doc.as_object_mut().unwrap().remove("description");
        assert_eq!(
            Product::from_json(&doc),
            Err(DataValidationError::required("description"))
        );
    }

    #[test]
    fn test_deserialize_bad_available_type() {
        let mut doc = document();
        doc["available"] = json!("yes");
        assert_eq!(
            Product::from_json(&doc),
            Err(DataValidationError::invalid_type("available", "boolean"))
        );
    }

    #[test]
    fn test_deserialize_bad_category() {
        let mut doc = document();
        doc["category"] = json!("JEWELRY");
        assert_eq!(
            Product::from_json(&doc),
            Err(DataValidationError::UnknownCategory("JEWELRY".to_string()))
        );
    }

    #[test]
    fn test_deserialize_bad_price() {
        let mut doc = document();
        doc["price"] = json!("cheap");
        assert!(matches!(
            Product::from_json(&doc),
            Err(DataValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_deserialize_not_an_object() {
        assert!(matches!(
            Product::from_json(&json!([1, 2, 3])),
            Err(DataValidationError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_failed_deserialize_leaves_product_unchanged() {
        let mut product =
            Product::new("Fedora", "A red hat", 12.50, true, Category::Cloths).unwrap();
        let before = product.clone();
        let mut doc = document();
        doc["category"] = json!(5);

        assert!(product.deserialize(&doc).is_err());
        assert_eq!(product, before);
    }

    #[test]
    fn test_serialized_document_deserializes_to_same_fields() {
        let product = Product::new("Towels", "Set of 4", "30", true, Category::Housewares).unwrap();
        assert_eq!(Product::from_json(&product.serialize()).unwrap(), product);
    }
}
