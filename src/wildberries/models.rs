//! Data models for the Wildberries product card API.

use crate::error::{LookupError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// A product card as returned by `cards/detail`.
///
/// Missing and `null` fields fall back to zero/empty and unknown fields are
/// ignored; the API sends far more than this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Article number
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Brand name
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    /// List price in kopecks
    #[serde(rename = "priceU", deserialize_with = "null_as_default")]
    pub price_u: u64,
    /// Discounted price in kopecks
    #[serde(rename = "salePriceU", deserialize_with = "null_as_default")]
    pub sale_price_u: u64,
    /// Star rating (0.0 - 5.0)
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Number of reviews
    #[serde(deserialize_with = "null_as_default")]
    pub feedbacks: u32,
    /// Stock across all warehouses
    #[serde(rename = "totalQuantity", deserialize_with = "null_as_default")]
    pub total_quantity: u32,
}

impl Product {
    /// List price in rubles.
    pub fn price(&self) -> f64 {
        minor_to_major(self.price_u)
    }

    /// Discounted price in rubles.
    pub fn sale_price(&self) -> f64 {
        minor_to_major(self.sale_price_u)
    }
}

fn minor_to_major(minor: u64) -> f64 {
    minor as f64 / 100.0
}

/// Reads `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level response envelope: `{ "data": { "products": [...] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub data: ProductData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductData {
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

impl ProductResponse {
    /// Decodes a response body.
    pub fn decode(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Takes the first product, the only one a single-article lookup cares about.
    pub fn into_first(self) -> Option<Product> {
        self.data.products.into_iter().next()
    }
}

/// Outcome of one successful lookup: the decoded product plus the body it came from.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub product: Product,
    /// Response body after decompression, exactly as received
    pub raw_body: String,
}

impl LookupResult {
    /// Decodes a (decompressed) response body for `article`.
    ///
    /// An empty product list is reported as [`LookupError::NoData`], not as a
    /// decode failure.
    pub fn from_body(article: &str, body: &[u8]) -> Result<Self> {
        let product = ProductResponse::decode(body)?
            .into_first()
            .ok_or_else(|| LookupError::NoData(article.to_string()))?;

        Ok(Self { product, raw_body: String::from_utf8_lossy(body).into_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"data":{"products":[{"id":1,"name":"Test Widget","brand":"Acme","priceU":123456,"salePriceU":99900,"rating":4.7,"feedbacks":10,"totalQuantity":3}]}}"#;

    #[test]
    fn test_decode_product() {
        let product = ProductResponse::decode(BODY.as_bytes()).unwrap().into_first().unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Test Widget");
        assert_eq!(product.brand, "Acme");
        assert_eq!(product.price_u, 123456);
        assert_eq!(product.sale_price_u, 99900);
        assert_eq!(product.rating, 4.7);
        assert_eq!(product.feedbacks, 10);
        assert_eq!(product.total_quantity, 3);
    }

    #[test]
    fn test_prices_in_major_units() {
        let product = Product { price_u: 123456, sale_price_u: 99900, ..Default::default() };
        assert_eq!(product.price(), 1234.56);
        assert_eq!(product.sale_price(), 999.0);
    }

    #[test]
    fn test_decode_ignores_unknown_and_missing_fields() {
        let body = r#"{"state":0,"data":{"products":[{"id":7,"name":"X","colors":[],"sale":20}]}}"#;
        let product = ProductResponse::decode(body.as_bytes()).unwrap().into_first().unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.price_u, 0);
        assert_eq!(product.rating, 0.0);
    }

    #[test]
    fn test_null_fields_read_as_zero() {
        let body = r#"{"data":{"products":[{"id":9,"name":"Widget","brand":null,"rating":null,"feedbacks":null,"priceU":null}]}}"#;
        let product = ProductResponse::decode(body.as_bytes()).unwrap().into_first().unwrap();
        assert_eq!(product.id, 9);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.brand, "");
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.feedbacks, 0);
        assert_eq!(product.price_u, 0);
    }

    #[test]
    fn test_null_products_is_no_data() {
        let err = LookupResult::from_body("42", br#"{"data":{"products":null}}"#).unwrap_err();
        assert!(matches!(err, LookupError::NoData(_)));

        let err = LookupResult::from_body("42", br#"{"data":null}"#).unwrap_err();
        assert!(matches!(err, LookupError::NoData(_)));
    }

    #[test]
    fn test_integer_rating_accepted() {
        let body = r#"{"data":{"products":[{"rating":5}]}}"#;
        let product = ProductResponse::decode(body.as_bytes()).unwrap().into_first().unwrap();
        assert_eq!(product.rating, 5.0);
    }

    #[test]
    fn test_only_first_product_used() {
        let body = r#"{"data":{"products":[{"id":1},{"id":2}]}}"#;
        let result = LookupResult::from_body("1", body.as_bytes()).unwrap();
        assert_eq!(result.product.id, 1);
    }

    #[test]
    fn test_from_body_keeps_raw_body() {
        let result = LookupResult::from_body("1", BODY.as_bytes()).unwrap();
        assert_eq!(result.raw_body, BODY);
    }

    #[test]
    fn test_empty_products_is_no_data() {
        let err = LookupResult::from_body("42", br#"{"data":{"products":[]}}"#).unwrap_err();
        assert!(matches!(err, LookupError::NoData(ref a) if a == "42"));
    }

    #[test]
    fn test_missing_data_is_no_data() {
        let err = LookupResult::from_body("42", b"{}").unwrap_err();
        assert!(matches!(err, LookupError::NoData(_)));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = LookupResult::from_body("42", b"<html>blocked</html>").unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let err = LookupResult::from_body("42", br#"{"data":{"products":{"id":1}}}"#).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }
}
