//! Product catalog RecordService trait implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, ServiceError};
use crate::http_client::{HttpUtils, is_success};
use crate::services::common::extract_id;
use crate::traits::RecordService;
use crate::types::ProductRecord;

use super::{ProductCatalogService, SERVICE_NAME};

/// Whether a body is the catalog's way of saying "nothing here": it answers
/// unknown ids with 200 and an empty (or literal `null`) body.
fn is_empty_body(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed == "null"
}

#[async_trait]
impl RecordService for ProductCatalogService {
    type Record = ProductRecord;

    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    async fn list_records(&self) -> Result<Vec<ProductRecord>> {
        let (status, body) = self.get("/products").await?;
        if !is_success(status) {
            return Err(ServiceError::UnexpectedStatus {
                service: SERVICE_NAME.to_string(),
                status,
                raw_message: Some(body),
            });
        }
        // Listing is a bare JSON array, no envelope.
        HttpUtils::parse_json(&body, SERVICE_NAME)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<ProductRecord> {
        let (status, body) = self.get(&format!("/products/{id}")).await?;
        if !is_success(status) || is_empty_body(&body) {
            return Err(ServiceError::RecordNotFound {
                service: SERVICE_NAME.to_string(),
                record_id: id.to_string(),
                status,
            });
        }
        HttpUtils::parse_json(&body, SERVICE_NAME)
    }

    async fn create_record(&self, record: &ProductRecord) -> Result<Option<String>> {
        let (status, body) = self.post("/products", record).await?;
        if !is_success(status) {
            return Err(ServiceError::CreateRejected {
                service: SERVICE_NAME.to_string(),
                status,
                raw_message: Some(body),
            });
        }
        let value: Value = HttpUtils::parse_json(&body, SERVICE_NAME)?;
        Ok(extract_id(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_detection() {
        assert!(is_empty_body(""));
        assert!(is_empty_body("  \n"));
        assert!(is_empty_body("null"));
        assert!(!is_empty_body("{}"));
        assert!(!is_empty_body(r#"{"id":1}"#));
    }

    #[test]
    fn bare_array_listing_parses() {
        let json = r#"[
            {"id": 1, "title": "Backpack", "price": 109.95,
             "description": "Fits 15in laptops", "category": "men's clothing",
             "image": "https://fakestoreapi.com/img/1.jpg"},
            {"id": 2, "title": "T-Shirt", "price": 22.3,
             "description": "Slim fit", "category": "men's clothing",
             "image": "https://fakestoreapi.com/img/2.jpg"}
        ]"#;
        let products: Vec<ProductRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Backpack");
        assert!((products[1].price - 22.3).abs() < f64::EPSILON);
    }
}
