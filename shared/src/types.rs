//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request (form-encoded: username, password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Access token issued on successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Product create/update payload
///
/// The same payload drives both create and full-replacement update.
/// Constraints: name/category 1-50 chars, price strictly positive,
/// amount non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    pub category: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: f64,
    #[validate(range(min = 0, message = "amount must not be negative"))]
    pub amount: i32,
}

/// Product representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub amount: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ProductPayload {
        ProductPayload {
            name: "Produto Teste".to_string(),
            category: "Categoria Teste".to_string(),
            price: 99.99,
            amount: 10,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut payload = valid_payload();
        payload.name = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn overlong_name_rejected() {
        let mut payload = valid_payload();
        payload.name = "x".repeat(51);
        assert!(payload.validate().is_err());

        payload.name = "x".repeat(50);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn empty_category_rejected() {
        let mut payload = valid_payload();
        payload.category = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_positive_price_rejected() {
        let mut payload = valid_payload();
        payload.price = 0.0;
        assert!(payload.validate().is_err());

        payload.price = -10.0;
        assert!(payload.validate().is_err());

        payload.price = 0.01;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn negative_amount_rejected() {
        let mut payload = valid_payload();
        payload.amount = -5;
        assert!(payload.validate().is_err());

        payload.amount = 0;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn product_response_serializes_timestamps_as_rfc3339() {
        let response = ProductResponse {
            id: Uuid::new_v4(),
            name: "Produto Teste".to_string(),
            category: "Categoria Teste".to_string(),
            price: 99.99,
            amount: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        let created_at = json["created_at"].as_str().unwrap();
        assert!(created_at.parse::<DateTime<Utc>>().is_ok());
    }
}
