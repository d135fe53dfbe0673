//! Book model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::Record;

/// Catalog book, identified by its ISBN-13
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[validate(length(equal = 13, message = "ISBN"))]
    pub isbn13: String,
    pub title: String,
    pub authors: String,
    pub editor: String,
    /// Two letter language code (`FR`, `ES`, ...)
    #[validate(custom(function = "validate_lang_code", message = "Lang Code"))]
    pub lang_code: String,
    /// Non-negative JSON number; other JSON types are kept so they can be
    /// reported as a malformed price
    #[validate(custom(function = "validate_price", message = "Price"))]
    #[schema(value_type = f64)]
    pub price: Value,
}

impl Record for Book {
    const ENTITY: &'static str = "Book";
    const CHECKED_FIELDS: &'static [&'static str] = &["ISBN", "Lang Code", "Price"];

    fn id(&self) -> &str {
        &self.isbn13
    }
}

fn validate_lang_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("lang_code"))
    }
}

fn validate_price(price: &Value) -> Result<(), ValidationError> {
    match price.as_f64() {
        Some(p) if p >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("price")),
    }
}
