//! User model

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{validate_calendar_date, Record};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$").expect("valid email regex")
});

/// Library member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Externally supplied identifier
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    /// Birth date (`YYYY-MM-DD`)
    #[validate(custom(function = "validate_calendar_date", message = "Birth Date"))]
    pub birth_date: String,
    pub address: String,
    /// Ten digit phone number
    #[validate(custom(function = "validate_phone", message = "Phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_email", message = "Email"))]
    pub email: String,
}

impl Record for User {
    const ENTITY: &'static str = "User";
    const CHECKED_FIELDS: &'static [&'static str] = &["Birth Date", "Phone", "Email"];

    fn id(&self) -> &str {
        &self.id
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}
