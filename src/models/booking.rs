//! Booking (rental) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validate_calendar_date, Record};

/// Rental of a book by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Rental start date (`YYYY-MM-DD`)
    #[validate(custom(function = "validate_calendar_date", message = "Rent Date"))]
    pub rent_date: String,
    /// Return date (`YYYY-MM-DD`)
    #[validate(custom(function = "validate_calendar_date", message = "Return Date"))]
    pub return_date: String,
    /// ISBN-13 of the rented book
    pub book: String,
    /// Identifier of the renting user
    pub user: String,
}

impl Record for Booking {
    const ENTITY: &'static str = "Booking";
    const CHECKED_FIELDS: &'static [&'static str] = &["Rent Date", "Return Date"];

    fn id(&self) -> &str {
        &self.id
    }
}
