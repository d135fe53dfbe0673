//! Data models for Librent
//!
//! Every entity carries its own identifier and a set of field rules checked
//! with `validator` before it reaches a repository.

pub mod book;
pub mod booking;
pub mod user;

use chrono::NaiveDate;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use book::Book;
pub use booking::Booking;
pub use user::User;

/// A record stored in an in-memory repository
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in messages (`User`, `Book`, `Booking`)
    const ENTITY: &'static str;

    /// Labels of validated fields, in reporting order
    const CHECKED_FIELDS: &'static [&'static str];

    /// Identifier the record is looked up by
    fn id(&self) -> &str;
}

/// Run the field rules of a record.
///
/// The first failing field (in `CHECKED_FIELDS` order) is reported as
/// `<Label> of <Entity> <id> is malformed`.
pub fn validate_record<T: Record + Validate>(record: &T) -> AppResult<()> {
    let errors = match record.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let position = |label: &str| {
        T::CHECKED_FIELDS
            .iter()
            .position(|f| *f == label)
            .unwrap_or(usize::MAX)
    };

    let label = errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .min_by_key(|label| position(label.as_str()))
        .unwrap_or_else(|| "Record".to_string());

    Err(AppError::Validation(format!(
        "{} of {} {} is malformed",
        label,
        T::ENTITY,
        record.id()
    )))
}

/// Accept calendar dates written as `YYYY-MM-DD`
pub(crate) fn validate_calendar_date(value: &str) -> Result<(), ValidationError> {
    if value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("calendar_date"))
    }
}
