//! Booking (rental) service

use crate::{
    error::{AppError, AppResult},
    models::{validate_record, Book, Booking, Record, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        Ok(self.repository.bookings.list().await)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Booking> {
        self.repository
            .bookings
            .find(id)
            .await
            .ok_or_else(|| AppError::not_found(Booking::ENTITY, id))
    }

    /// Create a booking for an existing user and book
    pub async fn create(&self, booking: Booking) -> AppResult<Booking> {
        validate_record(&booking)?;
        self.check_references(&booking).await?;
        let created = self.repository.bookings.create(booking).await;
        tracing::info!(
            booking_id = %created.id,
            user_id = %created.user,
            isbn = %created.book,
            "Booking created"
        );
        Ok(created)
    }

    /// Replace an existing booking; the booking itself must exist before the
    /// body and its references are checked
    pub async fn update(&self, id: &str, booking: Booking) -> AppResult<Booking> {
        if !self.repository.bookings.exists(id).await {
            return Err(AppError::not_found(Booking::ENTITY, id));
        }
        validate_record(&booking)?;
        self.check_references(&booking).await?;
        let updated = self
            .repository
            .bookings
            .update(id, booking)
            .await
            .ok_or_else(|| AppError::not_found(Booking::ENTITY, id))?;
        tracing::info!(booking_id = %id, "Booking updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<Booking> {
        let deleted = self
            .repository
            .bookings
            .delete(id)
            .await
            .ok_or_else(|| AppError::not_found(Booking::ENTITY, id))?;
        tracing::info!(booking_id = %id, "Booking deleted");
        Ok(deleted)
    }

    /// Reject bookings naming an unknown user or book
    async fn check_references(&self, booking: &Booking) -> AppResult<()> {
        if !self.repository.users.exists(&booking.user).await {
            tracing::debug!(user_id = %booking.user, "Booking references unknown user");
            return Err(AppError::not_found(User::ENTITY, &booking.user));
        }
        if !self.repository.books.exists(&booking.book).await {
            tracing::debug!(isbn = %booking.book, "Booking references unknown book");
            return Err(AppError::not_found(Book::ENTITY, &booking.book));
        }
        Ok(())
    }
}
