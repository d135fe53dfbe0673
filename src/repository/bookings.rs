//! Bookings collection

use super::memory::MemoryRepository;
use crate::models::Booking;

pub type BookingsRepository = MemoryRepository<Booking>;

fn booking(id: &str, rent_date: &str, return_date: &str, book: &str, user: &str) -> Booking {
    Booking {
        id: id.to_string(),
        rent_date: rent_date.to_string(),
        return_date: return_date.to_string(),
        book: book.to_string(),
        user: user.to_string(),
    }
}

/// Demo rentals loaded at startup; they reference the seeded users and books
pub fn seed() -> Vec<Booking> {
    vec![
        booking("1236545796533", "2023-03-02", "2023-06-21", "9782744005084", "1281464365499"),
        booking("1234567345843", "2019-08-15", "2019-11-29", "9782746035966", "5643431345887"),
    ]
}
