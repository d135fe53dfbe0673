//! Repository layer holding the in-memory collections

pub mod bookings;
pub mod books;
pub mod memory;
pub mod users;

pub use memory::MemoryRepository;

/// Main repository struct holding one collection per entity
#[derive(Clone, Default)]
pub struct Repository {
    pub users: users::UsersRepository,
    pub books: books::BooksRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a repository, optionally loaded with the demo records
    pub fn new(seed: bool) -> Self {
        if !seed {
            return Self::default();
        }
        Self {
            users: MemoryRepository::new(users::seed()),
            books: MemoryRepository::new(books::seed()),
            bookings: MemoryRepository::new(bookings::seed()),
        }
    }
}
