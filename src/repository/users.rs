//! Users collection

use super::memory::MemoryRepository;
use crate::models::User;

pub type UsersRepository = MemoryRepository<User>;

fn user(
    id: &str,
    last_name: &str,
    first_name: &str,
    birth_date: &str,
    phone: &str,
    email: &str,
) -> User {
    User {
        id: id.to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        birth_date: birth_date.to_string(),
        address: "3 Rue Henri Hure 49300 Cholet".to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

/// Demo members loaded at startup
pub fn seed() -> Vec<User> {
    vec![
        user("1281464365499", "CADIEUX", "Marius", "1985-10-27", "0666666666", "mariuscadieux@gmail.com"),
        user("5643431345887", "TALON", "Alicia", "1992-07-26", "0777777777", "talonalicia@gmail.com"),
    ]
}
