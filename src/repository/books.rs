//! Books collection

use super::memory::MemoryRepository;
use serde_json::Value;

use crate::models::Book;

pub type BooksRepository = MemoryRepository<Book>;

/// Demo catalog loaded at startup
pub fn seed() -> Vec<Book> {
    vec![
        Book {
            isbn13: "9782744005084".to_string(),
            title: "UML et C++".to_string(),
            authors: "Richard C. Lee, William M. Tepfenhart".to_string(),
            editor: "CampusPress".to_string(),
            lang_code: "FR".to_string(),
            price: Value::from(29.95_f64),
        },
        Book {
            isbn13: "9782746035966".to_string(),
            title: "Cree su primer sitio web con dreamweaver 8".to_string(),
            authors: "B.A. GUERIN".to_string(),
            editor: "ENI".to_string(),
            lang_code: "ES".to_string(),
            price: Value::from(10.02_f64),
        },
    ]
}
