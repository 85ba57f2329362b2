//! Compiled-in dataset the catalog starts from on every process start.

use super::{AuthorRecord, BookRecord};

fn book(id: &str, name: &str, genre: &str, author: &str) -> BookRecord {
    BookRecord {
        id: id.to_string(),
        name: name.to_string(),
        genre: genre.to_string(),
        author: Some(author.to_string()),
    }
}

fn author(id: &str, name: &str, age: i32) -> AuthorRecord {
    AuthorRecord {
        id: id.to_string(),
        name: name.to_string(),
        age,
    }
}

pub fn books() -> Vec<BookRecord> {
    vec![
        book("1", "Name of the Wind", "Fantasy", "1"),
        book("2", "The Final Empire", "Fantasy", "2"),
        book("3", "The Long Earth", "Sci-Fi", "3"),
        book("4", "The Hero of Ages", "Fantasy", "2"),
        book("5", "The Colour of Magic", "Fantasy", "3"),
        book("6", "The Light Fantastic", "Fantasy", "3"),
    ]
}

pub fn authors() -> Vec<AuthorRecord> {
    vec![
        author("1", "Patrick Rothfuss", 44),
        author("2", "Brandon Sanderson", 42),
        author("3", "Terry Pratchett", 66),
    ]
}
