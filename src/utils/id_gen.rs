//! ID generation utilities

use rand::Rng;

/// Characters used for ID generation
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random string ID of specified length
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARS.len());
            ID_CHARS[idx] as char
        })
        .collect()
}

/// Generate a book ID (12 characters)
pub fn generate_book_id() -> String {
    generate_id(crate::BOOK_ID_LENGTH)
}

/// Generate a book ID not contained in `taken`
pub fn generate_unique_book_id<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    loop {
        let id = generate_book_id();
        if !taken.clone().into_iter().any(|t| t == id) {
            return id;
        }
    }
}

/// Generate a content file name (`<uuid>.txt`)
pub fn generate_content_file_name() -> String {
    format!("{}.{}", uuid::Uuid::new_v4().simple(), crate::TEXT_EXTENSION)
}
