pub mod admin;
pub mod book;

pub use admin::{AdminInput, AdminRecord};
pub use book::{Book, BookInput, BookUpdate};
