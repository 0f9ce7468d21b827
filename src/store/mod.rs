//! Record storage for admins and books.
//!
//! Handlers only see the `AdminStore` and `BookStore` traits, registered as
//! `web::Data<dyn AdminStore>` / `web::Data<dyn BookStore>`. Two backends exist:
//! `MemoryStore` for tests and database-less runs, and `PgStore` backed by sqlx.
//! Each operation is atomic on its own; nothing spans several operations.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{AdminInput, AdminRecord, Book, BookInput, BookUpdate};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Credential store: admin records keyed by id, looked up by email at login.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Inserts a new admin. Fails with `BadRequest` when the id or email is taken.
    async fn create_admin(&self, input: AdminInput) -> Result<AdminRecord, AppError>;

    /// Returns the admin registered under `email`, if any.
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AppError>;

    /// Lists all admins ordered by id.
    async fn list_admins(&self) -> Result<Vec<AdminRecord>, AppError>;
}

/// Catalog store: books keyed by id.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Inserts a new book. Fails with `BadRequest` when the id is taken.
    async fn create_book(&self, input: BookInput) -> Result<Book, AppError>;

    /// Lists all books ordered by id.
    async fn list_books(&self) -> Result<Vec<Book>, AppError>;

    async fn get_book(&self, id: i32) -> Result<Option<Book>, AppError>;

    /// Applies a partial update. Returns `None` when no book has this id.
    async fn update_book(&self, id: i32, changes: BookUpdate) -> Result<Option<Book>, AppError>;

    /// Returns `false` when no book had this id.
    async fn delete_book(&self, id: i32) -> Result<bool, AppError>;
}
