use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AdminStore, BookStore};
use crate::error::AppError;
use crate::models::{AdminInput, AdminRecord, Book, BookInput, BookUpdate};

/// In-process store. Each map sits behind its own lock; ids are kept sorted so listings
/// come back ordered by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    admins: RwLock<BTreeMap<i32, AdminRecord>>,
    books: RwLock<BTreeMap<i32, Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id<V>(records: &BTreeMap<i32, V>) -> Result<i32, AppError> {
    match records.keys().next_back() {
        None => Ok(1),
        Some(id) => id
            .checked_add(1)
            .ok_or_else(|| AppError::BadRequest("No free id".into())),
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn create_admin(&self, input: AdminInput) -> Result<AdminRecord, AppError> {
        let mut admins = self.admins.write().await;

        if admins.values().any(|admin| admin.email == input.email) {
            return Err(AppError::BadRequest("Email already registered".into()));
        }
        let id = match input.id {
            Some(id) => id,
            None => next_id(&admins)?,
        };
        if admins.contains_key(&id) {
            return Err(AppError::BadRequest(format!("Admin with ID:{} already exists", id)));
        }

        let record = AdminRecord::new(id, input);
        admins.insert(id, record.clone());
        Ok(record)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AppError> {
        let admins = self.admins.read().await;
        Ok(admins.values().find(|admin| admin.email == email).cloned())
    }

    async fn list_admins(&self) -> Result<Vec<AdminRecord>, AppError> {
        Ok(self.admins.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn create_book(&self, input: BookInput) -> Result<Book, AppError> {
        let mut books = self.books.write().await;

        let id = match input.id {
            Some(id) => id,
            None => next_id(&books)?,
        };
        if books.contains_key(&id) {
            return Err(AppError::BadRequest(format!("Book with ID:{} already exists", id)));
        }

        let book = Book::new(id, input);
        books.insert(id, book.clone());
        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get_book(&self, id: i32) -> Result<Option<Book>, AppError> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn update_book(&self, id: i32, changes: BookUpdate) -> Result<Option<Book>, AppError> {
        let mut books = self.books.write().await;
        Ok(books.get_mut(&id).map(|book| {
            book.apply(changes);
            book.clone()
        }))
    }

    async fn delete_book(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.books.write().await.remove(&id).is_some())
    }
}
