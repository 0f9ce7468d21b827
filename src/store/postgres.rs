use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{AdminStore, BookStore};
use crate::error::AppError;
use crate::models::{AdminInput, AdminRecord, Book, BookInput, BookUpdate};

/// PostgreSQL-backed store. The schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// `MAX(id) + 1` past the INTEGER range fails with numeric_value_out_of_range.
fn no_free_id(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("22003") => {
            AppError::BadRequest("No free id".into())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl AdminStore for PgStore {
    async fn create_admin(&self, input: AdminInput) -> Result<AdminRecord, AppError> {
        let admin = sqlx::query_as::<_, AdminRecord>(
            "INSERT INTO admins (id, email, password)
             VALUES (COALESCE($1, (SELECT COALESCE(MAX(id), 0) + 1 FROM admins)), $2, $3)
             RETURNING id, email, password, created_at",
        )
        .bind(input.id)
        .bind(&input.email)
        .bind(&input.password)
        .fetch_one(&self.pool)
        .await
        .map_err(no_free_id)?;

        Ok(admin)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AppError> {
        let admin = sqlx::query_as::<_, AdminRecord>(
            "SELECT id, email, password, created_at FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn list_admins(&self) -> Result<Vec<AdminRecord>, AppError> {
        let admins = sqlx::query_as::<_, AdminRecord>(
            "SELECT id, email, password, created_at FROM admins ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(admins)
    }
}

#[async_trait]
impl BookStore for PgStore {
    async fn create_book(&self, input: BookInput) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (id, title, author, url)
             VALUES (COALESCE($1, (SELECT COALESCE(MAX(id), 0) + 1 FROM books)), $2, $3, $4)
             RETURNING id, title, author, url, created_at",
        )
        .bind(input.id)
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.url)
        .fetch_one(&self.pool)
        .await
        .map_err(no_free_id)?;

        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, url, created_at FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get_book(&self, id: i32) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, url, created_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn update_book(&self, id: i32, changes: BookUpdate) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(
            "UPDATE books
             SET title = COALESCE($1, title), author = COALESCE($2, author), url = COALESCE($3, url)
             WHERE id = $4
             RETURNING id, title, author, url, created_at",
        )
        .bind(&changes.title)
        .bind(&changes.author)
        .bind(&changes.url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
