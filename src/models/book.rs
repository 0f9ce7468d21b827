use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a catalog entry as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique integer identifier.
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Optional link to an online copy or a catalog page.
    pub url: Option<String>,
    /// Date the record was created.
    pub created_at: NaiveDate,
}

/// Input structure for creating a book.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookInput {
    /// Explicit id. The store assigns the next free id when omitted.
    pub id: Option<i32>,

    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub author: String,

    #[validate(url)]
    pub url: Option<String>,
}

/// Partial update for `PUT /books/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub author: Option<String>,

    #[validate(url)]
    pub url: Option<String>,
}

impl Book {
    /// Creates a new `Book` with the given id, dated today.
    pub fn new(id: i32, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            url: input.url,
            created_at: Utc::now().date_naive(),
        }
    }

    /// Overwrites the fields present in `changes`.
    pub fn apply(&mut self, changes: BookUpdate) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(url) = changes.url {
            self.url = Some(url);
        }
    }
}
