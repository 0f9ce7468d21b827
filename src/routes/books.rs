use crate::{
    auth::AuthenticatedAdmin,
    error::AppError,
    models::{BookInput, BookUpdate},
    store::BookStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book with ID:{} not found", id))
}

/// Lists every book in the catalog, ordered by id.
///
/// Public: no token required.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Book` objects.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn get_books(books: web::Data<dyn BookStore>) -> Result<impl Responder, AppError> {
    let books = books.list_books().await?;
    Ok(HttpResponse::Ok().json(books))
}

/// Retrieves a specific book by its id.
///
/// Public: no token required.
///
/// ## Responses:
/// - `200 OK`: Returns the `Book` object as JSON.
/// - `404 Not Found`: No book has this id.
#[get("/{id}")]
pub async fn get_book(
    books: web::Data<dyn BookStore>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = book_id.into_inner();
    match books.get_book(id).await? {
        Some(book) => Ok(HttpResponse::Ok().json(book)),
        None => Err(not_found(id)),
    }
}

/// Adds a book to the catalog.
///
/// Requires a bearer token. The body follows `BookInput`; `id` may be omitted to let the
/// store pick the next free id.
///
/// ## Responses:
/// - `201 Created`: Returns the new `Book`.
/// - `400 Bad Request`: Malformed body, or the id is already taken.
/// - `401 Unauthorized`: Missing or invalid token.
/// - `422 Unprocessable Entity`: Field validation failed.
#[post("")]
pub async fn create_book(
    admin: AuthenticatedAdmin,
    books: web::Data<dyn BookStore>,
    book_data: web::Json<BookInput>,
) -> Result<impl Responder, AppError> {
    book_data.validate()?;

    let book = books.create_book(book_data.into_inner()).await?;
    log::info!(
        "{} by {} has been added with ID:{} by {}",
        book.title,
        book.author,
        book.id,
        admin.email
    );

    Ok(HttpResponse::Created().json(book))
}

/// Updates some fields of an existing book.
///
/// Requires a bearer token. Fields absent from the body keep their stored value.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Book`.
/// - `401 Unauthorized`: Missing or invalid token.
/// - `404 Not Found`: No book has this id.
/// - `422 Unprocessable Entity`: Field validation failed.
#[put("/{id}")]
pub async fn update_book(
    admin: AuthenticatedAdmin,
    books: web::Data<dyn BookStore>,
    book_id: web::Path<i32>,
    book_data: web::Json<BookUpdate>,
) -> Result<impl Responder, AppError> {
    book_data.validate()?;
    let id = book_id.into_inner();

    match books.update_book(id, book_data.into_inner()).await? {
        Some(book) => {
            log::info!("Book ID:{} has been updated by {}", id, admin.email);
            Ok(HttpResponse::Ok().json(book))
        }
        None => Err(not_found(id)),
    }
}

/// Deletes a book by its id.
///
/// Requires a bearer token.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: Missing or invalid token.
/// - `404 Not Found`: No book has this id.
#[delete("/{id}")]
pub async fn delete_book(
    admin: AuthenticatedAdmin,
    books: web::Data<dyn BookStore>,
    book_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let id = book_id.into_inner();

    if !books.delete_book(id).await? {
        return Err(not_found(id));
    }
    log::info!("Book ID:{} has been deleted by {}", id, admin.email);

    Ok(HttpResponse::NoContent().finish())
}
