pub mod admins;
pub mod books;
pub mod health;
pub mod login;

use actix_web::web;

use crate::auth::AuthMiddleware;

/// Mounts every route. Book reads are public and book writes need a token; the admin
/// scope needs a token for every method.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(login::login)
        .service(
            web::scope("/books")
                .wrap(AuthMiddleware::writes_only())
                .service(books::get_books)
                .service(books::create_book)
                .service(books::get_book)
                .service(books::update_book)
                .service(books::delete_book),
        )
        .service(
            web::scope("/admin")
                .wrap(AuthMiddleware::all_methods())
                .service(admins::get_admins)
                .service(admins::create_admin),
        );
}
