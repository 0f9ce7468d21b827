#![doc = "The `bookshelf` library crate."]
#![doc = ""]
#![doc = "Domain models, the record store, token-based admin authentication, routing and"]
#![doc = "error handling for the library catalog backend. The binary (`main.rs`) reads the"]
#![doc = "configuration, picks a store and serves the routes declared here."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
