use std::sync::Arc;

use actix_web::web;

use crate::auth::{PasswordScheme, TokenService};
use crate::config::{BootstrapAdmin, Config};
use crate::error::AppError;
use crate::models::AdminInput;
use crate::routes;
use crate::store::{AdminStore, BookStore};

/// Shared application data, cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub tokens: web::Data<TokenService>,
    pub password_scheme: web::Data<PasswordScheme>,
    pub admins: web::Data<dyn AdminStore>,
    pub books: web::Data<dyn BookStore>,
}

impl AppState {
    /// Builds the state around one store serving both admins and books.
    pub fn new<S>(tokens: TokenService, password_scheme: PasswordScheme, store: Arc<S>) -> Self
    where
        S: AdminStore + BookStore + 'static,
    {
        let admins: Arc<dyn AdminStore> = store.clone();
        let books: Arc<dyn BookStore> = store;

        Self {
            tokens: web::Data::new(tokens),
            password_scheme: web::Data::new(password_scheme),
            admins: web::Data::from(admins),
            books: web::Data::from(books),
        }
    }

    pub fn from_config<S>(config: &Config, store: Arc<S>) -> Self
    where
        S: AdminStore + BookStore + 'static,
    {
        let tokens = TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl_secs);
        Self::new(tokens, config.password_scheme, store)
    }

    /// Registers the shared data and every route on `cfg`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.tokens.clone())
            .app_data(self.password_scheme.clone())
            .app_data(self.admins.clone())
            .app_data(self.books.clone())
            .configure(routes::config);
    }

    /// Creates the bootstrap admin unless one with the same email already exists.
    /// Returns whether an admin was created.
    pub async fn seed_admin(&self, admin: &BootstrapAdmin) -> Result<bool, AppError> {
        if self.admins.find_admin_by_email(&admin.email).await?.is_some() {
            log::info!("Bootstrap admin {} already present", admin.email);
            return Ok(false);
        }

        let created = self
            .admins
            .create_admin(AdminInput {
                id: None,
                email: admin.email.clone(),
                password: self
                    .password_scheme
                    .get_ref()
                    .prepare_blocking(admin.password.clone())
                    .await?,
            })
            .await?;
        log::info!("Created bootstrap admin {} with ID:{}", created.email, created.id);
        Ok(true)
    }
}
