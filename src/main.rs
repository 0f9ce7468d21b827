use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};

use bookshelf::config::Config;
use bookshelf::store::{MemoryStore, PgStore};
use bookshelf::AppState;

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        startup_error(e)
    })?;

    let state = match &config.database_url {
        Some(database_url) => {
            let store = PgStore::connect(database_url).await.map_err(startup_error)?;
            store.migrate().await.map_err(startup_error)?;
            log::info!("Using PostgreSQL store");
            AppState::from_config(&config, Arc::new(store))
        }
        None => {
            log::warn!("DATABASE_URL not set, records are kept in memory only");
            AppState::from_config(&config, Arc::new(MemoryStore::new()))
        }
    };

    if let Some(admin) = &config.bootstrap_admin {
        state.seed_admin(admin).await.map_err(startup_error)?;
    }

    log::info!(
        "Starting bookshelf at {} (password scheme: {})",
        config.server_url(),
        config.password_scheme
    );
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
