//! Client record service: lookup over HTTP, insert through the service
//! layer, and optional synthetic seeding at startup.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::{establish_connection_pool, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes;
    use crate::services::seed;

    /// Prepares storage, seeds it when configured, then builds and runs the
    /// Actix-Web HTTP server.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

        let repo = DieselRepository::new(pool);

        // Seeding failures abort startup.
        seed::seed_clients(&repo, &server_config.seed)
            .map_err(|e| std::io::Error::other(format!("Failed to seed clients: {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Starting client service on {}:{}",
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(repo.clone()))
                .configure(routes::configure::<DieselRepository>)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
