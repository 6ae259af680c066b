//! One-shot worker that fills the client table with synthetic records.
//!
//! Uses the same configuration as the server but ignores `seed.enabled`:
//! running this binary is the opt-in. The count comes from the first
//! argument when given, otherwise from `seed.count`.

use std::env;

use dotenvy::dotenv;

use clientes::db::{establish_connection_pool, run_migrations};
use clientes::models::config::{SeedConfig, load_server_config};
use clientes::repository::DieselRepository;
use clientes::services::seed::seed_clients;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_server_config() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let count = match env::args().nth(1) {
        Some(arg) => match arg.parse::<i64>() {
            Ok(count) => count,
            Err(err) => {
                log::error!("Invalid client count {arg:?}: {err}");
                std::process::exit(2);
            }
        },
        None => server_config.seed.count,
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_migrations(&pool) {
        log::error!("Failed to run migrations: {err}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    let config = SeedConfig {
        enabled: true,
        count,
    };

    match seed_clients(&repo, &config) {
        Ok(inserted) => log::info!("Inserted {inserted} synthetic clients"),
        Err(err) => {
            log::error!("Seeding aborted: {err}");
            std::process::exit(1);
        }
    }
}
