use dotenvy::dotenv;

use planos_api::config::ServerConfig;
use planos_api::db::{establish_connection_pool, run_migrations};
use planos_api::repository::DieselRepository;
use planos_api::seed::seed_catalog;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let server_config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    match seed_catalog(&repo) {
        Ok(planos) if planos.is_empty() => log::info!("Nothing to seed"),
        Ok(planos) => {
            for aggregate in planos {
                log::info!(
                    "Plano {} \"{}\" with {} produtos",
                    aggregate.plano.id,
                    aggregate.plano.nome,
                    aggregate.produtos.len()
                );
            }
        }
        Err(e) => {
            log::error!("Failed to seed catalog: {e}");
            std::process::exit(1);
        }
    }
}
