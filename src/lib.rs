use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::models::seed::load_seed_file;
use crate::repository::InMemoryRepository;
use crate::services::client::seed_clients;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds the client store, loading the configured seed file if any.
pub fn build_store(server_config: &ServerConfig) -> std::io::Result<InMemoryRepository> {
    let store = InMemoryRepository::new();

    if let Some(path) = &server_config.seed_file {
        let clients = load_seed_file(path)
            .map_err(|e| std::io::Error::other(format!("Failed to load seed file {path}: {e}")))?;
        let total = clients.len();
        let stored = seed_clients(&mut *store.lock(), clients);
        log::info!("Seeded {stored} of {total} clients from {path}");
    }

    Ok(store)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let store = web::Data::new(build_store(&server_config)?);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
