use actix_web::{web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;

pub mod config;
pub mod db;
mod handlers;
mod middleware;
pub mod models;
mod routes;
pub mod telemetry;

pub use crate::handlers::index_handler::IndexPage;
use crate::handlers::request_errors::{json_config, not_found, path_config};
use crate::middleware::cors::{cors, cors_headers, PreflightMiddleware};
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    index_page: IndexPage,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let index_page_data = web::Data::new(index_page);

    let server = HttpServer::new(move || {
        // Registration order is inside-out: the tracing logger sees every
        // request, and OPTIONS is answered before routing.
        App::new()
            .wrap(cors())
            .wrap(PreflightMiddleware)
            .wrap(cors_headers())
            .wrap(TracingLogger::default())
            .app_data(db_pool_data.clone())
            .app_data(index_page_data.clone())
            .app_data(path_config())
            .app_data(json_config())
            .configure(init_routes)
            .default_service(web::to(not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
