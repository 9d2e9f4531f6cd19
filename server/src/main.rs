use std::io;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::{Condition, Logger},
    web::{self, Data},
    App, HttpServer,
};
use dotenv::dotenv;
use log::info;

mod config;
mod handlers;
mod routes;
mod templates;
mod tests;
mod validate;

use crate::config::Config;
use crate::routes::{not_found, routes};

fn startup_error<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

fn cors(client_host: &Option<String>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600);

    match client_host {
        Some(host) => cors.allowed_origin(host),
        None => cors,
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(startup_error)?;

    let pool = db::new_pool(&config.database_url).map_err(startup_error)?;
    db::run_migrations(&pool).map_err(startup_error)?;
    let pool = Data::new(pool);
    let tmpl = Data::new(templates::load().map_err(startup_error)?);

    info!("Listening on {}", config.bind_address);

    let client_host = config.client_host.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(client_host.is_some(), cors(&client_host)))
            .wrap(Logger::default())
            .app_data(pool.clone())
            .app_data(tmpl.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
