mod config;
mod db;
mod error;
mod repository;
mod services;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::db::Db;
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let db = Db::open(&config.database).map_err(io::Error::other)?;
    let json_limit = config.json_limit;

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .wrap(Logger::default())
            .app_data(web::Data::new(db.clone()))
            .configure(|cfg| services::configure(cfg, json_limit))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
