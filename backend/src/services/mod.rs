//! HTTP surface of the server.
//!
//! `configure` registers every domain's routes plus the extractor settings
//! shared by all of them. Record types are served by the generic handlers in
//! `viewset`; the domain modules only choose paths and methods.

pub mod articles;
pub mod blog;
pub mod items;
pub mod root;
pub mod tasks;
pub mod viewset;

use crate::error::{json_error_handler, path_error_handler};
use actix_web::web::{self, ServiceConfig};

/// Index at `/` for the viewsets mounted at the top level.
const ROOT_ENTRIES: &[(&str, &str)] = &[
    ("task", "/task/"),
    ("posts", "/posts/"),
    ("items", "/items/"),
];

pub fn configure(cfg: &mut ServiceConfig, json_limit: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(json_limit)
            .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(root::api_root("/", ROOT_ENTRIES));

    articles::configure_routes(cfg);
    tasks::configure_routes(cfg);
    blog::configure_routes(cfg);
    items::configure_routes(cfg);
}
