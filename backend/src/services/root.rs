//! Browsable entry points: each lists the viewsets registered under it as
//! absolute URLs, e.g. `{"task": "http://127.0.0.1:8000/task/"}`.

use actix_web::{web, HttpRequest, HttpResponse, Resource};
use serde_json::{Map, Value};

/// `GET {path}` answers with one `name -> URL` entry per registered viewset.
pub fn api_root(path: &str, entries: &'static [(&'static str, &'static str)]) -> Resource {
    web::resource(path)
        .route(web::get().to(move |req: HttpRequest| async move { listing(&req, entries) }))
        .route(web::head().to(move |req: HttpRequest| async move { listing(&req, entries) }))
        .default_service(web::to(super::viewset::method_not_allowed))
}

fn listing(req: &HttpRequest, entries: &[(&str, &str)]) -> HttpResponse {
    let info = req.connection_info();
    let base = format!("{}://{}", info.scheme(), info.host());
    let body: Map<String, Value> = entries
        .iter()
        .map(|(name, path)| (name.to_string(), Value::String(format!("{}{}", base, path))))
        .collect();
    HttpResponse::Ok().json(body)
}
