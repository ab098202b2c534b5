//! # Generic CRUD handlers
//!
//! The handlers here are written once and instantiated per record type
//! (`list::<Article>`, `create::<Task>`, ...). Domain modules only decide
//! which URL paths and HTTP methods reach which handler.
//!
//! | handler          | method | success                  |
//! |------------------|--------|--------------------------|
//! | `list`           | GET    | `200` with every record  |
//! | `create`         | POST   | `201` with the new record |
//! | `retrieve`       | GET    | `200` with the record    |
//! | `update`         | PUT    | `200` with the record    |
//! | `partial_update` | PATCH  | `200` with the record    |
//! | `destroy`        | DELETE | `204`, empty body        |
//!
//! `HEAD` is routed wherever `GET` is. A detail id with no matching row
//! gives `404` before the payload is validated; an invalid payload gives
//! `400` and nothing is written.

use crate::db::Db;
use crate::error::ApiError;
use crate::repository::{self, Record};
use actix_web::{web, HttpRequest, HttpResponse, Resource};
use common::validation::Submission;
use log::{debug, info, warn};

/// Returns every stored record of type `R`, ordered by id.
pub async fn list<R: Record>(db: web::Data<Db>) -> Result<HttpResponse, ApiError> {
    let records = db.run(|conn| Ok(repository::all::<R>(conn)?)).await?;
    debug!("Listing {} {} record(s)", records.len(), R::NAME);
    Ok(HttpResponse::Ok().json(records))
}

/// Validates a full payload and stores it as a new record.
///
/// # Arguments
///
/// * `db` - The shared database handle.
/// * `payload` - The request body. Every required field must be present.
///
/// # Returns
///
/// `201 Created` with the stored record, including its generated `id` and
/// creation date, or `400 Bad Request` with one entry per invalid field.
pub async fn create<R: Record>(
    db: web::Data<Db>,
    payload: web::Json<Submission<R::Payload>>,
) -> Result<HttpResponse, ApiError> {
    let submission = payload.into_inner();
    validate::<R>(&submission, false)?;

    let record = R::from_payload(submission.payload);
    let created = db
        .run(move |conn| Ok(repository::create(conn, &record)?))
        .await?;

    info!("Created {} {}", R::NAME, created.id());
    Ok(HttpResponse::Created().json(created))
}

/// Returns the record with the id from the path, or `404 Not Found`.
pub async fn retrieve<R: Record>(
    db: web::Data<Db>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let record = db
        .run(move |conn| repository::find::<R>(conn, id)?.ok_or(ApiError::NotFound))
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Replaces the writable fields of an existing record.
///
/// # Arguments
///
/// * `id` - The record id from the path.
/// * `payload` - A full payload, validated the same way as on create.
///
/// # Returns
///
/// `200 OK` with the updated record. An unknown id is `404 Not Found` even
/// when the payload is invalid.
pub async fn update<R: Record>(
    db: web::Data<Db>,
    id: web::Path<i64>,
    payload: web::Json<Submission<R::Payload>>,
) -> Result<HttpResponse, ApiError> {
    write::<R>(db, id.into_inner(), payload.into_inner(), false).await
}

/// Like [`update`], but fields missing from the payload keep their value.
///
/// Fields that are present are still validated, and `null` is rejected.
pub async fn partial_update<R: Record>(
    db: web::Data<Db>,
    id: web::Path<i64>,
    payload: web::Json<Submission<R::Payload>>,
) -> Result<HttpResponse, ApiError> {
    write::<R>(db, id.into_inner(), payload.into_inner(), true).await
}

/// Deletes the record: `204 No Content`, or `404 Not Found` if it does not exist.
pub async fn destroy<R: Record>(
    db: web::Data<Db>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let deleted = db
        .run(move |conn| Ok(repository::delete::<R>(conn, id)?))
        .await?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    info!("Deleted {} {}", R::NAME, id);
    Ok(HttpResponse::NoContent().finish())
}

/// Fallback for a known path reached with a method it does not route.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(req.method().to_string()))
}

async fn write<R: Record>(
    db: web::Data<Db>,
    id: i64,
    submission: Submission<R::Payload>,
    partial: bool,
) -> Result<HttpResponse, ApiError> {
    let updated = db
        .run(move |conn| {
            let mut record = repository::find::<R>(conn, id)?.ok_or(ApiError::NotFound)?;
            validate::<R>(&submission, partial)?;
            record.apply(submission.payload);
            if !repository::save(conn, &record)? {
                return Err(ApiError::NotFound);
            }
            Ok(record)
        })
        .await?;

    info!("Updated {} {}", R::NAME, id);
    Ok(HttpResponse::Ok().json(updated))
}

fn validate<R: Record>(submission: &Submission<R::Payload>, partial: bool) -> Result<(), ApiError> {
    submission.check(partial).map_err(|fields| {
        warn!("Rejected {} payload: {:?}", R::NAME, fields);
        ApiError::Validation(fields)
    })
}

/// `GET` (and `HEAD`) lists, `POST` creates.
pub fn list_create<R: Record>(path: &str) -> Resource {
    web::resource(path)
        .route(web::get().to(list::<R>))
        .route(web::head().to(list::<R>))
        .route(web::post().to(create::<R>))
        .default_service(web::to(method_not_allowed))
}

/// `GET`, `HEAD`, `PUT` and `DELETE` on a single record. The path must contain `{id}`.
pub fn retrieve_update_destroy<R: Record>(path: &str) -> Resource {
    web::resource(path)
        .route(web::get().to(retrieve::<R>))
        .route(web::head().to(retrieve::<R>))
        .route(web::put().to(update::<R>))
        .route(web::delete().to(destroy::<R>))
        .default_service(web::to(method_not_allowed))
}

/// Every action of a model viewset, registered under `{prefix}/` and `{prefix}/{id}/`.
pub fn register<R: Record>(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(list_create::<R>(&format!("{}/", prefix)))
        .service(
            retrieve_update_destroy::<R>(&format!("{}/{{id}}/", prefix))
                .route(web::patch().to(partial_update::<R>)),
        );
}
